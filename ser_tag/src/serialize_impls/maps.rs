use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::{load_len, save_len};
use crate::{InputArchive, Load, OutputArchive, Result, Save};

// Associative containers: 32-bit count, then the items in whatever order
// the container iterates. Order-sensitive consumers must use an ordered
// container on both sides. Loading inserts through the container's own
// policy, so a duplicate key in the input is resolved silently (maps keep
// the last occurrence, sets the first).

impl<K: Save, V: Save, S> Save for HashMap<K, V, S> {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		save_len(self.len(), archive)?;
		for (key, value) in self {
			key.save(archive)?;
			value.save(archive)?;
		}
		Ok(())
	}
}

impl<K, V, S> Load for HashMap<K, V, S>
where
	K: Load + Default + Eq + Hash,
	V: Load + Default,
	S: BuildHasher + Default,
{
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		let len = load_len(archive)?;
		self.clear();
		for _ in 0..len {
			let mut key = K::default();
			let mut value = V::default();
			key.load(archive)?;
			value.load(archive)?;
			self.insert(key, value);
		}
		Ok(())
	}
}

impl<K: Save, V: Save> Save for BTreeMap<K, V> {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		save_len(self.len(), archive)?;
		for (key, value) in self {
			key.save(archive)?;
			value.save(archive)?;
		}
		Ok(())
	}
}

impl<K, V> Load for BTreeMap<K, V>
where
	K: Load + Default + Ord,
	V: Load + Default,
{
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		let len = load_len(archive)?;
		self.clear();
		for _ in 0..len {
			let mut key = K::default();
			let mut value = V::default();
			key.load(archive)?;
			value.load(archive)?;
			self.insert(key, value);
		}
		Ok(())
	}
}

impl<T: Save, S> Save for HashSet<T, S> {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		save_len(self.len(), archive)?;
		for item in self {
			item.save(archive)?;
		}
		Ok(())
	}
}

impl<T, S> Load for HashSet<T, S>
where
	T: Load + Default + Eq + Hash,
	S: BuildHasher + Default,
{
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		let len = load_len(archive)?;
		self.clear();
		for _ in 0..len {
			let mut item = T::default();
			item.load(archive)?;
			self.insert(item);
		}
		Ok(())
	}
}

impl<T: Save> Save for BTreeSet<T> {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		save_len(self.len(), archive)?;
		for item in self {
			item.save(archive)?;
		}
		Ok(())
	}
}

impl<T> Load for BTreeSet<T>
where
	T: Load + Default + Ord,
{
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		let len = load_len(archive)?;
		self.clear();
		for _ in 0..len {
			let mut item = T::default();
			item.load(archive)?;
			self.insert(item);
		}
		Ok(())
	}
}
