use std::collections::VecDeque;

use crate::{Error, InputArchive, Load, OutputArchive, Result, Save};

/// Write the 32-bit count prefix of a variable-length container.
#[inline]
pub(crate) fn save_len(len: usize, archive: &mut dyn OutputArchive) -> Result<()> {
	let len = u32::try_from(len).map_err(|_| Error::LengthOverflow(len))?;
	len.save(archive)
}

/// Read the 32-bit count prefix back.
#[inline]
pub(crate) fn load_len(archive: &mut dyn InputArchive) -> Result<usize> {
	let mut len = 0u32;
	len.load(archive)?;
	Ok(len as usize)
}

impl<T: Save> Save for [T] {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		save_len(self.len(), archive)?;
		T::save_slice(self, archive)
	}
}

impl<T: Save> Save for Vec<T> {
	#[inline]
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		self.as_slice().save(archive)
	}
}

impl<T: Load + Default> Load for Vec<T> {
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		let len = load_len(archive)?;
		self.clear();
		self.resize_with(len, T::default);
		T::load_slice(self, archive)
	}
}

impl<T: Save> Save for VecDeque<T> {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		save_len(self.len(), archive)?;
		for item in self {
			item.save(archive)?;
		}
		Ok(())
	}
}

impl<T: Load + Default> Load for VecDeque<T> {
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		let len = load_len(archive)?;
		self.clear();
		for _ in 0..len {
			let mut item = T::default();
			item.load(archive)?;
			self.push_back(item);
		}
		Ok(())
	}
}

impl Save for str {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		save_len(self.len(), archive)?;
		archive.write_bytes(self.as_bytes());
		Ok(())
	}
}

impl Save for String {
	#[inline]
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		self.as_str().save(archive)
	}
}

impl Load for String {
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		let len = load_len(archive)?;
		// Reuse the existing allocation where possible.
		let mut bytes = std::mem::take(self).into_bytes();
		bytes.clear();
		bytes.resize(len, 0);
		archive.read_bytes(&mut bytes)?;
		*self = String::from_utf8(bytes)?;
		Ok(())
	}
}

impl<T: Save, const N: usize> Save for [T; N] {
	#[inline]
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		// Fixed-size: items only, no count prefix.
		T::save_slice(self, archive)
	}
}

impl<T: Load, const N: usize> Load for [T; N] {
	#[inline]
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		T::load_slice(self, archive)
	}
}
