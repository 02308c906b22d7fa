use std::rc::Rc;
use std::sync::Arc;

use crate::{Error, InputArchive, Load, LoadOwned, OutputArchive, Result, Save};

// Owning pointers to statically known pointees: body of the pointee only,
// nothing on the wire marks the indirection. `Option` is the nullable
// owning wrapper; saving `None` is an error, loading always produces
// `Some`. The polymorphic pointers (`Box<dyn Polymorphic>`,
// `Box<dyn Base>`) live in the registry layer and carry a leading id
// instead.

// The `T: Sized` bound (implicit here) is what keeps these impls coherent
// with the `Box<dyn Polymorphic>` and `Box<dyn Base>` impls of the registry
// layer: trait-object pointees are unsized and so never match these.
impl<T: Save> Save for Box<T> {
	#[inline]
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		(**self).save(archive)
	}
}

impl<T: Load> Load for Box<T> {
	#[inline]
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		(**self).load(archive)
	}
}

impl<T: Load + Default> LoadOwned for Box<T> {
	fn load_owned(archive: &mut dyn InputArchive) -> Result<Self> {
		let mut object = T::default();
		object.load(archive)?;
		Ok(Box::new(object))
	}
}

// Shared pointers serialize like unique ones: the pointee's body, with no
// identity preservation. Two `Rc`s to one object save two copies and load
// as two distinct objects.

impl<T: Save> Save for Rc<T> {
	#[inline]
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		(**self).save(archive)
	}
}

impl<T: Load + Default> Load for Rc<T> {
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		*self = Rc::load_owned(archive)?;
		Ok(())
	}
}

impl<T: Load + Default> LoadOwned for Rc<T> {
	fn load_owned(archive: &mut dyn InputArchive) -> Result<Self> {
		let mut object = T::default();
		object.load(archive)?;
		Ok(Rc::new(object))
	}
}

impl<T: Save> Save for Arc<T> {
	#[inline]
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		(**self).save(archive)
	}
}

impl<T: Load + Default> Load for Arc<T> {
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		*self = Arc::load_owned(archive)?;
		Ok(())
	}
}

impl<T: Load + Default> LoadOwned for Arc<T> {
	fn load_owned(archive: &mut dyn InputArchive) -> Result<Self> {
		let mut object = T::default();
		object.load(archive)?;
		Ok(Arc::new(object))
	}
}

// The nullable owning pointer. `None` cannot be represented on the wire
// (there is no presence flag), so saving it is an error and loading always
// fills the option.

impl<T: Save> Save for Option<T> {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		match self {
			Some(object) => object.save(archive),
			None => Err(Error::NullPointer),
		}
	}
}

impl<T: LoadOwned> Load for Option<T> {
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		*self = Some(T::load_owned(archive)?);
		Ok(())
	}
}
