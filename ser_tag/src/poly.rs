use std::any::Any;

use crate::{registry, Error, InputArchive, Load, LoadOwned, OutputArchive, Result, Save};

/// Capability marker for runtime-polymorphic serialization.
///
/// Every concrete type meant to be saved or loaded through an abstract base
/// declares the capability (`impl Polymorphic for MyType {}`) and is
/// registered once at process start with
/// [`register_types!`](crate::register_types). The `Any` supertrait supplies
/// the dynamic-type key the save-side registry looks ids up by.
///
/// User base traits extend the capability
/// (`trait Shape: Polymorphic { .. }`) and gain archive support with
/// [`polymorphic_base!`](crate::polymorphic_base).
pub trait Polymorphic: Any {}

/// Wrapper that saves a concrete value with its leading 8-byte id, as if it
/// were reached through an abstract base. Created by [`as_polymorphic`].
pub struct Tagged<'a, T: Polymorphic> {
	object: &'a T,
}

/// Save a concrete polymorphic value with its leading id.
///
/// The load side reads the id back through any polymorphic owning pointer,
/// e.g. `Option<Box<dyn Polymorphic>>`.
pub fn as_polymorphic<T: Polymorphic>(object: &T) -> Tagged<'_, T> {
	Tagged { object }
}

impl<T: Polymorphic> Save for Tagged<'_, T> {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		registry::save_erased(archive, self.object)
	}
}

/// Recover the concrete type of a loaded polymorphic object.
///
/// Fails with [`Error::TypeMismatch`] if the dynamic type is not `T`.
pub fn polymorphic_downcast<T: Polymorphic>(object: Box<dyn Polymorphic>) -> Result<Box<T>> {
	let any: Box<dyn Any> = object;
	any.downcast::<T>().map_err(|_| Error::TypeMismatch)
}

// `Option<Box<dyn Polymorphic>>` gets its nullable-pointer behavior from
// the blanket `Option` impls over these.

impl Save for Box<dyn Polymorphic> {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		registry::save_erased(archive, &**self)
	}
}

impl Load for Box<dyn Polymorphic> {
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		*self = Self::load_owned(archive)?;
		Ok(())
	}
}

impl LoadOwned for Box<dyn Polymorphic> {
	fn load_owned(archive: &mut dyn InputArchive) -> Result<Self> {
		let (_, object) = registry::load_erased(archive)?;
		Ok(object)
	}
}

/// Implement archive support for a user base trait.
///
/// The trait must extend [`Polymorphic`]. Generates `Save`, `Load` and
/// `LoadOwned` for `Box<dyn Base>` (the blanket `Option` impls then cover
/// `Option<Box<dyn Base>>`, the nullable form): saving writes the concrete
/// type's id then its body; loading reads the id, builds the registered
/// concrete type and checks it was registered as this base, failing with
/// [`Error::TypeMismatch`](crate::Error::TypeMismatch) otherwise.
///
/// ```
/// use ser_tag::{polymorphic_base, Polymorphic};
///
/// trait Shape: Polymorphic {
/// 	fn area(&self) -> f64;
/// }
/// polymorphic_base!(Shape);
/// ```
#[macro_export]
macro_rules! polymorphic_base {
	($base:path) => {
		impl $crate::Save for ::std::boxed::Box<dyn $base> {
			fn save(
				&self,
				archive: &mut dyn $crate::OutputArchive,
			) -> $crate::Result<()> {
				$crate::registry::save_erased(archive, &**self)
			}
		}

		impl $crate::Load for ::std::boxed::Box<dyn $base> {
			fn load(
				&mut self,
				archive: &mut dyn $crate::InputArchive,
			) -> $crate::Result<()> {
				*self = <Self as $crate::LoadOwned>::load_owned(archive)?;
				::std::result::Result::Ok(())
			}
		}

		impl $crate::LoadOwned for ::std::boxed::Box<dyn $base> {
			fn load_owned(
				archive: &mut dyn $crate::InputArchive,
			) -> $crate::Result<Self> {
				let target = ::core::any::TypeId::of::<dyn $base>();
				let object = $crate::registry::load_as(archive, target)?;
				match object.downcast::<::std::boxed::Box<dyn $base>>() {
					::std::result::Result::Ok(object) => ::std::result::Result::Ok(*object),
					::std::result::Result::Err(_) => {
						::std::result::Result::Err($crate::Error::TypeMismatch)
					}
				}
			}
		}
	};
}
