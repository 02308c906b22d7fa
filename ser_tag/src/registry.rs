//! Process-wide polymorphic type registries, one per archive direction.
//!
//! The save registry maps a concrete type's dynamic-type key
//! (`std::any::TypeId`) to its id, and the id to a save handler. The load
//! registry maps the id to a load handler that builds the concrete type,
//! plus one cast entry per base trait the type was registered as — the
//! assignability check a class hierarchy would perform with a dynamic cast.
//!
//! Reads take the shared side of a readers-writer lock, additions the
//! exclusive side; entries are never removed. Locks are released before a
//! handler runs, so handlers may reenter the registry for nested
//! polymorphic fields without deadlock.

use std::any::{Any, TypeId};
use std::sync::RwLock;

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use crate::{Error, Id, InputArchive, Load, OutputArchive, Polymorphic, Result, Save};

/// Save handler: writes the body of the erased object.
pub type SaveFn = fn(&mut dyn OutputArchive, &dyn Polymorphic) -> Result<()>;

/// Load handler: builds and fills the registered concrete type.
pub type LoadFn = fn(&mut dyn InputArchive) -> Result<Box<dyn Polymorphic>>;

/// Converts a freshly loaded object into a boxed base-trait object
/// (`Box<dyn Base>`, wrapped in `Box<dyn Any>` to fit one table).
pub type CastFn = fn(Box<dyn Polymorphic>) -> Result<Box<dyn Any>>;

#[derive(Default)]
struct SaveRegistry {
	ids: HashMap<TypeId, Id>,
	handlers: HashMap<Id, SaveFn>,
}

#[derive(Default)]
struct LoadRegistry {
	handlers: HashMap<Id, LoadFn>,
	casts: HashMap<(Id, TypeId), CastFn>,
}

static SAVE: Lazy<RwLock<SaveRegistry>> = Lazy::new(Default::default);
static LOAD: Lazy<RwLock<LoadRegistry>> = Lazy::new(Default::default);

fn save_handler<T: Polymorphic + Save>(
	archive: &mut dyn OutputArchive,
	object: &dyn Polymorphic,
) -> Result<()> {
	let any: &dyn Any = object;
	// The save registry resolved the handler from the object's own TypeId,
	// so this only misses if two types were registered under one id.
	let concrete = any.downcast_ref::<T>().ok_or(Error::TypeMismatch)?;
	concrete.save(archive)
}

fn load_handler<T: Polymorphic + Load + Default>(
	archive: &mut dyn InputArchive,
) -> Result<Box<dyn Polymorphic>> {
	let mut object = T::default();
	object.load(archive)?;
	Ok(Box::new(object))
}

/// Register `T` under `id` for both archive directions.
///
/// `casts` holds one entry per base trait `T` may be loaded as; the
/// [`register_types!`](crate::register_types) macro builds it. Registering
/// again under the same id replaces the previous entry (last writer wins).
pub fn add<T>(id: Id, casts: &[(TypeId, CastFn)])
where
	T: Polymorphic + Save + Load + Default,
{
	{
		let mut registry = SAVE.write().unwrap_or_else(|poison| poison.into_inner());
		registry.ids.insert(TypeId::of::<T>(), id);
		registry.handlers.insert(id, save_handler::<T>);
	}
	{
		let mut registry = LOAD.write().unwrap_or_else(|poison| poison.into_inner());
		registry.handlers.insert(id, load_handler::<T>);
		for (target, cast) in casts {
			registry.casts.insert((id, *target), *cast);
		}
	}
}

/// Save an erased polymorphic object: its 8-byte id, then its body.
///
/// Fails with [`Error::UnregisteredType`] when the object's dynamic type
/// was never registered.
#[doc(hidden)]
pub fn save_erased(archive: &mut dyn OutputArchive, object: &dyn Polymorphic) -> Result<()> {
	let key = {
		let any: &dyn Any = object;
		any.type_id()
	};
	let (id, handler) = {
		let registry = SAVE.read().unwrap_or_else(|poison| poison.into_inner());
		let id = *registry.ids.get(&key).ok_or(Error::UnregisteredType)?;
		let handler = *registry.handlers.get(&id).ok_or(Error::UnregisteredType)?;
		(id, handler)
	};
	// Lock dropped above: the handler may reenter for nested fields.
	id.save(archive)?;
	handler(archive, object)
}

/// Load an erased polymorphic object: read the 8-byte id, then build the
/// registered concrete type from the archive.
#[doc(hidden)]
pub fn load_erased(archive: &mut dyn InputArchive) -> Result<(Id, Box<dyn Polymorphic>)> {
	let mut id: Id = 0;
	id.load(archive)?;
	let handler = {
		let registry = LOAD.read().unwrap_or_else(|poison| poison.into_inner());
		*registry.handlers.get(&id).ok_or(Error::UnregisteredType)?
	};
	let object = handler(archive)?;
	Ok((id, object))
}

/// Load an erased object and convert it to the base trait identified by
/// `target` (`TypeId::of::<dyn Base>()`).
///
/// The returned `Box<dyn Any>` wraps a `Box<dyn Base>`. Fails with
/// [`Error::TypeMismatch`] when the loaded concrete type was not registered
/// as that base.
#[doc(hidden)]
pub fn load_as(archive: &mut dyn InputArchive, target: TypeId) -> Result<Box<dyn Any>> {
	let (id, object) = load_erased(archive)?;
	let cast = {
		let registry = LOAD.read().unwrap_or_else(|poison| poison.into_inner());
		*registry.casts.get(&(id, target)).ok_or(Error::TypeMismatch)?
	};
	cast(object)
}

/// Register concrete types for polymorphic serialization.
///
/// Each entry names the concrete type, the base traits it may be loaded as
/// (separated by `|`; the universal [`Polymorphic`](crate::Polymorphic)
/// base is always available and need not be listed), and the name its id is
/// derived from:
///
/// ```
/// use ser_tag::{polymorphic_base, register_types, Load, Polymorphic, Save};
///
/// trait Shape: Polymorphic {
/// 	fn area(&self) -> f64;
/// }
/// polymorphic_base!(Shape);
///
/// #[derive(Save, Load, Default)]
/// struct Circle {
/// 	radius: f64,
/// }
/// impl Polymorphic for Circle {}
/// impl Shape for Circle {
/// 	fn area(&self) -> f64 {
/// 		std::f64::consts::PI * self.radius * self.radius
/// 	}
/// }
///
/// fn register() {
/// 	register_types! {
/// 		Circle: Shape = "v1::circle",
/// 	}
/// }
/// # register();
/// ```
///
/// Call once at process start; registering is idempotent for identical
/// entries.
#[macro_export]
macro_rules! register_types {
	($($ty:ty $(: $($base:path)|+)? = $name:expr),+ $(,)?) => {
		$(
			$crate::registry::add::<$ty>(
				$crate::make_id($name),
				&[$($(
					(::core::any::TypeId::of::<dyn $base>(), {
						fn cast(
							object: ::std::boxed::Box<dyn $crate::Polymorphic>,
						) -> $crate::Result<::std::boxed::Box<dyn ::core::any::Any>> {
							let any: ::std::boxed::Box<dyn ::core::any::Any> = object;
							match any.downcast::<$ty>() {
								::std::result::Result::Ok(concrete) => {
									let based: ::std::boxed::Box<dyn $base> = concrete;
									::std::result::Result::Ok(::std::boxed::Box::new(based))
								}
								::std::result::Result::Err(_) => {
									::std::result::Result::Err($crate::Error::TypeMismatch)
								}
							}
						}
						cast as $crate::registry::CastFn
					}),
				)+)?],
			);
		)+
	};
}
