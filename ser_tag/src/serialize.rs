use crate::{InputArchive, OutputArchive, Result};

/// Trait for types that can be written to an output archive.
///
/// Handler selection happens entirely at compile time through trait
/// coherence, in a fixed priority order:
///
/// 1. Raw pointers have no impls — serializing one is a compile error.
/// 2. [`Binary`](crate::Binary) wrappers splice a raw byte run.
/// 3. User types implement `Save` themselves, usually with
///    `#[derive(Save)]`.
/// 4. Primitive scalars emit their native-endian raw bytes.
/// 5. Fieldless enums (via the derive) emit their `#[repr]` integer.
///
/// A type with no impl is rejected at compile time; an ambiguous impl is a
/// coherence error, never a silent fallback.
pub trait Save {
	/// Write `self` to the archive.
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()>;

	/// Write a contiguous run of values.
	///
	/// The default loops over [`save`](Self::save); scalar types override it
	/// with a single raw-byte append. Both produce identical bytes, the
	/// override just skips the per-item calls. Container impls route slices
	/// through here so the fast path applies wherever the element type
	/// allows it.
	#[doc(hidden)]
	#[inline]
	fn save_slice(values: &[Self], archive: &mut dyn OutputArchive) -> Result<()>
	where
		Self: Sized,
	{
		for value in values {
			value.save(archive)?;
		}
		Ok(())
	}
}

/// Trait for owned values constructed by loading, rather than filled in
/// place.
///
/// Implemented by the owning pointers (`Box`, `Rc`, `Arc`), which
/// default-construct their pointee and fill it, and by `Box<dyn Base>`
/// polymorphic pointers, which build whatever concrete type the stream's id
/// names. `Option<T: LoadOwned>` is the nullable owning pointer: loading
/// always produces `Some`.
pub trait LoadOwned: Sized {
	/// Construct a value from the archive.
	fn load_owned(archive: &mut dyn InputArchive) -> Result<Self>;
}

/// Trait for types that can be read back from an input archive.
///
/// Loading fills an existing value in place, mirroring the save side:
/// one user-defined field list serves both directions, with the direction
/// encoded in the archive type.
pub trait Load {
	/// Read `self` from the archive, replacing the previous contents.
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()>;

	/// Read a contiguous run of values.
	///
	/// Counterpart of [`Save::save_slice`]; scalar types override the
	/// per-item loop with a single raw read into the slice.
	#[doc(hidden)]
	#[inline]
	fn load_slice(values: &mut [Self], archive: &mut dyn InputArchive) -> Result<()>
	where
		Self: Sized,
	{
		for value in values {
			value.load(archive)?;
		}
		Ok(())
	}
}
