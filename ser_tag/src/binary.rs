use std::mem;

use crate::{raw, raw::Scalar, InputArchive, Load, OutputArchive, Result, Save};

/// Wrapper that saves a scalar slice as one raw byte run, with no count
/// prefix. Use only with care: the load side must know the element count
/// out of band.
pub struct Binary<'a, T: Scalar> {
	items: &'a [T],
}

impl<T: Scalar> Binary<'_, T> {
	/// Number of items in the run.
	#[inline]
	pub fn count(&self) -> usize {
		self.items.len()
	}

	/// Size of the run in bytes.
	#[inline]
	pub fn size_in_bytes(&self) -> usize {
		self.items.len() * mem::size_of::<T>()
	}
}

/// Splice a raw byte run into the output.
pub fn as_binary<T: Scalar>(items: &[T]) -> Binary<'_, T> {
	Binary { items }
}

impl<T: Scalar> Save for Binary<'_, T> {
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		archive.write_bytes(raw::bytes_of(self.items));
		Ok(())
	}
}

/// Mutable counterpart of [`Binary`]: loads exactly
/// `count * size_of::<T>()` raw bytes into the borrowed slice.
pub struct BinaryMut<'a, T: Scalar> {
	items: &'a mut [T],
}

/// Fill a scalar slice from a raw byte run in the input.
pub fn as_binary_mut<T: Scalar>(items: &mut [T]) -> BinaryMut<'_, T> {
	BinaryMut { items }
}

impl<T: Scalar> Load for BinaryMut<'_, T> {
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		archive.read_bytes(raw::bytes_of_mut(self.items))
	}
}
