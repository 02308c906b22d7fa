use crate::{Error, InputArchive, Load, Result};

/// Bounds-checked read shared by both input archives. On failure the offset
/// is left where it was and `out` is untouched.
fn read_from(input: &[u8], offset: &mut usize, out: &mut [u8]) -> Result<()> {
	let available = input.len() - *offset;
	if out.len() > available {
		return Err(Error::OutOfRange {
			needed: out.len(),
			available,
		});
	}
	out.copy_from_slice(&input[*offset..*offset + out.len()]);
	*offset += out.len();
	Ok(())
}

/// Input archive reading from a borrowed byte slice.
///
/// Every read advances the cursor offset; a read past the end fails with
/// [`Error::OutOfRange`] without advancing it. The slice is never modified.
pub struct ViewInputArchive<'a> {
	input: &'a [u8],
	offset: usize,
}

impl<'a> ViewInputArchive<'a> {
	/// Create an archive reading from `input`, starting at offset zero.
	pub fn new(input: &'a [u8]) -> Self {
		Self { input, offset: 0 }
	}

	/// Load one value (or a tuple of values) in place.
	///
	/// On error, destinations loaded before the failure keep their new
	/// values; there is no rollback.
	pub fn load<T: Load + ?Sized>(&mut self, value: &mut T) -> Result<()> {
		value.load(self)
	}
}

impl InputArchive for ViewInputArchive<'_> {
	fn read_bytes(&mut self, out: &mut [u8]) -> Result<()> {
		read_from(self.input, &mut self.offset, out)
	}

	#[inline]
	fn offset(&self) -> usize {
		self.offset
	}

	#[inline]
	fn reset(&mut self) {
		self.offset = 0;
	}
}

/// Consuming input archive over a caller-owned `Vec<u8>`.
///
/// On every user-visible return from [`load`](Self::load), successful or
/// not, exactly the bytes of the fully-loaded values are erased from the
/// head of the vector and the cursor resets to zero. Data appended to the
/// vector between calls is picked up by the next call.
pub struct MemoryInputArchive<'a> {
	input: &'a mut Vec<u8>,
	offset: usize,
}

impl<'a> MemoryInputArchive<'a> {
	/// Create an archive consuming from the head of `input`.
	pub fn new(input: &'a mut Vec<u8>) -> Self {
		Self { input, offset: 0 }
	}

	/// Load one value (or a tuple of values) in place, then erase the
	/// consumed bytes from the head of the source vector.
	///
	/// A read past the end fails with [`Error::OutOfRange`]; the failing
	/// value consumes nothing, so a first-read failure leaves the vector
	/// untouched and the caller may retry once more data has arrived.
	pub fn load<T: Load + ?Sized>(&mut self, value: &mut T) -> Result<()> {
		let result = value.load(self);
		self.input.drain(..self.offset);
		self.offset = 0;
		result
	}
}

impl InputArchive for MemoryInputArchive<'_> {
	fn read_bytes(&mut self, out: &mut [u8]) -> Result<()> {
		read_from(self.input, &mut self.offset, out)
	}

	#[inline]
	fn offset(&self) -> usize {
		self.offset
	}

	#[inline]
	fn reset(&mut self) {
		self.offset = 0;
	}
}
