use crate::{OutputArchive, Result, Save};

/// Appending output archive over a caller-owned `Vec<u8>`.
///
/// Writes append at a logical size tracked separately from the vector's
/// length. When an append would run past the vector's length, the vector is
/// resized to `(logical_size + extra) * 3 / 2`, so the length may temporarily
/// exceed the logical size between calls. Call [`fit`](Self::fit) to trim the
/// vector back down, or use [`MemoryOutputArchive`] which does so on every
/// return path.
pub struct LazyOutputArchive<'a> {
	output: &'a mut Vec<u8>,
	/// Number of bytes actually written, `<= output.len()`.
	size: usize,
}

impl<'a> LazyOutputArchive<'a> {
	/// Create an archive appending to `output`.
	///
	/// Existing contents are kept; writes start at `output.len()`.
	pub fn new(output: &'a mut Vec<u8>) -> Self {
		let size = output.len();
		Self { output, size }
	}

	/// Save one value into the archive.
	///
	/// Several values can be saved in one call as a tuple; tuples carry no
	/// prefix, so `save(&(a, b))` produces the same bytes as saving `a` then
	/// `b`. On error, everything written before the failure is kept (the
	/// archive is an appender, not transactional); callers that need
	/// atomicity stage into a scratch buffer and splice.
	pub fn save<T: Save + ?Sized>(&mut self, value: &T) -> Result<()> {
		value.save(self)
	}

	/// Number of bytes written so far, including bytes the target vector
	/// held before the archive was created.
	#[inline]
	pub fn size(&self) -> usize {
		self.size
	}

	/// Trim the target vector's length down to the logical size.
	pub fn fit(&mut self) {
		self.output.truncate(self.size);
	}
}

impl OutputArchive for LazyOutputArchive<'_> {
	#[inline]
	fn write_bytes(&mut self, bytes: &[u8]) {
		let end = self.size + bytes.len();
		if end > self.output.len() {
			self.output.resize(end * 3 / 2, 0);
		}
		self.output[self.size..end].copy_from_slice(bytes);
		self.size = end;
	}
}

/// Output archive that restores `output.len() == logical_size` on every
/// user-visible return from [`save`](Self::save), whether it succeeds or
/// fails. This is the archive most callers want.
pub struct MemoryOutputArchive<'a> {
	inner: LazyOutputArchive<'a>,
}

impl<'a> MemoryOutputArchive<'a> {
	/// Create an archive appending to `output`.
	pub fn new(output: &'a mut Vec<u8>) -> Self {
		Self {
			inner: LazyOutputArchive::new(output),
		}
	}

	/// Save one value (or a tuple of values) into the archive.
	///
	/// The target vector is trimmed to the logical size before returning,
	/// on the error path too, so no grown-capacity garbage is ever visible
	/// past the written bytes. Values fully serialized before a failure are
	/// kept.
	pub fn save<T: Save + ?Sized>(&mut self, value: &T) -> Result<()> {
		let result = self.inner.save(value);
		self.inner.fit();
		result
	}

	/// Number of bytes written so far.
	#[inline]
	pub fn size(&self) -> usize {
		self.inner.size()
	}
}

impl OutputArchive for MemoryOutputArchive<'_> {
	#[inline]
	fn write_bytes(&mut self, bytes: &[u8]) {
		self.inner.write_bytes(bytes);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn grows_by_three_halves() {
		let mut data = Vec::new();
		let mut archive = LazyOutputArchive::new(&mut data);
		archive.write_bytes(&[0u8; 4]);
		// (0 + 4) * 3 / 2
		assert_eq!(data.len(), 6);
	}

	#[test]
	fn fit_trims_to_logical_size() {
		let mut data = Vec::new();
		let mut archive = LazyOutputArchive::new(&mut data);
		archive.write_bytes(&[1, 2, 3]);
		archive.fit();
		assert_eq!(data, [1, 2, 3]);
	}

	#[test]
	fn appends_after_existing_contents() {
		let mut data = vec![9u8; 10];
		let mut archive = LazyOutputArchive::new(&mut data);
		archive.write_bytes(&[1, 2]);
		archive.fit();
		assert_eq!(archive.size(), 12);
		assert_eq!(&data[10..], [1, 2]);
	}
}
