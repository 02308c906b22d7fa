//! Stable 64-bit type tags derived from names at compile time.

/// Serialization id labeling a polymorphic type on the wire.
///
/// Zero is a legal value but conventionally reserved for "never hashed".
pub type Id = u64;

/// Derive a stable [`Id`] from a name.
///
/// Runs SHA-1 over the name's bytes and folds the first eight digest bytes
/// into a `u64`: the leading two digest words form the high and low halves,
/// byte-swapped so that equal names produce the same id on every platform
/// and in every build. Evaluable in `const` context:
///
/// ```
/// use ser_tag::make_id;
///
/// const PERSON: u64 = make_id("v1::person");
/// assert_eq!(PERSON, 0xf798d7655fbaf63b);
/// ```
pub const fn make_id(name: &str) -> Id {
	let bytes = name.as_bytes();
	let len = bytes.len();

	let mut h0 = 0x67452301u32;
	let mut h1 = 0xEFCDAB89u32;
	let mut h2 = 0x98BADCFEu32;
	let mut h3 = 0x10325476u32;
	let mut h4 = 0xC3D2E1F0u32;

	// Message plus the 0x80 terminator plus the 64-bit bit length, rounded
	// up to whole 64-byte blocks.
	let total_blocks = (len + 9 + 63) / 64;
	let padded_len = total_blocks * 64;

	let mut block = 0;
	while block < total_blocks {
		// Assemble the sixteen big-endian message words of this block,
		// synthesizing the padding bytes on the fly.
		let mut w = [0u32; 80];
		let mut i = 0;
		while i < 64 {
			let index = block * 64 + i;
			let byte = if index < len {
				bytes[index]
			} else if index == len {
				0x80
			} else if index >= padded_len - 8 {
				(((len as u64) * 8) >> ((padded_len - 1 - index) * 8)) as u8
			} else {
				0
			};
			w[i / 4] |= (byte as u32) << ((3 - (i % 4)) * 8);
			i += 1;
		}

		// Extend the sixteen words into eighty.
		let mut j = 16;
		while j < 80 {
			w[j] = (w[j - 3] ^ w[j - 8] ^ w[j - 14] ^ w[j - 16]).rotate_left(1);
			j += 1;
		}

		let mut a = h0;
		let mut b = h1;
		let mut c = h2;
		let mut d = h3;
		let mut e = h4;

		let mut j = 0;
		while j < 80 {
			let (f, k) = if j < 20 {
				((b & c) | (!b & d), 0x5A827999u32)
			} else if j < 40 {
				(b ^ c ^ d, 0x6ED9EBA1u32)
			} else if j < 60 {
				((b & c) | (b & d) | (c & d), 0x8F1BBCDCu32)
			} else {
				(b ^ c ^ d, 0xCA62C1D6u32)
			};

			let temp = a
				.rotate_left(5)
				.wrapping_add(f)
				.wrapping_add(e)
				.wrapping_add(k)
				.wrapping_add(w[j]);
			e = d;
			d = c;
			c = b.rotate_left(30);
			b = a;
			a = temp;
			j += 1;
		}

		h0 = h0.wrapping_add(a);
		h1 = h1.wrapping_add(b);
		h2 = h2.wrapping_add(c);
		h3 = h3.wrapping_add(d);
		h4 = h4.wrapping_add(e);
		block += 1;
	}

	(((h0 as u64) << 32) | h1 as u64).swap_bytes()
}

#[cfg(test)]
mod tests {
	use super::*;

	// Expected values are the first eight SHA-1 digest bytes of the name,
	// read as a little-endian u64.
	#[test]
	fn reference_vectors() {
		assert_eq!(make_id("v1::person"), 0xf798d7655fbaf63b);
		assert_eq!(make_id("v1::student"), 0x8278ec9ea7e16526);
		assert_eq!(make_id(""), 0x0d4b6b5eeea339da);
		assert_eq!(make_id("a"), 0xfca7a5fa37e4f786);
	}

	#[test]
	fn equal_names_equal_ids() {
		assert_eq!(make_id("v1::person"), make_id("v1::person"));
		assert_ne!(make_id("v1::person"), make_id("v1::student"));
	}

	#[test]
	fn evaluates_in_const_context() {
		const ID: Id = make_id("v1::point");
		assert_eq!(ID, 0xd56574ea867f5697);
	}

	// Names longer than 55 bytes need a second SHA-1 block.
	#[test]
	fn multi_block_names() {
		let long = "v1::a::very::long::namespace::path::with::many::segments::type";
		assert!(long.len() > 55);
		assert_ne!(make_id(long), 0);
		assert_eq!(make_id(long), make_id(long));
	}
}
