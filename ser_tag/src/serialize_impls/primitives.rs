use std::mem;

use crate::{raw, Error, InputArchive, Load, OutputArchive, Result, Save};

macro_rules! impl_scalar {
	($ty:ty) => {
		impl Save for $ty {
			#[inline]
			fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
				archive.write_bytes(&self.to_ne_bytes());
				Ok(())
			}

			#[inline]
			fn save_slice(values: &[Self], archive: &mut dyn OutputArchive) -> Result<()> {
				archive.write_bytes(raw::bytes_of(values));
				Ok(())
			}
		}

		impl Load for $ty {
			#[inline]
			fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
				let mut bytes = [0u8; mem::size_of::<$ty>()];
				archive.read_bytes(&mut bytes)?;
				*self = <$ty>::from_ne_bytes(bytes);
				Ok(())
			}

			#[inline]
			fn load_slice(values: &mut [Self], archive: &mut dyn InputArchive) -> Result<()> {
				archive.read_bytes(raw::bytes_of_mut(values))
			}
		}
	};
}

impl_scalar!(u8);
impl_scalar!(u16);
impl_scalar!(u32);
impl_scalar!(u64);
impl_scalar!(u128);
impl_scalar!(usize);

impl_scalar!(i8);
impl_scalar!(i16);
impl_scalar!(i32);
impl_scalar!(i64);
impl_scalar!(i128);
impl_scalar!(isize);

impl_scalar!(f32);
impl_scalar!(f64);

// `bool` and `char` are encoded as their integer forms but validated on
// load, since not every bit pattern is a valid value.

impl Save for bool {
	#[inline]
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		archive.write_bytes(&[*self as u8]);
		Ok(())
	}
}

impl Load for bool {
	#[inline]
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		let mut byte = 0u8;
		byte.load(archive)?;
		*self = byte != 0;
		Ok(())
	}
}

impl Save for char {
	#[inline]
	fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
		(*self as u32).save(archive)
	}
}

impl Load for char {
	#[inline]
	fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
		let mut raw = 0u32;
		raw.load(archive)?;
		*self = char::from_u32(raw).ok_or(Error::InvalidValue("char"))?;
		Ok(())
	}
}

impl Save for () {
	#[inline]
	fn save(&self, _archive: &mut dyn OutputArchive) -> Result<()> {
		Ok(())
	}
}

impl Load for () {
	#[inline]
	fn load(&mut self, _archive: &mut dyn InputArchive) -> Result<()> {
		Ok(())
	}
}
