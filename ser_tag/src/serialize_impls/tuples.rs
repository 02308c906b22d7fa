use crate::{InputArchive, Load, OutputArchive, Result, Save};

// Tuples carry no prefix: items in declared order, left to right. This also
// makes `archive.save(&(a, b))` byte-identical to saving `a` then `b`.

macro_rules! impl_tuple {
	($($name:ident $index:tt),+) => {
		impl<$($name: Save),+> Save for ($($name,)+) {
			fn save(&self, archive: &mut dyn OutputArchive) -> Result<()> {
				$(self.$index.save(archive)?;)+
				Ok(())
			}
		}

		impl<$($name: Load),+> Load for ($($name,)+) {
			fn load(&mut self, archive: &mut dyn InputArchive) -> Result<()> {
				$(self.$index.load(archive)?;)+
				Ok(())
			}
		}
	};
}

impl_tuple!(A 0);
impl_tuple!(A 0, B 1);
impl_tuple!(A 0, B 1, C 2);
impl_tuple!(A 0, B 1, C 2, D 3);
impl_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
