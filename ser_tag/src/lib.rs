//! Binary serialization with stable 64-bit type tags.
//!
//! `ser_tag` turns values into a compact byte stream and back, including
//! values known only through an abstract base, which travel with a stable
//! 64-bit id derived from a readable name via SHA-1 at compile time.
//!
//! The wire format is positional: no field names, no per-field tags, no
//! framing, native byte order (cross-platform portability is a non-goal;
//! producer and consumer must share a platform).
//!
//! Plain values round-trip through the two memory archives:
//!
//! ```
//! use ser_tag::{Load, MemoryInputArchive, MemoryOutputArchive, Save};
//!
//! #[derive(Save, Load, Default, Debug, PartialEq)]
//! struct Point {
//! 	x: i32,
//! 	y: i32,
//! }
//!
//! # fn main() -> ser_tag::Result<()> {
//! let mut data = Vec::new();
//! MemoryOutputArchive::new(&mut data).save(&Point { x: 1337, y: 1338 })?;
//!
//! let mut point = Point::default();
//! MemoryInputArchive::new(&mut data).load(&mut point)?;
//! assert_eq!(point, Point { x: 1337, y: 1338 });
//! # Ok(())
//! # }
//! ```
//!
//! Polymorphic values are registered once at process start and saved through
//! an owning pointer to their base, or with [`as_polymorphic`]:
//!
//! ```
//! use ser_tag::{
//! 	polymorphic_base, register_types, Load, MemoryInputArchive,
//! 	MemoryOutputArchive, Polymorphic, Save,
//! };
//!
//! trait Person: Polymorphic {
//! 	fn name(&self) -> &str;
//! }
//! polymorphic_base!(Person);
//!
//! #[derive(Save, Load, Default)]
//! struct Student {
//! 	name: String,
//! 	university: String,
//! }
//! impl Polymorphic for Student {}
//! impl Person for Student {
//! 	fn name(&self) -> &str {
//! 		&self.name
//! 	}
//! }
//!
//! # fn main() -> ser_tag::Result<()> {
//! register_types! {
//! 	Student: Person = "v1::student",
//! }
//!
//! let mut data = Vec::new();
//! let person: Option<Box<dyn Person>> = Some(Box::new(Student {
//! 	name: "1337".into(),
//! 	university: "1337University".into(),
//! }));
//! MemoryOutputArchive::new(&mut data).save(&person)?;
//!
//! let mut loaded: Option<Box<dyn Person>> = None;
//! MemoryInputArchive::new(&mut data).load(&mut loaded)?;
//! assert_eq!(loaded.map(|person| person.name().to_owned()).as_deref(), Some("1337"));
//! # Ok(())
//! # }
//! ```

// Derive macros
#[cfg(feature = "derive")]
pub use ser_tag_derive::{Load, Save};

mod archive;
pub use archive::{InputArchive, OutputArchive};

mod error;
pub use error::{Error, Result};

mod id;
pub use id::{make_id, Id};

mod output;
pub use output::{LazyOutputArchive, MemoryOutputArchive};

mod input;
pub use input::{MemoryInputArchive, ViewInputArchive};

mod serialize;
pub use serialize::{Load, LoadOwned, Save};

mod raw;
pub use raw::Scalar;

mod binary;
pub use binary::{as_binary, as_binary_mut, Binary, BinaryMut};

mod poly;
pub use poly::{as_polymorphic, polymorphic_downcast, Polymorphic, Tagged};

pub mod registry;

// `Save`/`Load` implementations for Rust internal types
mod serialize_impls;
