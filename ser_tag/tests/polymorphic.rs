//! Registry scenarios: id-prefixed saves, dynamic-type-preserving loads,
//! mismatches and unregistered types.

mod common;

use std::any::Any;

use common::{register, Human, Person, Robot, Student, STUDENT_ID};
use ser_tag::{
	as_polymorphic, polymorphic_downcast, Error, MemoryInputArchive, MemoryOutputArchive,
	Polymorphic, Save, ViewInputArchive,
};

fn save_bytes<T: Save + ?Sized>(value: &T) -> Vec<u8> {
	let mut data = Vec::new();
	MemoryOutputArchive::new(&mut data)
		.save(value)
		.expect("save failed");
	data
}

fn student() -> Student {
	Student {
		name: String::from("1337"),
		university: String::from("1337University"),
	}
}

#[test]
fn save_through_base_prefixes_the_id() {
	register();

	let person: Option<Box<dyn Person>> = Some(Box::new(student()));
	let data = save_bytes(&person);

	assert_eq!(data[..8], STUDENT_ID.to_ne_bytes());
	// After the id comes the concrete type's plain encoding.
	assert_eq!(&data[8..], save_bytes(&student()).as_slice());
}

#[test]
fn as_polymorphic_matches_pointer_save() {
	register();

	let person: Option<Box<dyn Person>> = Some(Box::new(student()));
	assert_eq!(save_bytes(&as_polymorphic(&student())), save_bytes(&person));
}

#[test]
fn load_preserves_dynamic_type() {
	register();

	let person: Option<Box<dyn Person>> = Some(Box::new(student()));
	let mut data = save_bytes(&person);

	let mut loaded: Option<Box<dyn Person>> = None;
	MemoryInputArchive::new(&mut data)
		.load(&mut loaded)
		.expect("load failed");
	assert!(data.is_empty());

	let loaded = loaded.expect("no object loaded");
	assert_eq!(loaded.name(), "1337");
	let any: &dyn Any = &*loaded;
	let concrete = any.downcast_ref::<Student>().expect("dynamic type lost");
	assert_eq!(concrete, &student());
}

#[test]
fn load_through_universal_base_and_downcast() {
	register();

	let mut data = save_bytes(&as_polymorphic(&student()));

	let mut loaded: Option<Box<dyn Polymorphic>> = None;
	MemoryInputArchive::new(&mut data)
		.load(&mut loaded)
		.expect("load failed");

	let object = loaded.expect("no object loaded");
	let concrete = polymorphic_downcast::<Student>(object).expect("downcast failed");
	assert_eq!(*concrete, student());
}

#[test]
fn downcast_to_wrong_concrete_type_fails() {
	register();

	let mut data = save_bytes(&as_polymorphic(&student()));

	let mut loaded: Option<Box<dyn Polymorphic>> = None;
	MemoryInputArchive::new(&mut data)
		.load(&mut loaded)
		.expect("load failed");

	let object = loaded.expect("no object loaded");
	let result = polymorphic_downcast::<Human>(object);
	assert!(matches!(result, Err(Error::TypeMismatch)));
}

#[test]
fn load_as_unrelated_base_is_a_mismatch() {
	register();

	let data = save_bytes(&as_polymorphic(&student()));

	// Student is registered, but not as a Robot.
	let mut loaded: Option<Box<dyn Robot>> = None;
	let result = ViewInputArchive::new(&data).load(&mut loaded);
	assert!(matches!(result, Err(Error::TypeMismatch)));
	assert!(loaded.is_none());
}

#[test]
fn saving_unregistered_type_fails_before_writing() {
	#[derive(ser_tag::Save, ser_tag::Load, Default)]
	struct Ghost {
		value: u8,
	}
	impl Polymorphic for Ghost {}

	let mut data = Vec::new();
	let result = MemoryOutputArchive::new(&mut data).save(&as_polymorphic(&Ghost { value: 1 }));
	assert!(matches!(result, Err(Error::UnregisteredType)));
	assert!(data.is_empty());
}

#[test]
fn loading_unknown_id_fails() {
	register();

	let data = save_bytes(&ser_tag::make_id("v1::never-registered"));

	let mut loaded: Option<Box<dyn Person>> = None;
	let result = ViewInputArchive::new(&data).load(&mut loaded);
	assert!(matches!(result, Err(Error::UnregisteredType)));
}

#[test]
fn saving_null_pointer_fails_before_the_id() {
	register();

	let person: Option<Box<dyn Person>> = None;
	let mut data = Vec::new();
	let result = MemoryOutputArchive::new(&mut data).save(&person);
	assert!(matches!(result, Err(Error::NullPointer)));
	assert!(data.is_empty());
}

#[test]
fn nested_polymorphic_fields_reenter_the_registry() {
	register();

	#[derive(ser_tag::Save, ser_tag::Load, Default)]
	struct Enrollment {
		year: u16,
		who: Option<Box<dyn Person>>,
	}

	let mut data = save_bytes(&Enrollment {
		year: 2024,
		who: Some(Box::new(student())),
	});

	let mut loaded = Enrollment::default();
	MemoryInputArchive::new(&mut data)
		.load(&mut loaded)
		.expect("load failed");
	assert_eq!(loaded.year, 2024);
	assert_eq!(loaded.who.expect("no object loaded").name(), "1337");
}

#[test]
fn ids_are_stable_and_distinct() {
	assert_eq!(ser_tag::make_id("v1::person"), 0xf798d7655fbaf63b);
	assert_eq!(ser_tag::make_id("v1::student"), 0x8278ec9ea7e16526);
	assert_ne!(common::PERSON_ID, common::STUDENT_ID);
	assert_ne!(common::PERSON_ID, 0);
	assert_ne!(common::STUDENT_ID, 0);
}

#[test]
fn both_registered_types_roundtrip_through_the_same_base() {
	register();

	let mut data = Vec::new();
	let mut out = MemoryOutputArchive::new(&mut data);
	let first: Option<Box<dyn Person>> = Some(Box::new(Human {
		name: String::from("h"),
	}));
	let second: Option<Box<dyn Person>> = Some(Box::new(student()));
	out.save(&first).expect("save failed");
	out.save(&second).expect("save failed");

	let mut input = ViewInputArchive::new(&data);
	let mut a: Option<Box<dyn Person>> = None;
	let mut b: Option<Box<dyn Person>> = None;
	input.load(&mut a).expect("load failed");
	input.load(&mut b).expect("load failed");

	let a = a.expect("no object loaded");
	let b = b.expect("no object loaded");
	let a: &dyn Any = &*a;
	let b: &dyn Any = &*b;
	assert!(a.downcast_ref::<Human>().is_some());
	assert!(b.downcast_ref::<Student>().is_some());
}
