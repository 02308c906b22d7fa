#![allow(dead_code)]

mod world_data;
pub use world_data::{generate_world, GameMode, Generate};

use std::sync::Once;

use ser_tag::{polymorphic_base, register_types, Load, Polymorphic, Save};

pub const PERSON_ID: u64 = ser_tag::make_id("v1::person");
pub const STUDENT_ID: u64 = ser_tag::make_id("v1::student");

pub trait Person: Polymorphic {
	fn name(&self) -> &str;
}
polymorphic_base!(Person);

// A base no test type is registered under, for mismatch scenarios.
pub trait Robot: Polymorphic {
	fn serial(&self) -> u64;
}
polymorphic_base!(Robot);

#[derive(Save, Load, Default, Debug, PartialEq, Clone)]
pub struct Human {
	pub name: String,
}

impl Polymorphic for Human {}

impl Person for Human {
	fn name(&self) -> &str {
		&self.name
	}
}

#[derive(Save, Load, Default, Debug, PartialEq, Clone)]
pub struct Student {
	pub name: String,
	pub university: String,
}

impl Polymorphic for Student {}

impl Person for Student {
	fn name(&self) -> &str {
		&self.name
	}
}

/// Register the shared test hierarchy. Safe to call from every test.
pub fn register() {
	static ONCE: Once = Once::new();
	ONCE.call_once(|| {
		register_types! {
			Human: Person = "v1::person",
			Student: Person = "v1::student",
		}
	});
}
