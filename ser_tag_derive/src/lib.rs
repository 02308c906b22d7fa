//! Derive macros for `ser_tag`.
//!
//! `#[derive(Save)]` and `#[derive(Load)]` cover structs (fields in
//! declaration order) and fieldless enums (encoded as their `#[repr]`
//! integer, `i32` when unspecified). Enums with fields and unions are
//! rejected.

use proc_macro2::TokenStream;
use syn::{parse_macro_input, Data, DeriveInput};

mod enums;
mod structs;

use enums::{derive_enum_load, derive_enum_save};
use structs::{derive_struct_load, derive_struct_save};

#[proc_macro_derive(Save)]
pub fn save(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	save_impl(input).into()
}

fn save_impl(input: DeriveInput) -> TokenStream {
	match input.data {
		Data::Struct(ref data) => derive_struct_save(data, &input),
		Data::Enum(ref data) => derive_enum_save(data, &input),
		Data::Union(_) => {
			syn::Error::new_spanned(&input.ident, "`Save` cannot be derived for unions")
				.to_compile_error()
		}
	}
}

#[proc_macro_derive(Load)]
pub fn load(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	load_impl(input).into()
}

fn load_impl(input: DeriveInput) -> TokenStream {
	match input.data {
		Data::Struct(ref data) => derive_struct_load(data, &input),
		Data::Enum(ref data) => derive_enum_load(data, &input),
		Data::Union(_) => {
			syn::Error::new_spanned(&input.ident, "`Load` cannot be derived for unions")
				.to_compile_error()
		}
	}
}
