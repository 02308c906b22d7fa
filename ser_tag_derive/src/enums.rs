use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, DeriveInput, Fields, Ident};

/// Pick the wire integer type: the enum's `#[repr(..)]`, or `i32` when
/// unspecified.
fn repr_type(input: &DeriveInput) -> Ident {
	const INT_REPRS: &[&str] = &[
		"u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
	];

	for attr in &input.attrs {
		if !attr.path().is_ident("repr") {
			continue;
		}
		let mut found = None;
		let _ = attr.parse_nested_meta(|meta| {
			if let Some(ident) = meta.path.get_ident() {
				if INT_REPRS.contains(&ident.to_string().as_str()) {
					found = Some(ident.clone());
				}
			}
			Ok(())
		});
		if let Some(ident) = found {
			return ident;
		}
	}

	Ident::new("i32", proc_macro2::Span::call_site())
}

fn check_fieldless(data: &DataEnum, input: &DeriveInput) -> Option<TokenStream> {
	if data.variants.is_empty() {
		return Some(
			syn::Error::new_spanned(&input.ident, "cannot derive for empty enums")
				.to_compile_error(),
		);
	}
	for variant in &data.variants {
		if !matches!(variant.fields, Fields::Unit) {
			return Some(
				syn::Error::new_spanned(
					&variant.ident,
					"only fieldless enums can be derived; implement the trait by hand \
					 for enums with data",
				)
				.to_compile_error(),
			);
		}
	}
	None
}

pub fn derive_enum_save(data: &DataEnum, input: &DeriveInput) -> TokenStream {
	if let Some(error) = check_fieldless(data, input) {
		return error;
	}

	let ident = &input.ident;
	let repr = repr_type(input);

	// Match rather than `*self as repr`, which would move out of the borrow
	// for enums that are not `Copy`.
	let arms: Vec<TokenStream> = data
		.variants
		.iter()
		.map(|variant| {
			let name = &variant.ident;
			quote! {
				#ident::#name => #ident::#name as #repr,
			}
		})
		.collect();

	let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::ser_tag::Save for #ident #type_generics #where_clause {
			fn save(
				&self,
				archive: &mut dyn ::ser_tag::OutputArchive,
			) -> ::ser_tag::Result<()> {
				let raw: #repr = match self {
					#(#arms)*
				};
				::ser_tag::Save::save(&raw, archive)
			}
		}
	}
}

pub fn derive_enum_load(data: &DataEnum, input: &DeriveInput) -> TokenStream {
	if let Some(error) = check_fieldless(data, input) {
		return error;
	}

	let ident = &input.ident;
	let repr = repr_type(input);

	// One arm per variant, matching against the variant's own discriminant.
	let arms: Vec<TokenStream> = data
		.variants
		.iter()
		.map(|variant| {
			let name = &variant.ident;
			quote! {
				raw if raw == #ident::#name as #repr => #ident::#name,
			}
		})
		.collect();

	let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::ser_tag::Load for #ident #type_generics #where_clause {
			fn load(
				&mut self,
				archive: &mut dyn ::ser_tag::InputArchive,
			) -> ::ser_tag::Result<()> {
				let mut raw: #repr = 0;
				::ser_tag::Load::load(&mut raw, archive)?;
				*self = match raw {
					#(#arms)*
					_ => {
						return ::std::result::Result::Err(
							::ser_tag::Error::InvalidValue(::std::stringify!(#ident)),
						)
					}
				};
				::std::result::Result::Ok(())
			}
		}
	}
}
