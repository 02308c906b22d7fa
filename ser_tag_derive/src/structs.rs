use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, DeriveInput, Fields, Index};

pub fn derive_struct_save(data: &DataStruct, input: &DeriveInput) -> TokenStream {
	let field_stmts: Vec<TokenStream> = match &data.fields {
		Fields::Named(fields) => fields
			.named
			.iter()
			.map(|field| {
				let name = &field.ident;
				quote_spanned! {field.span()=>
					::ser_tag::Save::save(&self.#name, archive)?;
				}
			})
			.collect(),
		Fields::Unnamed(fields) => (0..fields.unnamed.len())
			.map(|index| {
				let index = Index::from(index);
				quote! {
					::ser_tag::Save::save(&self.#index, archive)?;
				}
			})
			.collect(),
		Fields::Unit => Vec::new(),
	};

	let ident = &input.ident;
	let mut generics = input.generics.clone();
	for param in generics.type_params_mut() {
		param.bounds.push(syn::parse_quote!(::ser_tag::Save));
	}
	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::ser_tag::Save for #ident #type_generics #where_clause {
			fn save(
				&self,
				archive: &mut dyn ::ser_tag::OutputArchive,
			) -> ::ser_tag::Result<()> {
				#(#field_stmts)*
				::std::result::Result::Ok(())
			}
		}
	}
}

pub fn derive_struct_load(data: &DataStruct, input: &DeriveInput) -> TokenStream {
	let field_stmts: Vec<TokenStream> = match &data.fields {
		Fields::Named(fields) => fields
			.named
			.iter()
			.map(|field| {
				let name = &field.ident;
				quote_spanned! {field.span()=>
					::ser_tag::Load::load(&mut self.#name, archive)?;
				}
			})
			.collect(),
		Fields::Unnamed(fields) => (0..fields.unnamed.len())
			.map(|index| {
				let index = Index::from(index);
				quote! {
					::ser_tag::Load::load(&mut self.#index, archive)?;
				}
			})
			.collect(),
		Fields::Unit => Vec::new(),
	};

	let ident = &input.ident;
	let mut generics = input.generics.clone();
	for param in generics.type_params_mut() {
		param.bounds.push(syn::parse_quote!(::ser_tag::Load));
	}
	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::ser_tag::Load for #ident #type_generics #where_clause {
			fn load(
				&mut self,
				archive: &mut dyn ::ser_tag::InputArchive,
			) -> ::ser_tag::Result<()> {
				#(#field_stmts)*
				::std::result::Result::Ok(())
			}
		}
	}
}
