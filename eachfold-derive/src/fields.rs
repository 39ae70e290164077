//! Implementation of the `#[derive(Fields)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, LitStr, parse_macro_input};

/// How a single struct field is exposed.
enum Exposure {
    Named(String),
    Skipped,
}

/// Main implementation of the Fields derive macro.
pub fn derive_fields_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_fields_impl(&input.ident, &input.generics, &data_struct.fields)
                .unwrap_or_else(syn::Error::into_compile_error)
        }
        Data::Enum(_) => {
            syn::Error::new_spanned(&input.ident, "Fields can only be derived for structs, not enums.")
                .to_compile_error()
        }
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Fields cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Reads the `#[fields(...)]` attribute of a field.
fn exposure_of(field: &Field, ident: &Ident) -> syn::Result<Exposure> {
    let mut exposure = Exposure::Named(ident.unraw().to_string());

    for attribute in &field.attrs {
        if !attribute.path().is_ident("fields") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let renamed: LitStr = meta.value()?.parse()?;
                exposure = Exposure::Named(renamed.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                exposure = Exposure::Skipped;
                Ok(())
            } else {
                Err(meta.error("unsupported fields attribute, expected `rename` or `skip`"))
            }
        })?;
    }

    Ok(exposure)
}

/// Generates the `Fields` impl for a struct's named fields.
fn generate_fields_impl(name: &Ident, generics: &Generics, fields: &Fields) -> syn::Result<TokenStream2> {
    let named_fields = match fields {
        Fields::Named(named_fields) => named_fields,
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Fields can only be derived for structs with named fields, not tuple structs.",
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new_spanned(
                name,
                "Fields cannot be derived for unit structs (structs with no fields).",
            ));
        }
    };

    let mut arms = Vec::new();
    let mut bounds = Vec::new();

    for field in &named_fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let Exposure::Named(exposed) = exposure_of(field, ident)? else {
            continue;
        };
        let field_type = &field.ty;

        arms.push(quote! {
            #exposed => ::core::option::Option::Some(
                ::core::convert::Into::<::eachfold::Value>::into(
                    ::core::clone::Clone::clone(&self.#ident)
                )
            ),
        });
        bounds.push(quote! {
            #field_type: ::core::clone::Clone + ::core::convert::Into<::eachfold::Value>
        });
    }

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let existing: Vec<_> = where_clause
        .map(|clause| clause.predicates.iter().collect())
        .unwrap_or_default();

    Ok(quote! {
        impl #impl_generics ::eachfold::typeclass::Fields for #name #type_generics
        where
            #(#existing,)*
            #(#bounds,)*
        {
            type Field = ::eachfold::Value;

            fn field(&self, name: &str) -> ::core::option::Option<::eachfold::Value> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
