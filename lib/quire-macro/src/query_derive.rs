//! Query derive macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Fields, GenericParam, Generics, Visibility, parse_quote, parse2};

use crate::attrs::{FieldOptions, StructOptions};

/// Expand the `#[derive(Query)]` macro.
pub fn expand_query_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;

    let struct_options = StructOptions::from_attrs(&input.attrs)?;

    // Only support structs with named fields
    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Query derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Query derive only supports structs",
            ));
        }
    };

    let mut entries = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let options = FieldOptions::from_attrs(&field.attrs)?;
        let exported = !matches!(field.vis, Visibility::Inherited);

        // Private fields only take part when flattened
        if options.is_skipped() || !(exported || options.flatten) {
            continue;
        }

        let declared = field_name.unraw().to_string();
        let declared = struct_options
            .rename_all
            .map_or(declared.clone(), |rule| rule.apply(&declared));

        let tag = options.tag.as_deref().unwrap_or_default();
        let layout = option_tokens(options.layout.as_deref());
        let delimiter = option_tokens(options.del.as_deref());
        let embedded = options.flatten;

        entries.push(quote! {
            ::quire::QueryField::new(
                &::quire::FieldMeta {
                    name: #declared,
                    tag: #tag,
                    layout: #layout,
                    delimiter: #delimiter,
                    exported: #exported,
                    embedded: #embedded,
                },
                &self.#field_name,
            )
        });
    }

    let generics = add_trait_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::quire::QueryStruct for #name #ty_generics #where_clause {
            fn query_fields(&self) -> ::std::vec::Vec<::quire::QueryField<'_>> {
                ::std::vec![#(#entries),*]
            }
        }

        impl #impl_generics ::quire::ToQuery for #name #ty_generics #where_clause {
            fn to_query_value(&self) -> ::quire::QueryValue<'_> {
                ::quire::QueryValue::Struct(self)
            }

            fn is_empty_value(&self) -> bool {
                false
            }
        }
    })
}

fn option_tokens(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None),
    }
}

/// Require `ToQuery` on every type parameter.
fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(::quire::ToQuery));
        }
    }
    generics
}
