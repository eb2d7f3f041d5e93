//! Derive macro for `tagcopy::Tagged`.
//!
//! Builds the field table of a struct from `#[tagcopy("label,label")]`
//! field attributes.
//!
//! # Example
//!
//! ```ignore
//! use facet::Facet;
//! use tagcopy::Tagged;
//!
//! #[derive(Facet, Tagged, Clone, Default)]
//! pub struct Node {
//!     #[tagcopy("user,admin")]
//!     pub username: String,
//!     #[tagcopy("admin")]
//!     pub secret: String,
//!     // no attribute: only copied with the empty tag
//!     pub cache_key: u64,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Index, Member, parse_macro_input, parse_quote};

mod attrs;

/// Derive `tagcopy::Tagged` for a struct with named or tuple fields.
///
/// Every field type must implement `Clone`, and the struct must also derive
/// `facet::Facet`.
#[proc_macro_derive(Tagged, attributes(tagcopy))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    attrs::reject_container_attr(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unnamed(fields) => &fields.unnamed,
            Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Tagged needs at least one field",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Tagged only supports structs",
            ));
        }
    };

    let mut entries = Vec::with_capacity(fields.len());
    for (idx, field) in fields.iter().enumerate() {
        let tags = attrs::field_declaration(&field.attrs)?;
        let (member, name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
            None => (Member::Unnamed(Index::from(idx)), idx.to_string()),
        };
        entries.push(quote! {
            ::tagcopy::FieldEntry {
                name: #name,
                offset: ::core::mem::offset_of!(Self, #member),
                tags: #tags,
                assign: |dst: &mut Self, src: &Self| {
                    dst.#member = ::core::clone::Clone::clone(&src.#member);
                },
                swap: |dst: &mut Self, src: &mut Self| {
                    ::core::mem::swap(&mut dst.#member, &mut src.#member);
                },
            }
        });
    }

    let name = &input.ident;
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let (_, ty_generics, _) = input.generics.split_for_impl();
        let where_clause = generics.make_where_clause();
        for field in fields {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::core::clone::Clone));
        }
        where_clause.predicates.push(parse_quote!(
            #name #ty_generics: ::tagcopy::__private::Facet<'static> + 'static
        ));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tagcopy::Tagged for #name #ty_generics #where_clause {
            const FIELDS: &'static [::tagcopy::FieldEntry<Self>] = &[
                #(#entries),*
            ];
        }
    })
}
