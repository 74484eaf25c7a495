//! `#[derive(Semigroup)]`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Path, parse_quote};

use crate::fields::StructShape;

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let shape = StructShape::of(input, "Semigroup")?;
    let trait_path: Path = parse_quote!(::fnkit::typeclass::Semigroup);

    let combined: Vec<TokenStream2> = shape
        .members()
        .iter()
        .map(|member| quote! { #trait_path::combine(self.#member, other.#member) })
        .collect();
    let body = shape.construct(&combined);
    // Unit structs never read `other`.
    let other = if combined.is_empty() {
        quote!(_other)
    } else {
        quote!(other)
    };

    let name = &input.ident;
    let generics = shape.bounded_generics(&input.generics, &trait_path);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #trait_path for #name #type_generics #where_clause {
            #[inline]
            fn combine(self, #other: Self) -> Self {
                #body
            }
        }
    })
}
