//! `#[derive(Monoid)]`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Path, parse_quote};

use crate::fields::StructShape;

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let shape = StructShape::of(input, "Monoid")?;
    let trait_path: Path = parse_quote!(::fnkit::typeclass::Monoid);

    let empties: Vec<TokenStream2> = shape
        .fields
        .iter()
        .map(|field| {
            let field_type = &field.ty;
            quote! { <#field_type as #trait_path>::empty() }
        })
        .collect();
    let body = shape.construct(&empties);

    let name = &input.ident;
    let generics = shape.bounded_generics(&input.generics, &trait_path);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #trait_path for #name #type_generics #where_clause {
            #[inline]
            fn empty() -> Self {
                #body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn each_field_uses_its_own_identity() {
        let input: DeriveInput = parse_quote! {
            struct Stats<T> { seen: Vec<T>, label: String }
        };
        let output = expand(&input).unwrap().to_string();
        assert!(output.contains("seen : < Vec < T > as :: fnkit :: typeclass :: Monoid > :: empty ()"));
        assert!(output.contains("label : < String as :: fnkit :: typeclass :: Monoid > :: empty ()"));
        assert!(output.contains("Vec < T > : :: fnkit :: typeclass :: Monoid"));
    }

    #[rstest]
    fn unit_struct_is_its_own_identity() {
        let input: DeriveInput = parse_quote! { struct Marker; };
        let output = expand(&input).unwrap().to_string();
        assert!(output.contains("fn empty () -> Self { Self }"));
    }

    #[rstest]
    fn enums_are_rejected() {
        let input: DeriveInput = parse_quote! { enum Either { Left(u8), Right(u8) } };
        assert!(expand(&input).is_err());
    }
}
