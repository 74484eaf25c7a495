//! Struct shape analysis shared by the derives.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Generics, Index, Member, Path, Type, parse_quote};

/// The fields of a struct, in declaration order.
pub struct StructShape<'a> {
    pub fields: &'a Fields,
}

impl<'a> StructShape<'a> {
    /// Accepts structs and rejects enums and unions with `trait_name` in the
    /// error message.
    pub fn of(input: &'a DeriveInput, trait_name: &str) -> syn::Result<Self> {
        match &input.data {
            Data::Struct(data) => Ok(Self {
                fields: &data.fields,
            }),
            Data::Enum(_) => Err(syn::Error::new_spanned(
                &input.ident,
                format!("{trait_name} can only be derived for structs, not enums"),
            )),
            Data::Union(_) => Err(syn::Error::new_spanned(
                &input.ident,
                format!("{trait_name} cannot be derived for unions"),
            )),
        }
    }

    /// How each field is addressed: by name, or by position for tuple structs.
    pub fn members(&self) -> Vec<Member> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                field.ident.clone().map_or_else(
                    || Member::Unnamed(Index::from(index)),
                    Member::Named,
                )
            })
            .collect()
    }

    /// Builds `Self { .. }`, `Self(..)` or `Self` from one expression per field.
    pub fn construct(&self, values: &[TokenStream2]) -> TokenStream2 {
        match self.fields {
            Fields::Named(_) => {
                let members = self.members();
                quote! { Self { #(#members: #values),* } }
            }
            Fields::Unnamed(_) => quote! { Self(#(#values),*) },
            Fields::Unit => quote! { Self },
        }
    }

    /// Copies `generics`, requiring `bound` of every field type.
    pub fn bounded_generics(&self, generics: &Generics, bound: &Path) -> Generics {
        let mut generics = generics.clone();
        let field_types: Vec<&Type> = self.fields.iter().map(|field| &field.ty).collect();
        let where_clause = generics.make_where_clause();
        for field_type in field_types {
            where_clause
                .predicates
                .push(parse_quote! { #field_type: #bound });
        }
        generics
    }
}
