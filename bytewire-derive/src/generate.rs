//! Code generation for the message derive.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_quote;

use crate::parse::MessageDefinition;

/// Generates the `WireMessage` and `WireField` impls for a message.
pub fn generate_message(message: &MessageDefinition) -> TokenStream {
    let name = &message.name;
    let krate = &message.krate;

    let mut generics = message.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for field in &message.fields {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: #krate::WireField));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let sizes: Vec<TokenStream> = message
        .fields
        .iter()
        .map(|field| {
            let ty = &field.ty;
            quote! { + <#ty as #krate::WireField>::WIRE_SIZE }
        })
        .collect();

    let writes: Vec<TokenStream> = message
        .fields
        .iter()
        .map(|field| {
            let member = &field.member;
            quote! { #krate::WireField::write_to(&self.#member, cursor)?; }
        })
        .collect();

    let reads: Vec<TokenStream> = message
        .fields
        .iter()
        .map(|field| {
            let member = &field.member;
            quote! { #krate::WireField::read_from(&mut self.#member, cursor)?; }
        })
        .collect();

    quote! {
        impl #impl_generics #krate::WireMessage for #name #ty_generics #where_clause {
            const SIZE: usize = 0 #(#sizes)*;

            #[inline]
            #[allow(unused_variables)]
            fn write_fields(
                &self,
                cursor: &mut #krate::WriteCursor<'_>,
            ) -> #krate::Result<()> {
                #(#writes)*
                ::core::result::Result::Ok(())
            }

            #[inline]
            #[allow(unused_variables)]
            fn read_fields(
                &mut self,
                cursor: &mut #krate::ReadCursor<'_>,
            ) -> #krate::Result<()> {
                #(#reads)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics #krate::WireField for #name #ty_generics #where_clause {
            const WIRE_SIZE: usize = <Self as #krate::WireMessage>::SIZE;

            #[inline]
            fn write_to(&self, cursor: &mut #krate::WriteCursor<'_>) -> #krate::Result<()> {
                cursor.write_message(self)
            }

            #[inline]
            fn read_from(&mut self, cursor: &mut #krate::ReadCursor<'_>) -> #krate::Result<()> {
                cursor.read_message(self)
            }
        }
    }
}
