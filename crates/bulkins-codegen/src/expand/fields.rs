use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Reads every field of `self`. Fields without a column of their own are
    /// reported as null without touching their value, so their type needs no
    /// conversion.
    pub(super) fn expand_field_values(&self) -> TokenStream {
        let bulkins = &self.bulkins;

        let values = self.model.fields.iter().map(|field| {
            let ident = &field.name.ident;

            if field.is_unstored() {
                quote!(#bulkins::Option::Some(#bulkins::Value::Null))
            } else {
                quote! {
                    #bulkins::Option::Some(#bulkins::Value::from(
                        ::std::clone::Clone::clone(&self.#ident)
                    ))
                }
            }
        });

        quote! {
            ::std::result::Result::Ok(::std::vec![ #( #values ),* ])
        }
    }
}
