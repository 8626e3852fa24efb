mod fields;
mod schema;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    model: &'a Model,

    /// Path prefix for bulkins types
    bulkins: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let bulkins = &self.bulkins;
        let ident = &self.model.name.ident;
        let model_schema = self.expand_model_schema();
        let field_values = self.expand_field_values();

        wrap_in_const(quote! {
            impl #bulkins::Record for #ident {
                fn model(&self) -> &#bulkins::Model {
                    static MODEL: #bulkins::OnceLock<#bulkins::Model> = #bulkins::OnceLock::new();
                    MODEL.get_or_init(|| #model_schema)
                }

                fn field_values(&self) -> #bulkins::Result<#bulkins::Vec<#bulkins::Option<#bulkins::Value>>> {
                    #field_values
                }
            }
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        bulkins: quote!(_bulkins::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use bulkins as _bulkins;
            #code
        };
    }
}
