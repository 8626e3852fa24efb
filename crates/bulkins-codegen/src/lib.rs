mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;

    let syn::Data::Struct(data) = &item.data else {
        return Err(syn::Error::new_spanned(
            &item.ident,
            "`Record` can only be derived for structs",
        ));
    };

    let model = schema::Model::from_ast(&item, data)?;

    Ok(expand::model(&model))
}
