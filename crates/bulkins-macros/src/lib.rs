extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Record,
    attributes(
        table, key, auto, default_expr, column, belongs_to, has_many, has_one, skip, created_at,
        updated_at
    )
)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match bulkins_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
