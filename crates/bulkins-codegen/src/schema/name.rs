use std_util::str;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Name {
    /// Identifier as written in the source
    pub(crate) ident: syn::Ident,

    /// Identifier text without a raw prefix
    pub(crate) text: String,

    /// Snake case form, the default storage name
    pub(crate) snake: String,
}

impl Name {
    pub(crate) fn from_ident(ident: &syn::Ident) -> Self {
        let text = ident.unraw().to_string();
        let snake = str::snake_case(&text);

        Self {
            ident: ident.clone(),
            text,
            snake,
        }
    }

    /// Default table name for a record type: `UserProfile` -> `user_profiles`.
    pub(crate) fn table(&self) -> String {
        str::pluralize(&self.snake)
    }
}
