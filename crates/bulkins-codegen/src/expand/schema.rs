use super::Expand;
use crate::schema::{Auto, Field, FieldKind, Role};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Builds the registration-time field table.
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let bulkins = &self.bulkins;
        let name = &self.model.name.text;
        let table = &self.model.table;
        let fields = self.model.fields.iter().map(|field| self.expand_field_def(field));

        quote! {
            #bulkins::Model::new(#name, #table)
                #( .field(#fields) )*
        }
    }

    fn expand_field_def(&self, field: &Field) -> TokenStream {
        let bulkins = &self.bulkins;
        let name = &field.name.text;
        let storage_name = field.storage_name();

        let mut def = quote!(#bulkins::FieldDef::new(#name).storage_name(#storage_name));

        if field.attrs.key {
            def = quote!(#def.primary_key());
        }

        if let Some(Auto::Increment) = field.attrs.auto {
            def = quote!(#def.auto_increment());
        }

        if let Some(expr) = &field.attrs.default_expr {
            def = quote!(#def.default_expr(#expr));
        }

        if field.kind == FieldKind::BelongsTo {
            def = quote!(#def.foreign_key());
        } else if field.kind.is_relation() {
            def = quote!(#def.relation());
        }

        if field.attrs.skip {
            def = quote!(#def.ignored());
        }

        match field.role {
            Role::Plain => {}
            Role::CreatedAt => def = quote!(#def.role(#bulkins::FieldRole::CreatedAt)),
            Role::UpdatedAt => def = quote!(#def.role(#bulkins::FieldRole::UpdatedAt)),
        }

        def
    }
}
