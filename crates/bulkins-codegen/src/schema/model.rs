use super::{ErrorSet, Field, ModelAttr, Name};

#[derive(Debug)]
pub(crate) struct Model {
    /// Record type name
    pub(crate) name: Name,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Table the records are inserted into
    pub(crate) table: String,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput, data: &syn::DataStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut model_attr = ModelAttr::default();

        errs.check(model_attr.populate_from_ast(&ast.attrs));

        let fields: Vec<_> = node
            .named
            .iter()
            .filter_map(|field| errs.check(Field::from_ast(field)))
            .collect();

        errs.finish()?;

        let name = Name::from_ident(&ast.ident);
        let table = match &model_attr.table {
            Some(table) => table.value(),
            None => name.table(),
        };

        Ok(Self {
            name,
            fields,
            table,
        })
    }
}
