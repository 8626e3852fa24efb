use super::{ErrorSet, Name};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field name
    pub(crate) name: Name,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Column, foreign key or relation
    pub(crate) kind: FieldKind,

    /// Timestamp role
    pub(crate) role: Role,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// True if the field is annotated with `#[key]`
    pub(crate) key: bool,

    /// `#[auto]` or `#[auto(increment)]`
    pub(crate) auto: Option<Auto>,

    /// SQL expression the store uses when the column is omitted:
    /// `#[default_expr("<expr>")]`
    pub(crate) default_expr: Option<syn::LitStr>,

    /// Database column name: `#[column("<name>")]`
    pub(crate) column: Option<syn::LitStr>,

    /// True if the field is annotated with `#[skip]`
    pub(crate) skip: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auto {
    Increment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Column,
    BelongsTo,
    HasMany,
    HasOne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Plain,
    CreatedAt,
    UpdatedAt,
}

impl FieldKind {
    pub(crate) fn is_relation(self) -> bool {
        matches!(self, Self::HasMany | Self::HasOne)
    }
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();
        let mut kind = None;
        let mut role = None;

        for attr in &field.attrs {
            let path = attr.path();

            if path.is_ident("key") {
                if attrs.key {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                }
                attrs.key = true;
            } else if path.is_ident("auto") {
                if attrs.auto.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[auto] attribute"));
                } else {
                    attrs.auto = errs.check(parse_auto(attr));
                }
            } else if path.is_ident("default_expr") {
                if attrs.default_expr.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[default_expr] attribute",
                    ));
                } else {
                    attrs.default_expr = errs.check(attr.parse_args::<syn::LitStr>());
                }
            } else if path.is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.check(parse_column(attr));
                }
            } else if path.is_ident("skip") {
                if attrs.skip {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[skip] attribute",
                    ));
                }
                attrs.skip = true;
            } else if let Some(relation) = relation_kind(path) {
                if kind.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field has more than one relation attribute",
                    ));
                } else if errs.check(attr.meta.require_path_only().map(|_| ())).is_some() {
                    kind = Some(relation);
                }
            } else if let Some(timestamp) = timestamp_role(path) {
                if role.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field has more than one timestamp attribute",
                    ));
                } else if errs.check(attr.meta.require_path_only().map(|_| ())).is_some() {
                    role = Some(timestamp);
                }
            }
        }

        let kind = kind.unwrap_or(FieldKind::Column);

        if kind != FieldKind::Column && attrs.column.is_some() {
            errs.push(syn::Error::new_spanned(
                field,
                "relation fields cannot have a database column",
            ));
        }

        if kind != FieldKind::Column && attrs.default_expr.is_some() {
            errs.push(syn::Error::new_spanned(
                field,
                "#[default_expr] cannot be used on relation fields",
            ));
        }

        if attrs.auto.is_some() && attrs.default_expr.is_some() {
            errs.push(syn::Error::new_spanned(
                field,
                "#[default_expr] and #[auto] cannot be combined on the same field",
            ));
        }

        errs.finish()?;

        let name = Name::from_ident(ident);

        let role = role.unwrap_or_else(|| match name.snake.as_str() {
            "created_at" => Role::CreatedAt,
            "updated_at" => Role::UpdatedAt,
            _ => Role::Plain,
        });

        Ok(Self {
            name,
            attrs,
            kind,
            role,
        })
    }

    /// Name of the column the field is stored in.
    pub(crate) fn storage_name(&self) -> String {
        match &self.attrs.column {
            Some(column) => column.value(),
            None => self.name.snake.clone(),
        }
    }

    /// True when the field has no column of its own.
    pub(crate) fn is_unstored(&self) -> bool {
        self.kind != FieldKind::Column || self.attrs.skip
    }
}

fn parse_auto(attr: &syn::Attribute) -> syn::Result<Auto> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(Auto::Increment),
        syn::Meta::List(_) => {
            let ident: syn::Ident = attr.parse_args()?;

            if ident == "increment" {
                Ok(Auto::Increment)
            } else {
                Err(syn::Error::new_spanned(
                    ident,
                    "unknown auto strategy; expected `increment`",
                ))
            }
        }
        syn::Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "expected `#[auto]` or `#[auto(increment)]`",
        )),
    }
}

fn parse_column(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let lit: syn::LitStr = attr.parse_args()?;

    if lit.value().is_empty() {
        return Err(syn::Error::new_spanned(lit, "column name must not be empty"));
    }

    Ok(lit)
}

fn relation_kind(path: &syn::Path) -> Option<FieldKind> {
    if path.is_ident("belongs_to") {
        Some(FieldKind::BelongsTo)
    } else if path.is_ident("has_many") {
        Some(FieldKind::HasMany)
    } else if path.is_ident("has_one") {
        Some(FieldKind::HasOne)
    } else {
        None
    }
}

fn timestamp_role(path: &syn::Path) -> Option<Role> {
    if path.is_ident("created_at") {
        Some(Role::CreatedAt)
    } else if path.is_ident("updated_at") {
        Some(Role::UpdatedAt)
    } else {
        None
    }
}
