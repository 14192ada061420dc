use super::ErrorSet;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// True if the field is `pub` and therefore mapped to a column
    pub(crate) visible: bool,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[dorm(primary_key)]`
    pub(crate) primary_key: Option<syn::Path>,

    /// Optional database column name
    pub(crate) column: Option<syn::LitStr>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("dorm") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("primary_key") {
                    if attrs.primary_key.is_some() {
                        return Err(meta.error("duplicate `primary_key` attribute"));
                    }

                    attrs.primary_key = Some(meta.path.clone());
                    Ok(())
                } else if meta.path.is_ident("column") {
                    if attrs.column.is_some() {
                        return Err(meta.error("duplicate `column` attribute"));
                    }

                    attrs.column = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `primary_key` or `column = \"column_name\"`"))
                }
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        let visible = matches!(field.vis, syn::Visibility::Public(_));

        if !visible {
            if let Some(path) = &attrs.primary_key {
                errs.push(syn::Error::new_spanned(
                    path,
                    "primary key field must be `pub`",
                ));
            }

            if let Some(column) = &attrs.column {
                errs.push(syn::Error::new_spanned(
                    column,
                    "only `pub` fields are mapped to columns",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            visible,
            attrs,
        })
    }

    /// Field name as it appears in the schema, without the `r#` prefix.
    pub(crate) fn name(&self) -> String {
        self.ident.to_string().trim_start_matches("r#").to_string()
    }
}
