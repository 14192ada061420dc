use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Optional database table name to map the model to
    pub(crate) table: Option<syn::LitStr>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("dorm") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    if self.table.is_some() {
                        return Err(meta.error("duplicate `table` attribute"));
                    }

                    self.table = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `table = \"table_name\"`"))
                }
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
