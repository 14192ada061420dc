use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, including the ones not mapped to columns
    pub(crate) fields: Vec<Field>,

    /// Index into `fields` of the primary key
    pub(crate) primary_key: Option<usize>,

    /// Optional table to map the model to
    pub(crate) table: Option<syn::LitStr>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Model` can only be derived for structs",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "model fields must be named",
            ));
        };

        // Generics are not supported
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut primary_key = None;
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => {
                    if let Some(path) = &field.attrs.primary_key {
                        if primary_key.is_some() {
                            errs.push(syn::Error::new_spanned(
                                path,
                                "model has more than one primary key",
                            ));
                        } else {
                            primary_key = Some(fields.len());
                        }
                    }

                    fields.push(field);
                }
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Model {
            ident: ast.ident.clone(),
            fields,
            primary_key,
            table: model_attr.table,
        })
    }

    /// Fields mapped to columns, in declaration order.
    pub(crate) fn visible_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.visible)
    }
}
