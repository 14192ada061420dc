use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Body of `Model::schema`: the table descriptor built from the visible
    /// fields.
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let dorm = &self.dorm;
        let model_name = self.model.ident.to_string();

        let columns = self.model.visible_fields().map(|field| {
            let name = field.name();
            let ty = &field.ty;

            let rename = field
                .attrs
                .column
                .as_ref()
                .map(|column| quote!(.rename(#column)));

            let primary_key = field
                .attrs
                .primary_key
                .as_ref()
                .map(|_| quote!(.primary_key()));

            quote! {
                #dorm::Column::new(#name, <#ty as #dorm::Primitive>::TYPE) #rename #primary_key
            }
        });

        let rename = self
            .model
            .table
            .as_ref()
            .map(|table| quote!(.map(|table| table.rename(#table))));

        quote! {
            #dorm::Table::new(#model_name, vec![ #( #columns ),* ]) #rename
        }
    }
}
