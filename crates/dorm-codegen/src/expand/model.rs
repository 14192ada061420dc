use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let dorm = &self.dorm;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let load_body = self.expand_load_body();
        let values_body = self.expand_values_body();
        let set_primary_key_body = self.expand_set_primary_key_body();

        quote! {
            impl #dorm::Model for #model_ident {
                fn schema() -> #dorm::Result<#dorm::Table> {
                    #model_schema
                }

                fn load(mut record: #dorm::ValueRecord) -> #dorm::Result<Self> {
                    #load_body
                }

                fn values(&self) -> #dorm::ValueRecord {
                    #values_body
                }

                fn set_primary_key(&mut self, value: #dorm::Value) -> #dorm::Result<()> {
                    #set_primary_key_body
                }
            }
        }
    }

    fn expand_load_body(&self) -> TokenStream {
        let dorm = &self.dorm;
        let model_name = self.model.ident.to_string();
        let width = self.model.visible_fields().count();

        let mut index = 0;
        let fields = self.model.fields.iter().map(|field| {
            let field_ident = &field.ident;

            if !field.visible {
                return quote!(#field_ident: #dorm::Default::default(),);
            }

            let i = util::int(index);
            let name = field.name();
            let ty = &field.ty;
            index += 1;

            quote! {
                #field_ident: <#ty as #dorm::Primitive>::load(record[#i].take())
                    .map_err(|err| err.context(#dorm::err!("failed to load `{}::{}`", #model_name, #name)))?,
            }
        });

        quote! {
            record.expect_width(#width, #model_name)?;

            Ok(Self {
                #( #fields )*
            })
        }
    }

    fn expand_values_body(&self) -> TokenStream {
        let dorm = &self.dorm;

        let values = self.model.visible_fields().map(|field| {
            let field_ident = &field.ident;
            let ty = &field.ty;

            quote!(<#ty as #dorm::Primitive>::to_value(&self.#field_ident))
        });

        quote! {
            #dorm::ValueRecord::from_vec(vec![ #( #values ),* ])
        }
    }

    fn expand_set_primary_key_body(&self) -> TokenStream {
        let dorm = &self.dorm;

        match self.model.primary_key {
            Some(index) => {
                let field = &self.model.fields[index];
                let field_ident = &field.ident;
                let ty = &field.ty;

                quote! {
                    self.#field_ident = <#ty as #dorm::Primitive>::load(value)?;
                    Ok(())
                }
            }
            None => quote! {
                let _ = value;
                Ok(())
            },
        }
    }
}
