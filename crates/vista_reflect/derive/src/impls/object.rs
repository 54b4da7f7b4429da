use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ObjectStruct;

/// Generates `impl Object`.
pub(crate) fn impl_trait_object(data: &ObjectStruct) -> TokenStream {
    let vista_reflect_path = &data.vista_reflect_path;
    let info_ = crate::path::info_(vista_reflect_path);
    let object_ = crate::path::object_(vista_reflect_path);
    let convert_ = crate::path::convert_(vista_reflect_path);
    let access_error_ = crate::path::access_error_(vista_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(vista_reflect_path);

    let ident = data.ident;

    let get_arms = data.fields.iter().map(|field| {
        let name = field.name();
        let member = field.ident;
        if field.attrs.private {
            quote! {
                #name => #macro_utils_::Err(#access_error_::private_property(&INFO, name)),
            }
        } else {
            quote! {
                #name => #macro_utils_::Ok(#convert_::Expose::expose(&self.#member)),
            }
        }
    });

    let set_arms = data.fields.iter().map(|field| {
        let name = field.name();
        let member = field.ident;
        let ty = field.ty;
        if field.attrs.private {
            quote! {
                #name => #macro_utils_::Err(#access_error_::private_property(&INFO, name)),
            }
        } else {
            quote! {
                #name => {
                    self.#member = <#ty as #convert_::FromDynamic>::from_dynamic(value)
                        .map_err(|err| #access_error_::convert(&INFO, name, err))?;
                    #macro_utils_::Ok(())
                }
            }
        }
    });

    let call_arms = data.attrs.methods.iter().map(|method| {
        let name = method.ident.to_string();
        let member = &method.ident;
        if method.private {
            quote! {
                #name => #macro_utils_::Err(#access_error_::private_method(&INFO, name)),
            }
        } else if method.fallible {
            quote! {
                #name => match self.#member() {
                    #macro_utils_::Ok(output) => {
                        #macro_utils_::Ok(#convert_::IntoExposed::into_exposed(output))
                    }
                    #macro_utils_::Err(err) => {
                        #macro_utils_::Err(#access_error_::failed(&INFO, name, err))
                    }
                },
            }
        } else {
            quote! {
                #name => #macro_utils_::Ok(#convert_::IntoExposed::into_exposed(self.#member())),
            }
        }
    });

    quote! {
        impl #vista_reflect_path::Object for #ident {
            #[inline]
            fn class_info(&self) -> &'static #info_::ClassInfo {
                &INFO
            }

            fn get(
                &self,
                name: &str,
            ) -> #macro_utils_::Result<#object_::Exposed<'_>, #access_error_> {
                match name {
                    #(#get_arms)*
                    _ => #macro_utils_::Err(#access_error_::missing_property(&INFO, name)),
                }
            }

            fn set(
                &mut self,
                name: &str,
                value: #object_::Dynamic,
            ) -> #macro_utils_::Result<(), #access_error_> {
                match name {
                    #(#set_arms)*
                    _ => {
                        let _ = value;
                        #macro_utils_::Err(#access_error_::missing_property(&INFO, name))
                    }
                }
            }

            fn call(
                &self,
                name: &str,
            ) -> #macro_utils_::Result<#object_::Exposed<'static>, #access_error_> {
                match name {
                    #(#call_arms)*
                    _ => #macro_utils_::Err(#access_error_::missing_method(&INFO, name)),
                }
            }

            #[inline]
            fn as_any(&self) -> &dyn #macro_utils_::Any {
                self
            }

            #[inline]
            fn as_any_mut(&mut self) -> &mut dyn #macro_utils_::Any {
                self
            }

            #[inline]
            fn into_any(
                self: #macro_utils_::Box<Self>,
            ) -> #macro_utils_::Box<dyn #macro_utils_::Any> {
                self
            }
        }
    }
}
