use proc_macro2::TokenStream;

use crate::derive_data::ObjectStruct;

/// Generates the `inventory` submission of `#[object(auto_register)]`.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(data: &ObjectStruct) -> TokenStream {
    match data.attrs.auto_register {
        Some(_) => {
            let ident = data.ident;
            auto_register_submit(&data.vista_reflect_path, &syn::parse_quote!(#ident))
        }
        None => crate::utils::empty(),
    }
}

#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ObjectStruct) -> TokenStream {
    crate::utils::empty()
}

/// Submits `ty` to the registration functions collected by `inventory`.
#[cfg(feature = "auto_register")]
pub(crate) fn auto_register_submit(vista_reflect_path: &syn::Path, ty: &syn::Type) -> TokenStream {
    let auto_register_ = crate::path::auto_register_(vista_reflect_path);

    quote::quote! {
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ty as #auto_register_::__RegisterType>::__register
            )
        }
    }
}
