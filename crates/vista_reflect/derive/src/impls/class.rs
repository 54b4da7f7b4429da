use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ObjectStruct;

/// Generates the `INFO` static holding the `ClassInfo`.
pub(crate) fn get_class_info_static(data: &ObjectStruct) -> TokenStream {
    let info_ = crate::path::info_(&data.vista_reflect_path);

    let ident = data.ident;
    let class_name = data.class_name();
    let ident_str = ident.to_string();

    let visibility = |private: bool| {
        if private {
            quote! { #info_::Visibility::Private }
        } else {
            quote! { #info_::Visibility::Public }
        }
    };

    let properties = data.fields.iter().map(|field| {
        let name = field.name();
        let vis = visibility(field.attrs.private);
        quote! { #info_::PropertyInfo::new(#name, #vis) }
    });

    let methods = data.attrs.methods.iter().map(|method| {
        let name = method.ident.to_string();
        let vis = visibility(method.private);
        if method.fallible {
            quote! { #info_::MethodInfo::new(#name, #vis).fallible() }
        } else {
            quote! { #info_::MethodInfo::new(#name, #vis) }
        }
    });

    quote! {
        static INFO: #info_::ClassInfo = #info_::ClassInfo::new(
            #class_name,
            ::core::concat!(::core::module_path!(), "::", #ident_str),
            &[#(#properties),*],
            &[#(#methods),*],
        );
    }
}

/// Generates `impl Class`.
pub(crate) fn impl_trait_class(data: &ObjectStruct) -> TokenStream {
    let vista_reflect_path = &data.vista_reflect_path;
    let info_ = crate::path::info_(vista_reflect_path);
    let class_meta_ = crate::path::class_meta_(vista_reflect_path);
    let ident = data.ident;

    let class_meta = if data.attrs.default.is_some() {
        quote! {
            #[inline]
            fn class_meta() -> #class_meta_ {
                #class_meta_::instantiable::<Self>()
            }
        }
    } else {
        crate::utils::empty()
    };

    quote! {
        impl #vista_reflect_path::Class for #ident {
            #[inline]
            fn info() -> &'static #info_::ClassInfo {
                &INFO
            }

            #class_meta
        }
    }
}
