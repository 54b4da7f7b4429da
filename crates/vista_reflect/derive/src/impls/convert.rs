use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ObjectStruct;

/// Generates `Expose`, `IntoExposed` and `FromDynamic`, so the class can be
/// used as the type of another object's property.
pub(crate) fn impl_convert_traits(data: &ObjectStruct) -> TokenStream {
    let vista_reflect_path = &data.vista_reflect_path;
    let object_ = crate::path::object_(vista_reflect_path);
    let convert_ = crate::path::convert_(vista_reflect_path);
    let convert_error_ = crate::path::convert_error_(vista_reflect_path);
    let object_from_dynamic_ = crate::path::object_from_dynamic_(vista_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(vista_reflect_path);

    let ident = data.ident;

    quote! {
        impl #convert_::Expose for #ident {
            #[inline]
            fn expose(&self) -> #object_::Exposed<'_> {
                #object_::Exposed::borrowed(self)
            }
        }

        impl #convert_::IntoExposed for #ident {
            #[inline]
            fn into_exposed(self) -> #object_::Exposed<'static> {
                #object_::Exposed::owned(#macro_utils_::Box::new(self))
            }
        }

        impl #convert_::FromDynamic for #ident {
            #[inline]
            fn from_dynamic(
                value: #object_::Dynamic,
            ) -> #macro_utils_::Result<Self, #convert_error_> {
                #object_from_dynamic_::<Self>(value)
            }
        }
    }
}
