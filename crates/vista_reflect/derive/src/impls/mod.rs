//! Code generation for `#[derive(Object)]`.

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod class;
mod convert;
mod object;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ObjectStruct;

#[cfg(feature = "auto_register")]
pub(crate) use auto_register::auto_register_submit;

/// Generates every impl of `#[derive(Object)]`, wrapped in an anonymous const
/// so the statics it declares do not leak into the caller's namespace.
pub(crate) fn impl_object(data: &ObjectStruct) -> TokenStream {
    let class_info = class::get_class_info_static(data);
    let class_impl = class::impl_trait_class(data);
    let object_impl = object::impl_trait_object(data);
    let convert_impls = convert::impl_convert_traits(data);
    let auto_register = auto_register::get_auto_register_impl(data);

    quote! {
        const _: () = {
            #class_info

            #class_impl

            #object_impl

            #convert_impls

            #auto_register
        };
    }
}
