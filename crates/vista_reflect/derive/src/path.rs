//! Paths into `vista_reflect` used by the generated code.
//!
//! Kept in one place so the layout of `vista_reflect` can change without
//! touching the code generators.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vista_reflect` crate.
///
/// 1. For crates that depend on `vista_reflect`, `::vista_reflect` is returned.
/// 2. For crates that depend on `vista`, `::vista::reflect` is returned.
/// 3. For other situations, `::vista_reflect` is returned, which is also what
///    `vista_reflect` itself uses through `extern crate self as vista_reflect`.
///
/// Reading the manifest is costly, so the path is computed once per derive
/// and passed around.
pub(crate) fn vista_reflect() -> syn::Path {
    vista_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vista_reflect"))
}

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn macro_utils_(vista_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vista_reflect_path::__macro_exports::macro_utils
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(vista_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vista_reflect_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn object_from_dynamic_(vista_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vista_reflect_path::__macro_exports::object_from_dynamic
    }
}

#[inline(always)]
pub(crate) fn info_(vista_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vista_reflect_path::info
    }
}

#[inline(always)]
pub(crate) fn object_(vista_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vista_reflect_path::object
    }
}

#[inline(always)]
pub(crate) fn convert_(vista_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vista_reflect_path::convert
    }
}

#[inline(always)]
pub(crate) fn class_meta_(vista_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vista_reflect_path::registry::ClassMeta
    }
}

#[inline(always)]
pub(crate) fn access_error_(vista_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vista_reflect_path::AccessError
    }
}

#[inline(always)]
pub(crate) fn convert_error_(vista_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vista_reflect_path::ConvertError
    }
}
