//! See following macros:
//!
//! - [`Object`]
//! - [`impl_auto_register`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static OBJECT_ATTRIBUTE_NAME: &str = "object";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Object Derivation
///
/// `#[derive(Object)]` implements the following traits:
///
/// - `Class`: the static `ClassInfo` and the registration entry.
/// - `Object`: property read/write and method calls by name.
/// - `Expose`, `IntoExposed`, `FromDynamic`: so the type can be a field of another object.
///
/// Only non-generic structs with named fields are supported.
///
/// ## Type Attributes
///
/// ```rust, ignore
/// #[derive(Object, Default)]
/// #[object(name = "Customer", default, auto_register)]
/// #[object(method(display_name), method(load_orders, fallible), method(internal, private))]
/// struct User { /* ... */ }
/// ```
///
/// - `name = "..."`: overrides the class name (defaults to the type ident).
///   The type path is always `module_path!()` followed by the ident.
/// - `default`: the type implements `Default`; the class gets a factory and
///   can be instantiated by name.
/// - `auto_register`: submits the class to `ClassRegistry::auto_register`.
///   Requires `default`. A no-op when the `auto_register` feature is disabled.
/// - `method(ident)`: declares a public zero-argument method `fn ident(&self) -> T`.
///   - `method(ident, private)`: declared, but calling it is an error.
///   - `method(ident, fallible)`: the method returns `Result<T, E>` with `E: Into<BoxedError>`.
///
/// ## Field Attributes
///
/// - `#[object(private)]`: the property is listed but cannot be read or written.
/// - `#[object(skip)]`: the field is invisible, as if it did not exist.
#[proc_macro_derive(Object, attributes(object))]
pub fn derive_object(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ObjectStruct::from_ast(&ast) {
        Ok(data) => impls::impl_object(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Submits an already-derived class to automatic registration.
///
/// Useful for classes defined in another crate, or when the derive
/// attribute cannot be edited.
///
/// ```rust, ignore
/// impl_auto_register!(my_crate::model::User);
/// ```
///
/// A no-op when the `auto_register` feature is disabled.
#[proc_macro]
pub fn impl_auto_register(_input: TokenStream) -> TokenStream {
    #[cfg(not(feature = "auto_register"))]
    return utils::empty().into();

    #[cfg(feature = "auto_register")]
    {
        let ty = parse_macro_input!(_input as syn::Type);
        let vista_reflect_path = path::vista_reflect();
        let registration = impls::auto_register_submit(&vista_reflect_path, &ty);

        TokenStream::from(quote::quote! {
            const _: () = {
                #registration
            };
        })
    }
}
