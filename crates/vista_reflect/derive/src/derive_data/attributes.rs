//! Parsing of `#[object(...)]` attributes.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, LitStr};

use crate::OBJECT_ATTRIBUTE_NAME;

fn is_object_attr(attr: &Attribute) -> bool {
    attr.path().is_ident(OBJECT_ATTRIBUTE_NAME)
}

fn set_flag(flag: &mut Option<Span>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if flag.is_some() {
        return Err(meta.error("duplicate attribute"));
    }
    *flag = Some(meta.path.span());
    Ok(())
}

// -----------------------------------------------------------------------------
// MethodAttribute

/// `method(ident[, private][, fallible])`
#[derive(Debug)]
pub(crate) struct MethodAttribute {
    pub ident: Ident,
    pub private: bool,
    pub fallible: bool,
}

impl MethodAttribute {
    fn parse(meta: &ParseNestedMeta) -> syn::Result<Self> {
        let mut ident: Option<Ident> = None;
        let mut private = false;
        let mut fallible = false;

        meta.parse_nested_meta(|inner| {
            if inner.path.is_ident("private") {
                private = true;
            } else if inner.path.is_ident("fallible") {
                fallible = true;
            } else if let Some(name) = inner.path.get_ident() {
                if ident.is_some() {
                    return Err(inner.error("a method attribute names exactly one method"));
                }
                ident = Some(name.clone());
            } else {
                return Err(inner.error("expected a method name"));
            }
            Ok(())
        })?;

        match ident {
            Some(ident) => Ok(Self {
                ident,
                private,
                fallible,
            }),
            None => Err(meta.error("missing method name, e.g. `method(display_name)`")),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the struct itself.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub name: Option<LitStr>,
    pub default: Option<Span>,
    pub auto_register: Option<Span>,
    pub methods: Vec<MethodAttribute>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|attr| is_object_attr(attr)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if this.name.is_some() {
                        return Err(meta.error("duplicate `name` attribute"));
                    }
                    this.name = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("default") {
                    set_flag(&mut this.default, &meta)?;
                } else if meta.path.is_ident("auto_register") {
                    set_flag(&mut this.auto_register, &meta)?;
                } else if meta.path.is_ident("method") {
                    let method = MethodAttribute::parse(&meta)?;
                    if this.methods.iter().any(|m| m.ident == method.ident) {
                        return Err(meta.error("method declared twice"));
                    }
                    this.methods.push(method);
                } else {
                    return Err(meta.error(
                        "unknown attribute, expected `name`, `default`, `auto_register` or `method`",
                    ));
                }
                Ok(())
            })?;
        }

        if let (Some(span), None) = (this.auto_register, this.default) {
            return Err(syn::Error::new(
                span,
                "`auto_register` requires `default`, registered classes must be instantiable",
            ));
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes on a single field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub private: bool,
    pub skip: bool,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|attr| is_object_attr(attr)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("private") {
                    this.private = true;
                } else if meta.path.is_ident("skip") {
                    this.skip = true;
                } else {
                    return Err(meta.error("unknown attribute, expected `private` or `skip`"));
                }
                Ok(())
            })?;
        }

        Ok(this)
    }
}
