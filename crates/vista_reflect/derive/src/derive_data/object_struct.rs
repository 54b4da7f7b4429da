use syn::{Data, DeriveInput, Fields, Ident, Type};

use crate::derive_data::{FieldAttributes, TypeAttributes};

/// A field of the derived struct that takes part in reflection.
pub(crate) struct ObjectField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl ObjectField<'_> {
    /// The property name, which is the field ident without a raw prefix.
    pub fn name(&self) -> String {
        let name = self.ident.to_string();
        match name.strip_prefix("r#") {
            Some(stripped) => stripped.to_string(),
            None => name,
        }
    }
}

/// The parsed input of `#[derive(Object)]`.
pub(crate) struct ObjectStruct<'a> {
    pub ident: &'a Ident,
    pub attrs: TypeAttributes,
    /// Declaration order, `skip` fields removed.
    pub fields: Vec<ObjectField<'a>>,
    pub vista_reflect_path: syn::Path,
}

impl<'a> ObjectStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`#[derive(Object)]` does not support generic types",
            ));
        }

        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                _ => {
                    return Err(syn::Error::new_spanned(
                        ast,
                        "`#[derive(Object)]` requires a struct with named fields",
                    ));
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    ast,
                    "`#[derive(Object)]` only supports structs",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.skip {
                continue;
            }
            // Named fields always carry an ident.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            fields.push(ObjectField {
                ident,
                ty: &field.ty,
                attrs: field_attrs,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            attrs,
            fields,
            vista_reflect_path: crate::path::vista_reflect(),
        })
    }

    /// The class name: the `name` attribute, or the type ident.
    pub fn class_name(&self) -> String {
        match &self.attrs.name {
            Some(lit) => lit.value(),
            None => self.ident.to_string(),
        }
    }
}
