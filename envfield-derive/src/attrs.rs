//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates configuration attributes from the
//! struct and its fields during macro expansion.

use syn::{Attribute, Field, Lit};

/// Parsed struct-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prefix prepended to every field's environment variable name.
    pub prefix: String,

    /// Force every non-`Option` field required.
    pub required: bool,
}

impl StructAttrs {
    /// Extract `#[env(...)]` attributes from the derive input's attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let value = meta.value()?;
                    let lit: Lit = value.parse()?;
                    if let Lit::Str(s) = lit {
                        parsed.prefix = s.value();
                    }
                    return Ok(());
                }

                if meta.path.is_ident("required") {
                    parsed.required = true;
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed `#[env(...)]` attributes from a struct field.
///
/// Each option maps to one builder method on `envfield::FieldSpec`.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Custom environment variable name override.
    ///
    /// If `None`, the field name is converted to UPPER_SNAKE_CASE.
    pub name: Option<String>,

    /// Literal default string used when the variable is absent.
    pub default: Option<String>,

    /// Field-level prefix, applied after the struct-level one.
    pub prefix: Option<String>,

    /// Separator for sequence fields.
    pub separator: Option<String>,

    /// Fail when absent with no default.
    pub required: bool,

    /// Remove the variable from the environment after reading.
    pub unset: bool,

    /// Interpolate `{VAR}` references into the value.
    pub expand: bool,

    /// Fail when the resolved string is empty.
    pub not_empty: bool,

    /// Treat the value as a path and read the file's contents.
    pub file: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value = meta.value()?;
                    let name: Lit = value.parse()?;
                    if let Lit::Str(s) = name {
                        attrs.name = Some(s.value());
                    }
                    return Ok(());
                }

                if meta.path.is_ident("default") {
                    let value = meta.value()?;
                    let lit: Lit = value.parse()?;
                    match lit {
                        Lit::Str(s) => attrs.default = Some(s.value()),
                        _ => {
                            return Err(meta.error(
                                "default must be a string literal; it is parsed like an environment value",
                            ))
                        }
                    }
                    return Ok(());
                }

                if meta.path.is_ident("prefix") {
                    let value = meta.value()?;
                    let lit: Lit = value.parse()?;
                    if let Lit::Str(s) = lit {
                        attrs.prefix = Some(s.value());
                    }
                    return Ok(());
                }

                if meta.path.is_ident("separator") {
                    let value = meta.value()?;
                    let lit: Lit = value.parse()?;
                    if let Lit::Str(s) = lit {
                        attrs.separator = Some(s.value());
                    }
                    return Ok(());
                }

                if meta.path.is_ident("required") {
                    attrs.required = true;
                    return Ok(());
                }

                if meta.path.is_ident("unset") {
                    attrs.unset = true;
                    return Ok(());
                }

                if meta.path.is_ident("expand") {
                    attrs.expand = true;
                    return Ok(());
                }

                if meta.path.is_ident("not_empty") {
                    attrs.not_empty = true;
                    return Ok(());
                }

                if meta.path.is_ident("file") {
                    attrs.file = true;
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            })?;
        }

        Ok(attrs)
    }
}
