//! Derive macro implementation for envfield

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;
mod ty;

use attrs::{FieldAttrs, StructAttrs};
use ty::TypeShape;

/// `FromEnv` derive macro
///
/// Implements `from_env()` and `from_env_with()` on structs: one
/// `envfield::FieldSpec` is declared per field, bound with the struct-level
/// context, and resolved in declaration order. The first failing field
/// aborts the load.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to all env var names
/// - `#[env(required)]`: Force all non-`Option` fields required
///
/// **Field-level**:
/// - `#[env(name = "CUSTOM_NAME")]`: Custom environment variable name
/// - `#[env(default = "value")]`: Literal default, parsed like an env value
/// - `#[env(prefix = "PREFIX_")]`: Field prefix, after the struct prefix
/// - `#[env(required)]`: Fail when absent with no default
/// - `#[env(file)]`: Treat the value as a path, use the file's contents
/// - `#[env(expand)]`: Interpolate `{VAR}` references
/// - `#[env(unset)]`: Remove the variable after reading
/// - `#[env(not_empty)]`: Fail when the resolved string is empty
/// - `#[env(separator = ":")]`: Delimiter for sequence fields
///
/// # Example
///
/// See the `envfield` crate documentation for usage examples.
#[proc_macro_derive(FromEnv, attributes(env))]
pub fn derive_from_env(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "FromEnv only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(input, "FromEnv only supports structs"));
        }
    };

    let field_initializers = fields
        .iter()
        .map(|field| expand_field(field, &struct_attrs))
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #struct_name {
            /// Load configuration from the process environment
            ///
            /// # Errors
            ///
            /// - Required environment variables are not set
            /// - Environment variable values cannot be parsed into target types
            /// - File-backed values fail to read, `unset`/`not_empty`/expansion
            ///   rules are violated, or a field type is unsupported
            pub fn from_env() -> ::std::result::Result<Self, ::envfield::EnvError> {
                Self::from_env_with(&mut ::envfield::ProcessEnv, &::envfield::LoadOptions::new())
            }

            /// Load configuration from `__env`, applying the overrides and
            /// observer carried by `__opts`
            pub fn from_env_with<__E: ::envfield::EnvSource>(
                __env: &mut __E,
                __opts: &::envfield::LoadOptions<'_>,
            ) -> ::std::result::Result<Self, ::envfield::EnvError> {
                Ok(Self {
                    #(#field_initializers),*
                })
            }
        }
    })
}

/// Generate the initializer expression for one field.
fn expand_field(
    field: &syn::Field,
    struct_attrs: &StructAttrs,
) -> syn::Result<proc_macro2::TokenStream> {
    let field_name = field.ident.as_ref().unwrap();
    let field_type = &field.ty;
    let attrs = FieldAttrs::from_field(field)?;

    let base_name = attrs
        .name
        .clone()
        .unwrap_or_else(|| field_name.to_string().to_uppercase());

    let shape = ty::classify(field_type);

    if matches!(shape, TypeShape::Unsupported) {
        // Unsupported types fail when the field resolves, before any
        // environment access, so the outcome never depends on what is set.
        let type_display = ty::display_name(field_type);
        let key = format!(
            "{}{}{}",
            struct_attrs.prefix,
            attrs.prefix.clone().unwrap_or_default(),
            base_name
        );
        return Ok(quote! {
            #field_name: return ::std::result::Result::Err(
                ::envfield::EnvError::unsupported_type(#key, #type_display)
            )
        });
    }

    if attrs.required && matches!(shape, TypeShape::Optional(_)) {
        return Err(syn::Error::new_spanned(
            field,
            "Option<T> fields cannot be required (they resolve to None when absent)",
        ));
    }

    let mut spec = quote! { ::envfield::FieldSpec::new(#base_name) };
    if let Some(default) = &attrs.default {
        spec = quote! { #spec.default(#default) };
    }
    if let Some(prefix) = &attrs.prefix {
        spec = quote! { #spec.prefix(#prefix) };
    }
    if let Some(separator) = &attrs.separator {
        spec = quote! { #spec.separator(#separator) };
    }
    if attrs.required {
        spec = quote! { #spec.required() };
    }
    if attrs.unset {
        spec = quote! { #spec.unset() };
    }
    if attrs.expand {
        spec = quote! { #spec.expand() };
    }
    if attrs.not_empty {
        spec = quote! { #spec.not_empty() };
    }
    if attrs.file {
        spec = quote! { #spec.file() };
    }

    let struct_prefix = struct_attrs.prefix.as_str();
    // A struct-level `required` skips Option fields.
    let force_required = struct_attrs.required && !matches!(shape, TypeShape::Optional(_));

    let binding = quote! {
        ::envfield::Binding {
            prefix: #struct_prefix,
            required: #force_required,
            explicit: __opts.override_for(#base_name),
            on_resolve: __opts.observer(),
        }
    };

    let initializer = match shape {
        TypeShape::Optional(inner) => quote! {
            #spec.bind::<#inner>(#binding).resolve_optional(__env)?
        },
        _ => quote! {
            #spec.bind::<#field_type>(#binding).resolve(__env)?
        },
    };

    Ok(quote! { #field_name: #initializer })
}
