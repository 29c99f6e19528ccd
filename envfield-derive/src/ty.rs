//! Field type classification for code generation.
//!
//! The coercion table supports scalars (integers, floats, `String`, `bool`)
//! and `Vec`/`VecDeque` over one scalar. The macro classifies each field's
//! declared type syntactically; anything it cannot recognize resolves to
//! a runtime `UnsupportedType` error, before any environment access.

use syn::{GenericArgument, PathArguments, PathSegment, Type};

const SCALAR_IDENTS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize", "f32",
    "f64", "bool", "String",
];

const SEQUENCE_IDENTS: &[&str] = &["Vec", "VecDeque"];

/// How a declared field type participates in resolution.
pub enum TypeShape<'a> {
    /// A scalar or sequence of scalars: resolve directly.
    Supported,

    /// `Option<T>` over a supported type: resolve to `None` when absent.
    Optional(&'a Type),

    /// Not in the coercion table (unrecognized scalar, multi-parameter
    /// generic, non-sequence generic).
    Unsupported,
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    match ty {
        Type::Path(type_path) => type_path.path.segments.last(),
        _ => None,
    }
}

fn single_type_argument(segment: &PathSegment) -> Option<&Type> {
    if let PathArguments::AngleBracketed(args) = &segment.arguments {
        if args.args.len() == 1 {
            if let Some(GenericArgument::Type(inner)) = args.args.first() {
                return Some(inner);
            }
        }
    }
    None
}

fn is_scalar(ty: &Type) -> bool {
    match last_segment(ty) {
        Some(segment) => {
            segment.arguments.is_none() && SCALAR_IDENTS.contains(&segment.ident.to_string().as_str())
        }
        None => false,
    }
}

fn is_sequence_of_scalars(ty: &Type) -> bool {
    match last_segment(ty) {
        Some(segment) if SEQUENCE_IDENTS.contains(&segment.ident.to_string().as_str()) => {
            single_type_argument(segment).is_some_and(is_scalar)
        }
        _ => false,
    }
}

/// Classify a field's declared type.
pub fn classify(ty: &Type) -> TypeShape<'_> {
    if let Some(segment) = last_segment(ty) {
        if segment.ident == "Option" {
            if let Some(inner) = single_type_argument(segment) {
                if is_scalar(inner) || is_sequence_of_scalars(inner) {
                    return TypeShape::Optional(inner);
                }
            }
            return TypeShape::Unsupported;
        }
    }

    if is_scalar(ty) || is_sequence_of_scalars(ty) {
        TypeShape::Supported
    } else {
        TypeShape::Unsupported
    }
}

/// Display form of a type for `UnsupportedType` error payloads.
pub fn display_name(ty: &Type) -> String {
    quote::quote!(#ty).to_string().replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_scalars_supported() {
        for ty in [
            parse_quote!(u16),
            parse_quote!(i64),
            parse_quote!(f64),
            parse_quote!(bool),
            parse_quote!(String),
            parse_quote!(std::string::String),
        ] {
            assert!(matches!(classify(&ty), TypeShape::Supported));
        }
    }

    #[test]
    fn test_sequences_supported() {
        let vec: Type = parse_quote!(Vec<String>);
        let deque: Type = parse_quote!(std::collections::VecDeque<u16>);
        assert!(matches!(classify(&vec), TypeShape::Supported));
        assert!(matches!(classify(&deque), TypeShape::Supported));
    }

    #[test]
    fn test_option_classified_with_inner() {
        let ty: Type = parse_quote!(Option<u32>);
        match classify(&ty) {
            TypeShape::Optional(inner) => {
                let expected: Type = parse_quote!(u32);
                assert_eq!(inner, &expected);
            }
            _ => panic!("expected Optional"),
        }

        let seq: Type = parse_quote!(Option<Vec<String>>);
        assert!(matches!(classify(&seq), TypeShape::Optional(_)));
    }

    #[test]
    fn test_unsupported_types() {
        for ty in [
            parse_quote!(HashMap<String, String>),
            parse_quote!(Vec<Vec<u8>>),
            parse_quote!(std::net::IpAddr),
            parse_quote!(Option<HashMap<String, String>>),
            parse_quote!(Box<str>),
            parse_quote!((u8, u8)),
        ] {
            assert!(
                matches!(classify(&ty), TypeShape::Unsupported),
                "{} should be unsupported",
                display_name(&ty)
            );
        }
    }

    #[test]
    fn test_display_name() {
        let ty: Type = parse_quote!(HashMap<String, String>);
        assert_eq!(display_name(&ty), "HashMap<String,String>");
    }
}
