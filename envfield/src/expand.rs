//! `{VAR}` interpolation of environment variables into raw values
//!
//! Templates reference variables as `{NAME}`; literal braces are written
//! `{{` and `}}`. References are looked up in an [`EnvSource`], so expanded
//! values can themselves come from an isolated [`MemoryEnv`](crate::MemoryEnv).

use crate::env::EnvSource;

/// Failure while expanding a `{VAR}` template.
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    /// The template references a variable that is not set.
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    /// A brace was not closed or escaped.
    #[error("unmatched '{0}' in template")]
    UnmatchedBrace(char),
}

/// Substitute every `{NAME}` in `template` with the value of `NAME`.
pub fn expand<E: EnvSource + ?Sized>(template: &str, env: &E) -> Result<String, ExpandError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => return Err(ExpandError::UnmatchedBrace('{')),
                    }
                }
                match env.get(&name) {
                    Some(value) => out.push_str(&value),
                    None => return Err(ExpandError::UnknownVariable(name)),
                }
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(ExpandError::UnmatchedBrace('}')),
            _ => out.push(ch),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;

    #[test]
    fn test_expand_single_reference() {
        let env: MemoryEnv = [("HOME", "/home/user")].into_iter().collect();
        assert_eq!(expand("{HOME}/tmp", &env).unwrap(), "/home/user/tmp");
    }

    #[test]
    fn test_expand_multiple_references() {
        let env: MemoryEnv = [("HOST", "localhost"), ("PORT", "8080")]
            .into_iter()
            .collect();
        assert_eq!(expand("{HOST}:{PORT}", &env).unwrap(), "localhost:8080");
    }

    #[test]
    fn test_expand_plain_text_untouched() {
        let env = MemoryEnv::new();
        assert_eq!(expand("no references here", &env).unwrap(), "no references here");
    }

    #[test]
    fn test_expand_escaped_braces() {
        let env = MemoryEnv::new();
        assert_eq!(expand("{{literal}}", &env).unwrap(), "{literal}");
    }

    #[test]
    fn test_expand_unknown_variable() {
        let env = MemoryEnv::new();
        let err = expand("{NOPE}", &env).unwrap_err();
        assert!(matches!(err, ExpandError::UnknownVariable(name) if name == "NOPE"));
    }

    #[test]
    fn test_expand_unmatched_open_brace() {
        let env = MemoryEnv::new();
        let err = expand("{HOME", &env).unwrap_err();
        assert!(matches!(err, ExpandError::UnmatchedBrace('{')));
    }

    #[test]
    fn test_expand_unmatched_close_brace() {
        let env = MemoryEnv::new();
        let err = expand("oops}", &env).unwrap_err();
        assert!(matches!(err, ExpandError::UnmatchedBrace('}')));
    }
}
