//! Field declaration, binding and the resolution pipeline
//!
//! A field goes through two explicit phases:
//!
//! 1. **Declare**: [`FieldSpec::new`] plus builder methods describe how one
//!    configuration field maps to an environment key (default, prefix,
//!    `file`/`expand`/`unset`/`required`/`not_empty` flags, separator).
//! 2. **Bind**: [`FieldSpec::bind`] consumes the spec together with the
//!    struct-level [`Binding`] (prefix, forced required, explicit override,
//!    observer) and fixes the target type, yielding a [`BoundField`].
//!
//! Only a [`BoundField`] can resolve, so "bind exactly once, before first
//! resolution" holds by construction.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::marker::PhantomData;

use crate::coerce::Coerce;
use crate::env::EnvSource;
use crate::error::EnvError;
use crate::expand::expand;

/// Observer invoked after a field resolves: `(key, final value, is_default)`.
///
/// `is_default` is true when the value came from the field default or the
/// zero-value factory rather than an explicit override or the environment.
/// Panics inside the observer propagate to the caller unmodified.
pub type OnResolveFn<'a> = dyn Fn(&str, &dyn fmt::Debug, bool) + 'a;

/// Declarative description of one configuration field.
///
/// Immutable after construction apart from the one-shot adjustments applied
/// by [`FieldSpec::bind`].
///
/// # Example
///
/// ```rust
/// use envfield::{Binding, FieldSpec, MemoryEnv};
///
/// let mut env: MemoryEnv = [("APP_PORT", "3000")].into_iter().collect();
///
/// let port: u16 = FieldSpec::new("PORT")
///     .default("8080")
///     .bind(Binding { prefix: "APP_", ..Binding::default() })
///     .resolve(&mut env)?;
///
/// assert_eq!(port, 3000);
/// # Ok::<(), envfield::EnvError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    prefix: String,
    default: Option<String>,
    separator: String,
    file: bool,
    expand: bool,
    unset: bool,
    required: bool,
    not_empty: bool,
}

impl FieldSpec {
    /// Declare a field with the given base environment variable name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "field name must not be empty");

        Self {
            name,
            prefix: String::new(),
            default: None,
            separator: ",".to_string(),
            file: false,
            expand: false,
            unset: false,
            required: false,
            not_empty: false,
        }
    }

    /// Literal string to use when the variable is absent.
    ///
    /// The default runs through the same pipeline as an environment value,
    /// so it may contain `{VAR}` references (with [`FieldSpec::expand`]) or
    /// a file path (with [`FieldSpec::file`]).
    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Field-level prefix prepended to the name to form the lookup key.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Delimiter used to split sequence values. Defaults to `","`.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Treat the resolved string as a path and read the file's contents.
    pub fn file(mut self) -> Self {
        self.file = true;
        self
    }

    /// Interpolate `{VAR}` references into the raw value.
    pub fn expand(mut self) -> Self {
        self.expand = true;
        self
    }

    /// Remove the variable from the environment after reading it.
    pub fn unset(mut self) -> Self {
        self.unset = true;
        self
    }

    /// Fail with [`EnvError::Missing`] when absent and no default is set.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Fail with [`EnvError::Empty`] when the resolved string is empty.
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Bind the declaration to its target type and struct-level context.
    ///
    /// The binding prefix concatenates *before* the field-level prefix, and
    /// a `required` binding forces the field required.
    pub fn bind<T: Coerce>(mut self, binding: Binding<'_>) -> BoundField<'_, T> {
        if !binding.prefix.is_empty() {
            self.prefix = format!("{}{}", binding.prefix, self.prefix);
        }
        if binding.required {
            self.required = true;
        }

        BoundField {
            spec: self,
            explicit: binding.explicit,
            on_resolve: binding.on_resolve,
            _target: PhantomData,
        }
    }
}

/// Struct-level context applied to a [`FieldSpec`] at bind time.
#[derive(Default)]
pub struct Binding<'a> {
    /// Prefix prepended before the field-level prefix.
    pub prefix: &'a str,
    /// Force the field required regardless of its own flag.
    pub required: bool,
    /// Out-of-band value taking precedence over the environment.
    pub explicit: Option<String>,
    /// Observer invoked after successful resolution.
    pub on_resolve: Option<&'a OnResolveFn<'a>>,
}

/// A field bound to its target type, ready to resolve.
pub struct BoundField<'a, T> {
    spec: FieldSpec,
    explicit: Option<String>,
    on_resolve: Option<&'a OnResolveFn<'a>>,
    _target: PhantomData<fn() -> T>,
}

impl<T: Coerce> BoundField<'_, T> {
    /// The fully-qualified environment variable name, prefix included.
    pub fn key(&self) -> String {
        format!("{}{}", self.spec.prefix, self.spec.name)
    }

    /// Resolve the field against `env` and return the typed value.
    ///
    /// The pipeline runs in a fixed order: value-source selection
    /// (explicit override, then environment, then default, then the type's
    /// zero value), expansion, unset, emptiness check, file indirection,
    /// parsing, observation. Each step can fail with the matching
    /// [`EnvError`] variant.
    ///
    /// Resolution is idempotent unless [`FieldSpec::unset`] was requested:
    /// then a second resolution against the same environment fails with
    /// [`EnvError::Unset`].
    pub fn resolve<E: EnvSource + ?Sized>(&self, env: &mut E) -> Result<T, EnvError> {
        let key = self.key();

        let (mut value, is_default) = if let Some(explicit) = &self.explicit {
            (explicit.clone(), false)
        } else {
            match env.get(&key) {
                Some(value) => (value, false),
                None => {
                    if self.spec.required && self.spec.default.is_none() {
                        return Err(EnvError::missing(&*key));
                    }
                    match &self.spec.default {
                        Some(default) => (default.clone(), true),
                        None => (T::zero_string(), true),
                    }
                }
            }
        };

        if self.spec.expand {
            value = expand(&value, env).map_err(|source| EnvError::Expand {
                name: key.clone(),
                source,
            })?;
        }

        if self.spec.unset && env.remove(&key).is_none() {
            return Err(EnvError::Unset { name: key });
        }

        if self.spec.not_empty && value.is_empty() {
            return Err(EnvError::Empty { name: key });
        }

        if self.spec.file {
            value = fs::read_to_string(&value).map_err(|source| EnvError::FileRead {
                name: key.clone(),
                path: value.clone(),
                source,
            })?;
        }

        let parsed = T::coerce(&value, &self.spec.separator)
            .map_err(|e| EnvError::parse_error::<T>(key.as_str(), value.as_str(), e))?;

        if let Some(on_resolve) = self.on_resolve {
            on_resolve(&key, &parsed, is_default);
        }

        Ok(parsed)
    }

    /// Resolve an optional field: `Ok(None)` when no explicit override, no
    /// environment value and no default exists; otherwise the full pipeline
    /// applies and yields `Some`.
    pub fn resolve_optional<E: EnvSource + ?Sized>(
        &self,
        env: &mut E,
    ) -> Result<Option<T>, EnvError> {
        let key = self.key();
        let has_source =
            self.explicit.is_some() || self.spec.default.is_some() || env.contains(&key);

        if !has_source {
            return Ok(None);
        }

        self.resolve(env).map(Some)
    }
}

/// Runtime options for a whole-struct load, consumed by the code generated
/// from `#[derive(FromEnv)]`.
#[derive(Default)]
pub struct LoadOptions<'a> {
    overrides: HashMap<String, String>,
    on_resolve: Option<&'a OnResolveFn<'a>>,
}

impl<'a> LoadOptions<'a> {
    /// Empty options: no overrides, no observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a value for a field by its *base* name (before any prefix).
    ///
    /// Overrides take precedence over the environment, even when the
    /// prefixed variable is set.
    pub fn override_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }

    /// Observe every field as it resolves.
    pub fn on_resolve(mut self, observer: &'a OnResolveFn<'a>) -> Self {
        self.on_resolve = Some(observer);
        self
    }

    /// Look up an override by base name (used by macro-generated code)
    #[doc(hidden)]
    pub fn override_for(&self, name: &str) -> Option<String> {
        self.overrides.get(name).cloned()
    }

    /// The observer, if any (used by macro-generated code)
    #[doc(hidden)]
    pub fn observer(&self) -> Option<&'a OnResolveFn<'a>> {
        self.on_resolve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;
    use std::cell::RefCell;
    use std::io::Write;

    fn bound<T: Coerce>(spec: FieldSpec) -> BoundField<'static, T> {
        spec.bind(Binding::default())
    }

    #[test]
    fn test_resolve_from_environment() {
        let mut env: MemoryEnv = [("HOME", "/home/user")].into_iter().collect();
        let home: String = bound(FieldSpec::new("HOME")).resolve(&mut env).unwrap();
        assert_eq!(home, "/home/user");
    }

    #[test]
    fn test_resolve_uses_default_when_absent() {
        let mut env = MemoryEnv::new();
        let port: u16 = bound(FieldSpec::new("PORT").default("3000"))
            .resolve(&mut env)
            .unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_environment_beats_default() {
        let mut env: MemoryEnv = [("PORT", "9090")].into_iter().collect();
        let port: u16 = bound(FieldSpec::new("PORT").default("3000"))
            .resolve(&mut env)
            .unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_zero_value_when_no_default() {
        let mut env = MemoryEnv::new();
        let port: u16 = bound(FieldSpec::new("PORT")).resolve(&mut env).unwrap();
        assert_eq!(port, 0);

        let debug: bool = bound(FieldSpec::new("DEBUG")).resolve(&mut env).unwrap();
        assert!(!debug);
    }

    #[test]
    fn test_required_missing() {
        let mut env = MemoryEnv::new();
        let result: Result<u16, _> = bound(FieldSpec::new("PORT").required()).resolve(&mut env);
        assert!(matches!(result, Err(EnvError::Missing { name }) if name == "PORT"));
    }

    #[test]
    fn test_required_with_default_still_resolves() {
        let mut env = MemoryEnv::new();
        let port: u16 = bound(FieldSpec::new("PORT").required().default("3000"))
            .resolve(&mut env)
            .unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_binding_forces_required() {
        let mut env = MemoryEnv::new();
        let field: BoundField<u16> = FieldSpec::new("PORT").bind(Binding {
            required: true,
            ..Binding::default()
        });
        assert!(matches!(
            field.resolve(&mut env),
            Err(EnvError::Missing { .. })
        ));
    }

    #[test]
    fn test_explicit_beats_environment() {
        let mut env: MemoryEnv = [("PORT", "2000")].into_iter().collect();
        let field: BoundField<u16> = FieldSpec::new("PORT").bind(Binding {
            explicit: Some("3000".to_string()),
            ..Binding::default()
        });
        assert_eq!(field.resolve(&mut env).unwrap(), 3000);
    }

    #[test]
    fn test_prefix_composition() {
        let mut env: MemoryEnv = [("APP_DB_HOST", "db.internal")].into_iter().collect();
        let field: BoundField<String> = FieldSpec::new("HOST").prefix("DB_").bind(Binding {
            prefix: "APP_",
            ..Binding::default()
        });
        assert_eq!(field.key(), "APP_DB_HOST");
        assert_eq!(field.resolve(&mut env).unwrap(), "db.internal");
    }

    #[test]
    fn test_expand_value() {
        let mut env: MemoryEnv = [("HOME", "/home/user"), ("TEMP_FOLDER", "{HOME}/tmp")]
            .into_iter()
            .collect();
        let folder: String = bound(FieldSpec::new("TEMP_FOLDER").expand())
            .resolve(&mut env)
            .unwrap();
        assert_eq!(folder, "/home/user/tmp");
    }

    #[test]
    fn test_expand_applies_to_default() {
        let mut env: MemoryEnv = [("HOME", "/home/user")].into_iter().collect();
        let folder: String = bound(FieldSpec::new("TEMP_FOLDER").default("{HOME}/tmp").expand())
            .resolve(&mut env)
            .unwrap();
        assert_eq!(folder, "/home/user/tmp");
    }

    #[test]
    fn test_expand_unknown_reference() {
        let mut env: MemoryEnv = [("TEMP_FOLDER", "{NOPE}/tmp")].into_iter().collect();
        let result: Result<String, _> =
            bound(FieldSpec::new("TEMP_FOLDER").expand()).resolve(&mut env);
        assert!(matches!(result, Err(EnvError::Expand { name, .. }) if name == "TEMP_FOLDER"));
    }

    #[test]
    fn test_unset_removes_key() {
        let mut env: MemoryEnv = [("PASSWORD", "123456")].into_iter().collect();
        let spec = FieldSpec::new("PASSWORD").unset();

        let password: String = bound(spec.clone()).resolve(&mut env).unwrap();
        assert_eq!(password, "123456");
        assert!(!env.contains("PASSWORD"));

        // Second resolution fails: the key is gone.
        let result: Result<String, _> = bound(spec).resolve(&mut env);
        assert!(matches!(result, Err(EnvError::Unset { name }) if name == "PASSWORD"));
    }

    #[test]
    fn test_unset_fails_when_value_came_from_default() {
        let mut env = MemoryEnv::new();
        let result: Result<String, _> =
            bound(FieldSpec::new("PASSWORD").default("hunter2").unset()).resolve(&mut env);
        assert!(matches!(result, Err(EnvError::Unset { .. })));
    }

    #[test]
    fn test_not_empty() {
        let mut env: MemoryEnv = [("PASSWORD", "")].into_iter().collect();
        let result: Result<String, _> =
            bound(FieldSpec::new("PASSWORD").not_empty()).resolve(&mut env);
        assert!(matches!(result, Err(EnvError::Empty { name }) if name == "PASSWORD"));
    }

    #[test]
    fn test_file_reads_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "123456").unwrap();

        let mut env: MemoryEnv = [("PASSWORD", file.path().to_str().unwrap())]
            .into_iter()
            .collect();
        let password: String = bound(FieldSpec::new("PASSWORD").file())
            .resolve(&mut env)
            .unwrap();
        assert_eq!(password, "123456");
    }

    #[test]
    fn test_file_not_found() {
        let mut env: MemoryEnv = [("PASSWORD", "/nonexistent/secret")].into_iter().collect();
        let result: Result<String, _> = bound(FieldSpec::new("PASSWORD").file()).resolve(&mut env);
        assert!(matches!(
            result,
            Err(EnvError::FileRead { name, path, .. })
                if name == "PASSWORD" && path == "/nonexistent/secret"
        ));
    }

    #[test]
    fn test_parse_error_payload() {
        let mut env: MemoryEnv = [("PORT", "3000a")].into_iter().collect();
        let result: Result<u16, _> = bound(FieldSpec::new("PORT")).resolve(&mut env);
        match result {
            Err(EnvError::Parse {
                name,
                value,
                type_name,
                ..
            }) => {
                assert_eq!(name, "PORT");
                assert_eq!(value, "3000a");
                assert!(type_name.contains("u16"));
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_sequence_with_custom_separator() {
        let mut env: MemoryEnv = [("HOSTS", "localhost:127.0.0.1")].into_iter().collect();
        let hosts: Vec<String> = bound(FieldSpec::new("HOSTS").separator(":"))
            .resolve(&mut env)
            .unwrap();
        assert_eq!(hosts, vec!["localhost", "127.0.0.1"]);
    }

    #[test]
    fn test_unset_runs_before_parse() {
        // "Consume and remove" applies even when parsing fails afterwards.
        let mut env: MemoryEnv = [("PORT", "not-a-number")].into_iter().collect();
        let result: Result<u16, _> = bound(FieldSpec::new("PORT").unset()).resolve(&mut env);
        assert!(matches!(result, Err(EnvError::Parse { .. })));
        assert!(!env.contains("PORT"));
    }

    #[test]
    fn test_on_resolve_observer() {
        let calls: RefCell<Vec<(String, String, bool)>> = RefCell::new(Vec::new());
        let observer = |key: &str, value: &dyn std::fmt::Debug, is_default: bool| {
            calls
                .borrow_mut()
                .push((key.to_string(), format!("{:?}", value), is_default));
        };

        let mut env: MemoryEnv = [("PORT", "3000")].into_iter().collect();

        let port: BoundField<u16> = FieldSpec::new("PORT").bind(Binding {
            on_resolve: Some(&observer),
            ..Binding::default()
        });
        port.resolve(&mut env).unwrap();

        let production: BoundField<bool> = FieldSpec::new("PRODUCTION").default("t").bind(Binding {
            on_resolve: Some(&observer),
            ..Binding::default()
        });
        production.resolve(&mut env).unwrap();

        let calls = calls.into_inner();
        assert!(calls.contains(&("PORT".to_string(), "3000".to_string(), false)));
        assert!(calls.contains(&("PRODUCTION".to_string(), "true".to_string(), true)));
    }

    #[test]
    fn test_resolve_optional() {
        let mut env: MemoryEnv = [("PRESENT", "42")].into_iter().collect();

        let present: Option<u32> = bound(FieldSpec::new("PRESENT"))
            .resolve_optional(&mut env)
            .unwrap();
        assert_eq!(present, Some(42));

        let absent: Option<u32> = bound(FieldSpec::new("ABSENT"))
            .resolve_optional(&mut env)
            .unwrap();
        assert_eq!(absent, None);

        let defaulted: Option<u32> = bound(FieldSpec::new("ABSENT").default("7"))
            .resolve_optional(&mut env)
            .unwrap();
        assert_eq!(defaulted, Some(7));
    }

    #[test]
    fn test_resolve_optional_parse_failure_still_fails() {
        let mut env: MemoryEnv = [("PORT", "nope")].into_iter().collect();
        let result: Result<Option<u16>, _> =
            bound(FieldSpec::new("PORT")).resolve_optional(&mut env);
        assert!(matches!(result, Err(EnvError::Parse { .. })));
    }

    #[test]
    #[should_panic(expected = "field name must not be empty")]
    fn test_empty_name_panics() {
        let _ = FieldSpec::new("");
    }
}
