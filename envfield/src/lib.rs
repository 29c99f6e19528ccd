//! Environment variable configuration with per-field resolution rules
//!
//! `envfield` populates structs from environment variables, applying
//! declarative per-field rules: defaults, required-ness, prefixes, secret
//! unsetting, file-backed values, `{VAR}` expansion and collection parsing.
//!
//! # Features
//!
//! - **Declarative**: Automatic implementation with `#[derive(FromEnv)]`
//! - **File-backed secrets**: Treat a value as a path and read the file
//! - **Secret unsetting**: Remove a variable from the environment after reading
//! - **Expansion**: Interpolate `{OTHER_VAR}` references into values
//! - **Collections**: Parse `Vec<T>`/`VecDeque<T>` with a configurable separator
//! - **Testable**: Resolution runs against an injectable [`EnvSource`], so
//!   tests can use an isolated [`MemoryEnv`] instead of mutating the process
//!
//! # Value Parsing
//!
//! Scalars are integers, floats, `String` and `bool`. Booleans accept the
//! case-insensitive tokens `y`/`yes`/`t`/`true`/`on`/`1` and
//! `n`/`no`/`f`/`false`/`off`/`0`. A field that is absent, has no default
//! and is not required resolves to the type's zero value (`0`, `false`,
//! `""`).
//!
//! # Example
//!
//! ```rust
//! use envfield::{FromEnv, LoadOptions, MemoryEnv};
//!
//! #[derive(Debug, FromEnv)]
//! #[env(prefix = "APP_")]
//! struct Config {
//!     #[env(required)]
//!     pub database_url: String,
//!
//!     #[env(default = "8080")]
//!     pub port: u16,
//!
//!     // false when APP_DEBUG is unset
//!     pub debug: bool,
//!
//!     #[env(separator = ":")]
//!     pub hosts: Vec<String>,
//! }
//!
//! # fn main() -> Result<(), envfield::EnvError> {
//! let mut env: MemoryEnv = [
//!     ("APP_DATABASE_URL", "postgres://localhost/db"),
//!     ("APP_HOSTS", "localhost:127.0.0.1"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = Config::from_env_with(&mut env, &LoadOptions::new())?;
//! assert_eq!(config.database_url, "postgres://localhost/db");
//! assert_eq!(config.port, 8080);
//! assert!(!config.debug);
//! assert_eq!(config.hosts, vec!["localhost", "127.0.0.1"]);
//! # Ok(())
//! # }
//! ```
//!
//! `Config::from_env()` does the same against the real process environment.
//!
//! # Attributes
//!
//! ## `#[env(prefix = "APP_")]` (struct or field)
//!
//! Prepended to the variable name to form the lookup key. A struct-level
//! prefix concatenates before a field-level one.
//!
//! ## `#[env(name = "CUSTOM_NAME")]`
//!
//! Environment variable name different from the field name. Without it,
//! the field name converts to UPPER_SNAKE_CASE.
//!
//! ## `#[env(default = "8080")]`
//!
//! Literal string to use when the variable is absent. The default runs
//! through the same pipeline as an environment value, so it is parsed,
//! expanded, or treated as a file path like any other raw value.
//!
//! ## `#[env(required)]` (struct or field)
//!
//! Fail with [`EnvError::Missing`] when the variable is absent and no
//! default is set. At struct level it forces every non-`Option` field
//! required.
//!
//! ## `#[env(file)]`
//!
//! Treat the resolved string as a filesystem path and use the file's
//! entire contents as the value. Useful for Kubernetes/Docker mounted
//! secrets.
//!
//! ```rust
//! # use envfield::{FromEnv, LoadOptions, MemoryEnv};
//! #[derive(FromEnv)]
//! pub struct Config {
//!     // API_KEY holds a path; the field holds the file's contents
//!     #[env(file)]
//!     pub api_key: String,
//! }
//! ```
//!
//! ## `#[env(unset)]`
//!
//! Remove the variable from the environment after reading it, so secrets
//! do not leak to child processes. A second load of the same struct fails
//! with [`EnvError::Unset`].
//!
//! ## `#[env(expand)]`
//!
//! Interpolate `{OTHER_VAR}` references into the value before further
//! processing. `{{` and `}}` escape literal braces.
//!
//! ## `#[env(not_empty)]`
//!
//! Fail with [`EnvError::Empty`] when the resolved string is empty.
//!
//! ## `#[env(separator = ":")]`
//!
//! Delimiter for splitting sequence fields. Defaults to `","`.
//!
//! # Optional fields
//!
//! `Option<T>` fields resolve to `None` when the variable is absent and no
//! default or override is supplied, instead of using the zero value:
//!
//! ```rust
//! # use envfield::{FromEnv, LoadOptions, MemoryEnv};
//! #[derive(FromEnv)]
//! struct Config {
//!     pub workers: Option<u32>,
//! }
//!
//! # fn main() -> Result<(), envfield::EnvError> {
//! let mut env = MemoryEnv::new();
//! let config = Config::from_env_with(&mut env, &LoadOptions::new())?;
//! assert_eq!(config.workers, None);
//! # Ok(())
//! # }
//! ```
//!
//! # Load options
//!
//! [`LoadOptions`] carries caller overrides (keyed by the field's base
//! name, taking precedence over the environment) and an observer invoked
//! with `(key, value, is_default)` after each field resolves:
//!
//! ```rust
//! # use envfield::{FromEnv, LoadOptions, MemoryEnv};
//! #[derive(FromEnv)]
//! struct Config {
//!     pub port: u16,
//! }
//!
//! # fn main() -> Result<(), envfield::EnvError> {
//! let mut env: MemoryEnv = [("PORT", "2000")].into_iter().collect();
//! let opts = LoadOptions::new().override_value("PORT", "3000");
//!
//! let config = Config::from_env_with(&mut env, &opts)?;
//! assert_eq!(config.port, 3000);
//! # Ok(())
//! # }
//! ```
//!
//! # Builder API
//!
//! The derive macro is a thin layer over [`FieldSpec`] / [`BoundField`],
//! which can be used directly for fields declared at runtime:
//!
//! ```rust
//! use envfield::{Binding, FieldSpec, MemoryEnv};
//!
//! # fn main() -> Result<(), envfield::EnvError> {
//! let mut env: MemoryEnv = [("APP_PORT", "3000")].into_iter().collect();
//!
//! let port: u16 = FieldSpec::new("PORT")
//!     .default("8080")
//!     .bind(Binding { prefix: "APP_", ..Binding::default() })
//!     .resolve(&mut env)?;
//!
//! assert_eq!(port, 3000);
//! # Ok(())
//! # }
//! ```

mod coerce;
mod env;
mod error;
mod expand;
mod field;

pub use coerce::{Coerce, CoerceError, Scalar};
pub use env::{EnvSource, MemoryEnv, ProcessEnv};
pub use error::EnvError;
pub use expand::{expand, ExpandError};
pub use field::{Binding, BoundField, FieldSpec, LoadOptions, OnResolveFn};

pub use envfield_derive::FromEnv;
