// This test verifies that a non-string default produces a clear error.
// Defaults are raw strings fed through the same pipeline as environment
// values, so `default = 8080` must be written `default = "8080"`.

use envfield::FromEnv;

#[derive(FromEnv)]
struct Config {
    #[env(default = 8080)]
    pub port: u16,
}

fn main() {}
