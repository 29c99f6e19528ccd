// This test verifies that marking an Option<T> field required produces a
// clear error: Option<T> fields resolve to None when absent, which
// contradicts required.

use envfield::FromEnv;

#[derive(FromEnv)]
struct Config {
    #[env(required)]
    pub optional_field: Option<String>,
}

fn main() {}
