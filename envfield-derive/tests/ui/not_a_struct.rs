// This test verifies that deriving FromEnv on an enum produces a clear error

use envfield::FromEnv;

#[derive(FromEnv)]
enum Config {
    Development,
    Production,
}

fn main() {}
