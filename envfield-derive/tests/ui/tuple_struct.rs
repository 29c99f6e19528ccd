// This test verifies that deriving FromEnv on a tuple struct produces a
// clear error: field names are needed to derive environment variable names

use envfield::FromEnv;

#[derive(FromEnv)]
struct Config(String, u16);

fn main() {}
