//! Load options: caller overrides and the on_resolve observer, against an
//! isolated in-memory environment

use envfield::{FromEnv, LoadOptions, MemoryEnv};

#[derive(Debug, FromEnv)]
#[env(prefix = "APP_")]
struct Config {
    pub port: u16,

    #[env(default = "false")]
    pub production: bool,
}

fn main() -> anyhow::Result<()> {
    let mut env: MemoryEnv = [("APP_PORT", "2000")].into_iter().collect();

    let observer = |key: &str, value: &dyn std::fmt::Debug, is_default: bool| {
        let origin = if is_default { "default" } else { "environment/override" };
        println!("resolved {} = {:?} ({})", key, value, origin);
    };

    // Overrides are keyed by base name and beat the environment.
    let opts = LoadOptions::new()
        .override_value("PORT", "3000")
        .on_resolve(&observer);

    let config = Config::from_env_with(&mut env, &opts)?;

    println!("Port: {} (override wins over APP_PORT=2000)", config.port);
    println!("Production: {}", config.production);

    Ok(())
}
