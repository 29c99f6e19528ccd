//! Basic usage: required fields, defaults and zero values

use envfield::FromEnv;

#[derive(Debug, FromEnv)]
struct Config {
    // Fails with EnvError::Missing when DATABASE_URL is not set
    #[env(required)]
    pub database_url: String,

    // Uses "8080" when SERVER_PORT is not set
    #[env(name = "SERVER_PORT", default = "8080")]
    pub port: u16,

    // No default, not required: falls back to false
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DATABASE_URL", "postgres://localhost/db");

    let config = Config::from_env()?;

    println!("Configuration:");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);

    Ok(())
}
