//! Example demonstrating struct-level and field-level prefixes

use envfield::FromEnv;

#[derive(Debug, FromEnv)]
#[env(prefix = "MYAPP_")]
struct Config {
    // Environment variables will be prefixed: MYAPP_DATABASE_URL, MYAPP_PORT
    pub database_url: String,

    #[env(default = "8080")]
    pub port: u16,

    // Field prefixes compose after the struct prefix: MYAPP_REDIS_HOST
    #[env(prefix = "REDIS_")]
    pub host: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_PORT", "3000");
    std::env::set_var("MYAPP_REDIS_HOST", "cache.internal");

    let config = Config::from_env()?;

    println!("Configuration with prefix 'MYAPP_':");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.port);
    println!("  Redis host: {}", config.host);

    Ok(())
}
