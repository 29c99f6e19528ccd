//! Comprehensive example showing multiple features combined

use std::io::Write;

use envfield::FromEnv;
use tempfile::NamedTempFile;

#[derive(Debug, FromEnv)]
#[env(prefix = "APP_")]
struct Config {
    // Required field
    #[env(required)]
    pub name: String, // APP_NAME

    // Optional field
    pub version: Option<String>, // APP_VERSION

    // Default value
    #[env(default = "8080")]
    pub port: u16, // APP_PORT

    // Zero value when absent
    pub debug: bool, // APP_DEBUG

    // Custom name
    #[env(name = "DATABASE_CONNECTION_STRING")]
    pub database_url: String, // APP_DATABASE_CONNECTION_STRING

    // File-backed secret, removed from the environment after reading
    #[env(file, unset)]
    pub api_key: String, // APP_API_KEY holds a path

    // Expansion
    #[env(expand, default = "{HOME}/.local/share/myapp")]
    pub data_dir: String, // APP_DATA_DIR

    // Collections
    #[env(separator = ":")]
    pub hosts: Vec<String>, // APP_HOSTS
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("HOME", "/home/user");
    std::env::set_var("APP_NAME", "my-application");
    std::env::set_var("APP_VERSION", "1.0.0");
    std::env::set_var("APP_DATABASE_CONNECTION_STRING", "postgres://localhost/db");
    std::env::set_var("APP_HOSTS", "localhost:10.0.0.5");

    let mut api_key_file = NamedTempFile::new()?;
    write!(api_key_file, "super-secret-key")?;
    std::env::set_var("APP_API_KEY", api_key_file.path());

    let config = Config::from_env()?;

    println!("Comprehensive Configuration:");
    println!("  Name: {}", config.name);
    println!("  Version: {:?}", config.version);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);
    println!("  Database URL: {}", config.database_url);
    println!("  API key: {}", config.api_key);
    println!("  Data dir: {}", config.data_dir);
    println!("  Hosts: {:?}", config.hosts);
    println!(
        "  APP_API_KEY still set: {}",
        std::env::var("APP_API_KEY").is_ok()
    );

    Ok(())
}
