//! File-backed secrets: the variable holds a path, the field holds the
//! file's contents (Kubernetes Secrets, Docker Secrets)

use std::io::Write;

use envfield::FromEnv;
use tempfile::NamedTempFile;

#[derive(Debug, FromEnv)]
struct Config {
    // API_KEY holds a path to a mounted secret file
    #[env(file, not_empty)]
    pub api_key: String,

    pub service_name: String,
}

fn main() -> anyhow::Result<()> {
    let mut secret_file = NamedTempFile::new()?;
    write!(secret_file, "super-secret-key")?;

    std::env::set_var("API_KEY", secret_file.path());
    std::env::set_var("SERVICE_NAME", "billing");

    let config = Config::from_env()?;

    println!("Service: {}", config.service_name);
    println!("API key (from file): {}", config.api_key);

    Ok(())
}
