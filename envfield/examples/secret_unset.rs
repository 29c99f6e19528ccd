//! Consume-and-remove secrets: `unset` deletes the variable after reading
//! so it does not leak into child processes

use envfield::FromEnv;

#[derive(Debug, FromEnv)]
struct Config {
    #[env(unset, not_empty)]
    pub database_password: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DATABASE_PASSWORD", "hunter2");

    let config = Config::from_env()?;

    println!("Password read: {}", config.database_password);
    println!(
        "Still in environment: {}",
        std::env::var("DATABASE_PASSWORD").is_ok()
    );

    // A second load fails: the variable is gone.
    match Config::from_env() {
        Err(e) => println!("Second load: {}", e),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
