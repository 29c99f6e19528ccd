//! `{VAR}` expansion: interpolate other environment variables into a value

use envfield::FromEnv;

#[derive(Debug, FromEnv)]
struct Config {
    #[env(expand, default = "{HOME}/.cache/myapp")]
    pub cache_dir: String,

    #[env(expand)]
    pub listen_addr: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("HOME", "/home/user");
    std::env::set_var("HOST", "0.0.0.0");
    std::env::set_var("PORT", "8080");
    std::env::set_var("LISTEN_ADDR", "{HOST}:{PORT}");

    let config = Config::from_env()?;

    println!("Cache dir (expanded default): {}", config.cache_dir);
    println!("Listen addr: {}", config.listen_addr);

    Ok(())
}
