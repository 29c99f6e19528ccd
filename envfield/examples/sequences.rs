//! Collection fields: Vec/VecDeque split on a configurable separator

use std::collections::VecDeque;

use envfield::FromEnv;

#[derive(Debug, FromEnv)]
struct Config {
    #[env(separator = ":")]
    pub hosts: Vec<String>,

    // Default separator is ","
    pub ports: Vec<u16>,

    #[env(default = "warn,error")]
    pub log_levels: VecDeque<String>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("HOSTS", "localhost:127.0.0.1:10.0.0.5");
    std::env::set_var("PORTS", "80,443,8080");

    let config = Config::from_env()?;

    println!("Hosts: {:?}", config.hosts);
    println!("Ports: {:?}", config.ports);
    println!("Log levels (defaulted): {:?}", config.log_levels);

    Ok(())
}
