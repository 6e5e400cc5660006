//! Diffie-Hellman exchange demo
//!
//! Prompts for g, p and two private exponents, runs the exchange and shows
//! the encrypted and recovered message.

mod prompt;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use key_agreement::{ExchangeConfig, ExchangeInputs, run_exchange};
use tracing::{error, info};

use prompt::Prompter;

/// Environment variable naming an optional JSON config file
const CONFIG_ENV: &str = "DH_EXCHANGE_CONFIG";

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dh_exchange=info".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => load_config(Path::new(&path))?,
        None => ExchangeConfig::default(),
    };
    info!("Using max value {}", config.max_value);

    let result = run(&config);
    if let Err(e) = &result {
        error!("Exchange failed: {:#}", e);
    }
    result
}

fn load_config(path: &Path) -> Result<ExchangeConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))
}

fn run(config: &ExchangeConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let inputs = ExchangeInputs {
        generator: prompter.number("Generator (g): ", "generator", config)?,
        modulus: prompter.number("Modulus (p, prime): ", "modulus", config)?,
        first_exponent: prompter.number(
            "Private exponent of the first party (a): ",
            "first exponent",
            config,
        )?,
        second_exponent: prompter.number(
            "Private exponent of the second party (b): ",
            "second exponent",
            config,
        )?,
    };
    let message = prompter.message("Message to encrypt: ")?;

    let outcome = run_exchange(config, &inputs, message.as_bytes())?;

    println!("Shared secret: {}", outcome.shared_secret);
    println!("Ciphertext (hex): {}", hex::encode(&outcome.ciphertext));
    println!(
        "Decrypted text: {}",
        String::from_utf8_lossy(&outcome.plaintext)
    );
    println!("Message decrypted successfully");

    Ok(())
}
