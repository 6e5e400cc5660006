//! Two-party exchange driver
//!
//! Builds both parties, cross-feeds their public values, checks that the
//! derived secrets match, installs the secret and round-trips a message.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{ExchangeConfig, KeyAgreementError, KeyResult, Party, PublicValue, SharedSecret};

/// Raw parameters for one exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeInputs {
    /// Shared generator (g)
    pub generator: i64,
    /// Shared prime modulus (p)
    pub modulus: i64,
    /// Private exponent of the first party (a)
    pub first_exponent: i64,
    /// Private exponent of the second party (b)
    pub second_exponent: i64,
}

impl ExchangeInputs {
    /// Check every value against the configured bound
    pub fn check_bounds(&self, config: &ExchangeConfig) -> KeyResult<()> {
        config.check_bound("generator", self.generator)?;
        config.check_bound("modulus", self.modulus)?;
        config.check_bound("first exponent", self.first_exponent)?;
        config.check_bound("second exponent", self.second_exponent)?;
        Ok(())
    }
}

/// Everything an exchange produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeOutcome {
    pub first_public: PublicValue,
    pub second_public: PublicValue,
    pub shared_secret: SharedSecret,
    pub ciphertext: Vec<u8>,
    pub plaintext: Vec<u8>,
}

/// Cross-feed public values, compare the results and key both parties
pub fn agree(first: &mut Party, second: &mut Party) -> KeyResult<SharedSecret> {
    let first_secret = first.derive_shared_secret(second.public_value())?;
    let second_secret = second.derive_shared_secret(first.public_value())?;

    if first_secret != second_secret {
        return Err(KeyAgreementError::SecretMismatch {
            first: first_secret.get(),
            second: second_secret.get(),
        });
    }

    first.install_shared_secret(first_secret.get())?;
    second.install_shared_secret(second_secret.get())?;
    Ok(first_secret)
}

/// Run a full exchange: the first party encrypts `message`, the second
/// decrypts it.
pub fn run_exchange(
    config: &ExchangeConfig,
    inputs: &ExchangeInputs,
    message: &[u8],
) -> KeyResult<ExchangeOutcome> {
    inputs.check_bounds(config)?;
    if message.is_empty() {
        return Err(KeyAgreementError::EmptyInput);
    }
    if inputs.first_exponent == inputs.second_exponent {
        warn!("Both parties use the same private exponent");
    }

    let mut first = Party::new(inputs.generator, inputs.modulus, inputs.first_exponent)?;
    let mut second = Party::new(inputs.generator, inputs.modulus, inputs.second_exponent)?;
    info!(
        "Parties created: public values {} and {}",
        first.public_value(),
        second.public_value()
    );

    let shared_secret = agree(&mut first, &mut second)?;
    info!("Shared secret established");

    let ciphertext = first.encrypt(message)?;
    let plaintext = second.decrypt(&ciphertext)?;
    if plaintext != message {
        return Err(KeyAgreementError::RoundTripMismatch);
    }
    info!("Message round trip complete ({} bytes)", message.len());

    Ok(ExchangeOutcome {
        first_public: first.public_value(),
        second_public: second.public_value(),
        shared_secret,
        ciphertext,
        plaintext,
    })
}
