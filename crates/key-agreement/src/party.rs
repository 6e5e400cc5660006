//! One side of the key agreement

use std::fmt;

use rand::Rng;
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::{self, KeyByte};
use crate::{
    KeyAgreementError, KeyResult, ParameterError, is_prime, is_valid_generator, power_mod,
};

/// Secret exponent, wiped on drop and never printed
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateExponent(i64);

impl PrivateExponent {
    fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for PrivateExponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateExponent(<redacted>)")
    }
}

/// `g^x mod p`, safe to hand to the peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicValue(i64);

impl PublicValue {
    pub fn get(self) -> i64 {
        self.0
    }
}

/// Values received from a peer are unchecked until used
impl From<i64> for PublicValue {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PublicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Agreed secret, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SharedSecret(i64);

impl SharedSecret {
    pub fn get(self) -> i64 {
        self.0
    }

    /// Mask used by the XOR transform (low byte only)
    pub fn key_byte(self) -> KeyByte {
        KeyByte::from_secret(self.0)
    }
}

impl From<SharedSecret> for i64 {
    fn from(secret: SharedSecret) -> Self {
        secret.0
    }
}

impl fmt::Display for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a party is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyState {
    /// Public value computed, no shared secret yet
    Agreed,
    /// Shared secret installed; encrypt/decrypt allowed
    Keyed,
}

/// A participant holding domain parameters and a private exponent.
///
/// Construction validates everything up front, so a `Party` is never
/// partially valid. It starts in [`PartyState::Agreed`] and moves to
/// [`PartyState::Keyed`] once [`Party::install_shared_secret`] succeeds.
#[derive(Debug, Clone)]
pub struct Party {
    generator: i64,
    modulus: i64,
    private_exponent: PrivateExponent,
    public_value: PublicValue,
    shared_secret: Option<SharedSecret>,
}

impl Party {
    /// Create a party from explicit parameters
    ///
    /// # Errors
    /// [`KeyAgreementError::InvalidParameter`] if the modulus is not prime,
    /// the generator is not in `(1, p)`, or the exponent is not in `(0, p)`.
    pub fn new(generator: i64, modulus: i64, private_exponent: i64) -> KeyResult<Self> {
        validate_domain(generator, modulus)?;
        if private_exponent <= 0 || private_exponent >= modulus {
            return Err(ParameterError::PrivateExponentOutOfRange {
                value: private_exponent,
                modulus,
            }
            .into());
        }
        Ok(Self::from_validated(
            generator,
            modulus,
            PrivateExponent(private_exponent),
        ))
    }

    /// Create a party with a private exponent drawn uniformly from `[1, p-1]`
    pub fn generate<R: Rng + ?Sized>(generator: i64, modulus: i64, rng: &mut R) -> KeyResult<Self> {
        validate_domain(generator, modulus)?;
        let exponent = PrivateExponent(rng.gen_range(1..modulus));
        Ok(Self::from_validated(generator, modulus, exponent))
    }

    fn from_validated(generator: i64, modulus: i64, private_exponent: PrivateExponent) -> Self {
        let public_value = PublicValue(power_mod(generator, private_exponent.get(), modulus));
        debug!(
            "Party created: g={}, p={}, public={}",
            generator, modulus, public_value
        );

        Self {
            generator,
            modulus,
            private_exponent,
            public_value,
            shared_secret: None,
        }
    }

    pub fn generator(&self) -> i64 {
        self.generator
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    pub fn public_value(&self) -> PublicValue {
        self.public_value
    }

    pub fn shared_secret(&self) -> Option<SharedSecret> {
        self.shared_secret
    }

    pub fn state(&self) -> PartyState {
        match self.shared_secret {
            Some(_) => PartyState::Keyed,
            None => PartyState::Agreed,
        }
    }

    /// Compute `peer^x mod p`. Does not install the result.
    pub fn derive_shared_secret(&self, peer: PublicValue) -> KeyResult<SharedSecret> {
        let value = peer.get();
        if value <= 0 || value >= self.modulus {
            return Err(KeyAgreementError::PeerValueOutOfRange {
                value,
                modulus: self.modulus,
            });
        }
        let secret = power_mod(value, self.private_exponent.get(), self.modulus);
        debug!("Derived shared secret from peer value {}", value);
        Ok(SharedSecret(secret))
    }

    /// Store the agreed secret, replacing any previous one
    pub fn install_shared_secret(&mut self, value: i64) -> KeyResult<()> {
        if value <= 0 {
            return Err(KeyAgreementError::NonPositiveSecret(value));
        }
        let secret = SharedSecret(value);
        if secret.key_byte().get() == 0 {
            warn!(
                "Shared secret {} has a zero low byte; XOR transform is the identity",
                value
            );
        }
        self.shared_secret = Some(secret);
        Ok(())
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> KeyResult<Vec<u8>> {
        self.apply(plaintext)
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> KeyResult<Vec<u8>> {
        self.apply(ciphertext)
    }

    fn apply(&self, bytes: &[u8]) -> KeyResult<Vec<u8>> {
        match self.shared_secret {
            Some(secret) => cipher::transform(bytes, secret.key_byte().get(), true),
            None => cipher::transform(bytes, 0, false),
        }
    }
}

fn validate_domain(generator: i64, modulus: i64) -> Result<(), ParameterError> {
    if !is_prime(modulus) {
        return Err(ParameterError::ModulusNotPrime(modulus));
    }
    if !is_valid_generator(generator, modulus) {
        return Err(ParameterError::GeneratorOutOfRange { generator, modulus });
    }
    Ok(())
}
