//! Single-byte XOR transform keyed by the agreed secret
//!
//! Not a real cipher: every byte is masked with the same value, so one known
//! plaintext byte recovers the key.

use crate::{KeyAgreementError, KeyResult};

/// The XOR mask derived from a shared secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyByte(u8);

impl KeyByte {
    /// Take the low 8 bits of `secret`. Higher bits are discarded; secrets
    /// that differ only above bit 7 yield the same mask.
    pub fn from_secret(secret: i64) -> Self {
        Self((secret & 0xff) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for KeyByte {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

/// XOR every byte of `bytes` with `key_byte`.
///
/// Fails if no key has been established or `bytes` is empty.
pub fn transform(bytes: &[u8], key_byte: u8, key_established: bool) -> KeyResult<Vec<u8>> {
    if !key_established {
        return Err(KeyAgreementError::KeyNotEstablished);
    }
    if bytes.is_empty() {
        return Err(KeyAgreementError::EmptyInput);
    }
    Ok(bytes.iter().map(|b| b ^ key_byte).collect())
}

pub fn encrypt(plaintext: &[u8], key: KeyByte) -> KeyResult<Vec<u8>> {
    transform(plaintext, key.get(), true)
}

/// Same operation as [`encrypt`]; XOR is its own inverse
pub fn decrypt(ciphertext: &[u8], key: KeyByte) -> KeyResult<Vec<u8>> {
    transform(ciphertext, key.get(), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_known_vector() {
        let key = KeyByte::from_secret(2);
        assert_eq!(encrypt(b"HI", key).unwrap(), vec![0x4a, 0x4b]);
        assert_eq!(decrypt(&[0x4a, 0x4b], key).unwrap(), b"HI".to_vec());
    }

    #[test]
    fn test_low_byte_truncation() {
        assert_eq!(KeyByte::from_secret(0x1ff).get(), 0xff);
        assert_eq!(KeyByte::from_secret(256).get(), 0);
        assert_eq!(KeyByte::from_secret(999_983).get(), (999_983 % 256) as u8);
    }

    #[test]
    fn test_involution_all_keys() {
        let mut rng = StdRng::seed_from_u64(7);
        for key in 0..=u8::MAX {
            let len = rng.gen_range(1..64);
            let message: Vec<u8> = (0..len).map(|_| rng.r#gen()).collect();
            let key = KeyByte::from(key);
            let ciphertext = encrypt(&message, key).unwrap();
            assert_eq!(decrypt(&ciphertext, key).unwrap(), message);
        }
    }

    #[test]
    fn test_preconditions() {
        assert_eq!(
            transform(b"data", 2, false),
            Err(KeyAgreementError::KeyNotEstablished)
        );
        assert_eq!(transform(b"", 2, true), Err(KeyAgreementError::EmptyInput));
        assert_eq!(
            encrypt(b"", KeyByte::from(9)),
            Err(KeyAgreementError::EmptyInput)
        );
        // unset key is reported before empty input
        assert_eq!(transform(b"", 2, false), Err(KeyAgreementError::KeyNotEstablished));
    }
}
