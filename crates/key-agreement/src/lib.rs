//! Key Agreement - toy finite-field Diffie-Hellman with an XOR transform
//!
//! Two parties share a prime modulus `p` and generator `g`, exchange
//! `g^x mod p`, derive the same secret, and mask messages with its low byte.
//! Operands are 64-bit; this is a teaching implementation, not a secure one.

mod arith;
mod cipher;
mod config;
mod error;
mod exchange;
mod party;
mod primality;

pub use arith::*;
pub use cipher::*;
pub use config::*;
pub use error::*;
pub use exchange::*;
pub use party::*;
pub use primality::*;

/// Default upper bound for any generator, modulus or exponent
pub const DEFAULT_MAX_VALUE: i64 = 1_000_000;
