//! Modular exponentiation over 64-bit operands

/// Compute `base^exponent mod modulus` by square-and-multiply.
///
/// Returns 0 when `base <= 0` or `modulus <= 1`, and 1 for a non-positive
/// exponent. Products are formed in `i128`, so `(modulus - 1)^2` cannot wrap
/// for any `i64` modulus.
pub fn power_mod(base: i64, exponent: i64, modulus: i64) -> i64 {
    if base <= 0 || modulus <= 1 {
        return 0;
    }

    let m = i128::from(modulus);
    let mut base = i128::from(base) % m;
    let mut exponent = exponent;
    let mut result: i128 = 1;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exponent >>= 1;
    }

    // result < modulus, so it fits back into i64
    result as i64
}
