//! Modulus and generator validation

/// Deterministic trial division.
///
/// After ruling out multiples of 2 and 3 only divisors of the form 6k ± 1
/// are tried, up to `sqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: i64 = 5;
    // i <= n / i is i * i <= n without the overflow
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// A generator must satisfy `1 < g < p`.
pub fn is_valid_generator(generator: i64, modulus: i64) -> bool {
    generator > 1 && generator < modulus
}
