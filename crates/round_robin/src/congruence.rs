//! Congruence modulo `m`, the only arithmetic the scheduler relies on

/// Whether `a ≡ b (mod modulus)`, i.e. both leave the same remainder.
///
/// This is not the same as `a % modulus == b`. The two agree only while
/// `b < modulus`; in the final round `r == n - 1` the shortcut never matches.
///
/// `modulus` must be non-zero.
pub fn is_congruent_modulo(a: u64, b: u64, modulus: u64) -> bool {
    a % modulus == b % modulus
}

#[cfg(test)]
#[path = "congruence_tests.rs"]
mod congruence_tests;
