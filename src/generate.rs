//! Random input generation
//!
//! Every element is drawn independently and uniformly from
//! [`VALUE_MIN`, `VALUE_MAX`].

use rand::Rng;

/// Smallest generated value
pub const VALUE_MIN: i32 = 1;

/// Largest generated value
pub const VALUE_MAX: i32 = 1000;

/// Generate `len` random values using a fresh thread-local source.
pub fn random_sequence(len: usize) -> Vec<i32> {
    random_sequence_with(&mut rand::thread_rng(), len)
}

/// Generate `len` random values drawn from `rng`.
pub fn random_sequence_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len)
        .map(|_| rng.gen_range(VALUE_MIN..=VALUE_MAX))
        .collect()
}
