//! Deterministic digit-string generation for benchmarking `verhoeff-core`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Input sizes used by the benchmarks, in digits.
#[derive(Debug, Clone, Copy)]
pub enum SizeTier {
    /// Short identifiers (account numbers, ticket ids).
    Small,
    /// Typical national id lengths.
    Medium,
    /// Long payloads, well past the permutation period.
    Large,
}

impl SizeTier {
    /// Payload length in digits.
    pub fn digits(self) -> usize {
        match self {
            Self::Small => 8,
            Self::Medium => 16,
            Self::Large => 1024,
        }
    }
}

/// Generates `count` random digit payloads of `len` digits each.
///
/// All randomness is seeded from `seed`, so the corpus is reproducible.
pub fn gen_payloads(seed: u64, count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..len).map(|_| rng.gen_range(b'0'..=b'9')).collect())
        .collect()
}

/// Generates `count` checksummed values (payload plus valid check digit).
///
/// Payloads come from [`gen_payloads`] and are all digits, so
/// `append_to_span` cannot fail; any payload it did reject is dropped.
pub fn gen_checksummed(seed: u64, count: usize, len: usize) -> Vec<Vec<u8>> {
    gen_payloads(seed, count, len)
        .iter()
        .filter_map(|p| verhoeff_core::append_to_span(p).ok())
        .collect()
}
