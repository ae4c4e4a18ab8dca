use crate::error::InvalidInput;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `len` integers drawn uniformly from the inclusive range `[min, max]`.
pub fn random_values<R: Rng>(
    rng: &mut R,
    len: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>, InvalidInput> {
    if min > max {
        return Err(InvalidInput::EmptyRange { min, max });
    }

    log::debug!("Generating {} values in [{}, {}]", len, min, max);
    Ok((0..len).map(|_| rng.gen_range(min..=max)).collect())
}

/// Deterministic when `seed` is given, entropy-seeded otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
