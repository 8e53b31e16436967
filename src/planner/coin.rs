use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the veg/non-veg decision for the `both` diet preference.
///
/// Called once per meal slot, and only when the preference is `both`.
pub trait DietCoin {
    /// `true` selects non-veg items, `false` selects veg items.
    fn pick_nonveg(&mut self) -> bool;
}

/// Fair coin backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomCoin<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomCoin<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomCoin<StdRng> {
    /// Reproducible coin for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> DietCoin for RandomCoin<R> {
    fn pick_nonveg(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Coin that always lands the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCoin(pub bool);

impl DietCoin for FixedCoin {
    fn pick_nonveg(&mut self) -> bool {
        self.0
    }
}
