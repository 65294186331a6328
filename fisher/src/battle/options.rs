use fisher_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// Options that change how the battle engine itself behaves.
pub struct BattleEngineOptions {
    /// Seed for the battle's random number generator.
    ///
    /// Battles created with the same seed and the same inputs replay identically.
    pub seed: Option<u64>,

    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl BattleEngineOptions {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            rng_factory: |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed)),
        }
    }
}
