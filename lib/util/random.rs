use derive_more::DebugCustom;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::instrument;

/// A dynamically dispatched wrapper for any type that implements [`rand::RngCore`].
#[derive(DebugCustom)]
#[debug(fmt = "Random")]
pub struct Random(Box<dyn RngCore + Send + 'static>);

impl Random {
    /// Constructs [`Random`] from any type that implements [`rand::RngCore`].
    pub fn new<R: RngCore + Send + 'static>(rng: R) -> Self {
        Random(Box::new(rng))
    }

    /// Constructs [`Random`] from a [`rand::rngs::StdRng`] with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Random::new(StdRng::seed_from_u64(seed))
    }

    /// Picks an index uniformly at random in the range `(0..n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[instrument(level = "trace", ret)]
    pub fn index(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }
}

/// Initializes a [`rand::rngs::StdRng`] seeded by [system entropy].
///
/// [system entropy]: rand::rngs::StdRng::from_entropy
impl Default for Random {
    fn default() -> Self {
        Random::new(StdRng::from_entropy())
    }
}
