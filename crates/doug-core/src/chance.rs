use rand::Rng;

/// Independent per-tick trigger with a fixed probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chance {
    probability: f64,
}

impl Chance {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Fires when a uniform sample in `[0, 1)` lands above `1 - p`.
    #[inline]
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        self.hits(rng.gen::<f64>())
    }

    #[inline]
    pub fn hits(&self, sample: f64) -> bool {
        sample > 1.0 - self.probability
    }
}
