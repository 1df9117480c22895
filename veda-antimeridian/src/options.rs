/// Configuration of the antimeridian correction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixOptions {
    max_passes: usize,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self { max_passes: 32 }
    }
}

impl FixOptions {
    /// Sets the maximum number of clip-and-shift passes.
    ///
    /// Every pass brings the parts of the geometry lying outside of `[-180, 180]` one band of 360 degrees closer,
    /// so a polygon drawn across `n` copies of the world needs about `n + 1` passes. The default value is `32`.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Maximum number of clip-and-shift passes.
    pub fn max_passes(&self) -> usize {
        self.max_passes
    }
}
