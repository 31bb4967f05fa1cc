/// A closed range of ray parameters or channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// The `[0, 1]` range used for displayable color channels.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    ///
    /// NaN is never contained.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is within (min, max]: the lower bound is excluded.
    pub fn contains_above_min(&self, x: f32) -> bool {
        self.min < x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}
