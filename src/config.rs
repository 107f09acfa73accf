use crate::Rule;

/// Parameters of a simulation session.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rule: Rule,
    /// Side of the square window filled by `randomize`.
    pub field_size: u32,
    /// Probability of a cell in the window being alive.
    pub density: f64,
    /// Random seed (if `None`, then random seed is generated).
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rule: Rule::conway(),
            field_size: Self::FIELD_SIZE,
            density: Self::DENSITY,
            seed: None,
        }
    }
}

impl Config {
    pub const FIELD_SIZE: u32 = 64;
    pub const DENSITY: f64 = 0.3;

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
