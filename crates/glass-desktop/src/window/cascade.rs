//! Cascading spawn positions

use crate::config::CascadeConfig;
use crate::math::Vec2;

/// Wrapping diagonal offset for newly launched windows
///
/// Each call to [`next`](Self::next) advances the running offset by `step`,
/// wraps each component by `modulus`, and returns `origin + offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnCascade {
    origin: Vec2,
    offset: Vec2,
    step: Vec2,
    modulus: Vec2,
}

impl Default for SpawnCascade {
    fn default() -> Self {
        Self::new(&CascadeConfig::default())
    }
}

impl SpawnCascade {
    pub fn new(config: &CascadeConfig) -> Self {
        Self {
            origin: config.origin,
            offset: config.initial_offset,
            step: config.step,
            modulus: config.modulus,
        }
    }

    /// Current running offset
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Advance and return the next spawn position
    pub fn next(&mut self) -> Vec2 {
        self.offset = (self.offset + self.step).rem_euclid(self.modulus);
        self.origin + self.offset
    }
}
