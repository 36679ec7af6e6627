//! Points and offsets on the desktop plane

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point or displacement in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Wrap each component into `0..modulus`
    ///
    /// A zero modulus component disables wrapping on that axis.
    pub fn rem_euclid(self, modulus: Vec2) -> Vec2 {
        fn wrap(value: f32, m: f32) -> f32 {
            if m == 0.0 {
                value
            } else {
                value.rem_euclid(m)
            }
        }
        Vec2::new(wrap(self.x, modulus.x), wrap(self.y, modulus.y))
    }
}

macro_rules! componentwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Vec2 {
            type Output = Vec2;

            #[inline]
            fn $method(self, rhs: Vec2) -> Vec2 {
                Vec2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

componentwise!(Add, add, +);
componentwise!(Sub, sub, -);
