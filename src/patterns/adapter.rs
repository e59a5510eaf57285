//! The adapter pattern: an integer-only legacy calculator is made to serve
//! the floating point [`Calculator`] interface.

use crate::ExclusiveOwner;

/// The interface clients expect.
pub trait Calculator {
    /// Returns `a + b`.
    fn add(&self, a: f64, b: f64) -> f64;
    /// Returns `a - b`.
    fn subtract(&self, a: f64, b: f64) -> f64;
}

/// A native [`Calculator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NewCalculator;

impl Calculator for NewCalculator {
    #[inline]
    fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    #[inline]
    fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }
}

/// The legacy calculator with an incompatible interface.
#[derive(Debug, Default, Clone, Copy)]
pub struct OldCalculator;

impl OldCalculator {
    /// Returns `a + b`, wrapping around at the bounds of `i32`.
    #[inline]
    pub fn sum(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Adapter
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Serves the [`Calculator`] interface with an owned [`OldCalculator`].
///
/// Operands are truncated toward zero (saturating at the bounds of `i32`)
/// before being handed to the legacy calculator, so results are always
/// integral. Results outside of the `i32` range wrap around.
#[derive(Debug)]
pub struct Adapter {
    old: ExclusiveOwner<OldCalculator>,
}

impl Adapter {
    /// Creates an adapter taking ownership of `old`.
    #[inline]
    pub fn new(old: ExclusiveOwner<OldCalculator>) -> Self {
        Self { old }
    }
}

impl Calculator for Adapter {
    #[inline]
    fn add(&self, a: f64, b: f64) -> f64 {
        f64::from(self.old.sum(a as i32, b as i32))
    }

    #[inline]
    fn subtract(&self, a: f64, b: f64) -> f64 {
        f64::from(self.old.sum(a as i32, (b as i32).wrapping_neg()))
    }
}
