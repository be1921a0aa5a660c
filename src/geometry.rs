//! Derived candle geometry
//!
//! Body/wick/range quantities computed per call from a [`Candle`]; every
//! pattern predicate is expressed in terms of these primitives. All
//! functions are pure and never divide by zero.

use crate::Candle;

impl Candle {
  /// `|close - open|`
  #[inline]
  pub fn body(&self) -> f64 {
    (self.close - self.open).abs()
  }

  /// `high - low`
  #[inline]
  pub fn range(&self) -> f64 {
    self.high - self.low
  }

  /// `high - max(open, close)`
  #[inline]
  pub fn upper_wick(&self) -> f64 {
    self.high - self.open.max(self.close)
  }

  /// `min(open, close) - low`
  #[inline]
  pub fn lower_wick(&self) -> f64 {
    self.open.min(self.close) - self.low
  }

  #[inline]
  pub fn is_bullish(&self) -> bool {
    self.close > self.open
  }

  #[inline]
  pub fn is_bearish(&self) -> bool {
    self.close < self.open
  }

  /// Upper edge of the real body
  #[inline]
  pub fn body_high(&self) -> f64 {
    self.open.max(self.close)
  }

  /// Lower edge of the real body
  #[inline]
  pub fn body_low(&self) -> f64 {
    self.open.min(self.close)
  }

  /// Midpoint of the real body: `(open + close) / 2`
  #[inline]
  pub fn body_midpoint(&self) -> f64 {
    midpoint(self.open, self.close)
  }
}

/// `(a + b) / 2`
#[inline]
pub fn midpoint(a: f64, b: f64) -> f64 {
  (a + b) / 2.0
}

/// Safe division: `x / y`, resolving `y == 0` to `+infinity` so comparisons
/// against finite thresholds resolve deterministically to `false` instead of
/// raising.
#[inline]
pub fn ratio(x: f64, y: f64) -> f64 {
  if y == 0.0 {
    f64::INFINITY
  } else {
    x / y
  }
}
