//! # Candela - candlestick pattern recognition
//!
//! Stateless geometric predicates over one, two or three consecutive OHLC
//! candles, producing a pattern label and a directional bias.
//!
//! ## Quick Start
//!
//! ```rust
//! use candela::prelude::*;
//!
//! let classifier = Classifier::default();
//!
//! // A hammer: tiny body at the top of a long lower wick
//! let window = vec![Candle::new(1.1050, 1.1051, 1.1020, 1.1051)];
//!
//! let result = classifier.classify(&window).unwrap();
//! assert_eq!(result.pattern, Some(Pattern::Hammer));
//! assert_eq!(result.bias, Bias::Long);
//! ```
//!
//! The library never fetches or buffers candles itself: the caller supplies
//! closed, historical bars (oldest first) and consumes the returned
//! [`PatternResult`]. Every predicate is a deterministic, side-effect-free
//! computation with O(1) cost.

pub mod classify;
pub mod geometry;
pub mod params;
pub mod patterns;

pub mod prelude {
  pub use crate::{
    classify::{Classifier, SeriesIter},
    geometry::{midpoint, ratio},
    params::PatternParams,
    patterns::{double, single, triple},
    Bias, Candle, Pattern, PatternError, PatternResult, Result,
  };
}

// ============================================================
// ERRORS
// ============================================================

pub type Result<T> = std::result::Result<T, PatternError>;

/// Errors that can occur during pattern evaluation
#[derive(Debug, Clone, thiserror::Error)]
pub enum PatternError {
  #[error("Invalid value: {0}")]
  InvalidValue(&'static str),

  #[error("{field} = {value} out of range [{min}, {max}]")]
  OutOfRange {
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
  },

  #[error("Invalid window: expected 1 to 3 candles, got {got}")]
  InvalidWindow { got: usize },

  #[error("Expected exactly {expected} candles, got {got}")]
  WrongCandleCount { expected: usize, got: usize },

  #[error("Invalid candle: {reason}")]
  InvalidCandle { reason: &'static str },
}

// ============================================================
// CANDLE
// ============================================================

/// One closed OHLC price bar for a fixed timeframe.
///
/// Invariants: `high >= max(open, close)`, `low <= min(open, close)`,
/// `high >= low`. The constructor asserts them in debug builds; release
/// builds skip validation for performance and candles violating the
/// invariant yield undefined geometric results. Callers that want runtime
/// checking use [`Candle::validate`].
///
/// The in-progress bar must never be passed to the pattern predicates.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Candle {
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub close: f64,
  /// Unix timestamp of the bar open. Not used by any predicate.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time: Option<i64>,
}

impl Candle {
  pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
    debug_assert!(high >= open.max(close), "high < max(open, close)");
    debug_assert!(low <= open.min(close), "low > min(open, close)");
    Self {
      open,
      high,
      low,
      close,
      time: None,
    }
  }

  pub fn with_time(open: f64, high: f64, low: f64, close: f64, time: i64) -> Self {
    Self {
      time: Some(time),
      ..Self::new(open, high, low, close)
    }
  }

  /// Runtime OHLC consistency check for callers ingesting untrusted data.
  pub fn validate(&self) -> Result<()> {
    if self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan() {
      return Err(PatternError::InvalidCandle {
        reason: "NaN in OHLC",
      });
    }
    if self.open.is_infinite()
      || self.high.is_infinite()
      || self.low.is_infinite()
      || self.close.is_infinite()
    {
      return Err(PatternError::InvalidCandle {
        reason: "infinite value in OHLC",
      });
    }
    if self.high < self.low {
      return Err(PatternError::InvalidCandle {
        reason: "high < low",
      });
    }
    if self.high < self.open.max(self.close) {
      return Err(PatternError::InvalidCandle {
        reason: "high < max(open, close)",
      });
    }
    if self.low > self.open.min(self.close) {
      return Err(PatternError::InvalidCandle {
        reason: "low > min(open, close)",
      });
    }
    Ok(())
  }
}

// ============================================================
// PATTERN LABELS
// ============================================================

/// Directional bias implied by a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bias {
  Long,
  Short,
  Neutral,
}

impl Bias {
  #[inline]
  pub fn is_long(self) -> bool {
    matches!(self, Bias::Long)
  }

  #[inline]
  pub fn is_short(self) -> bool {
    matches!(self, Bias::Short)
  }

  #[inline]
  pub fn is_neutral(self) -> bool {
    matches!(self, Bias::Neutral)
  }
}

/// Closed enumeration of recognized candlestick patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pattern {
  // Single-candle
  Hammer,
  InvertedHammer,
  ShootingStar,
  HangingMan,
  Marubozu,
  Doji,
  SpinningTop,
  // Two-candle
  BullishEngulfing,
  BearishEngulfing,
  // Renamed variants keep the serialized form in sync with `as_str`
  #[serde(rename = "PIERCING_PATTERN")]
  Piercing,
  DarkCloudCover,
  TweezerBottoms,
  TweezerTops,
  #[serde(rename = "HARAMI_BULLISH")]
  BullishHarami,
  #[serde(rename = "HARAMI_BEARISH")]
  BearishHarami,
  // Three-candle and series
  MorningStar,
  EveningStar,
  ThreeWhiteSoldiers,
  ThreeBlackCrows,
  TripleTop,
  TripleBottom,
}

impl Pattern {
  /// Stable string identifier for logs and serialized output
  pub fn as_str(&self) -> &'static str {
    match self {
      Pattern::Hammer => "HAMMER",
      Pattern::InvertedHammer => "INVERTED_HAMMER",
      Pattern::ShootingStar => "SHOOTING_STAR",
      Pattern::HangingMan => "HANGING_MAN",
      Pattern::Marubozu => "MARUBOZU",
      Pattern::Doji => "DOJI",
      Pattern::SpinningTop => "SPINNING_TOP",
      Pattern::BullishEngulfing => "BULLISH_ENGULFING",
      Pattern::BearishEngulfing => "BEARISH_ENGULFING",
      Pattern::Piercing => "PIERCING_PATTERN",
      Pattern::DarkCloudCover => "DARK_CLOUD_COVER",
      Pattern::TweezerBottoms => "TWEEZER_BOTTOMS",
      Pattern::TweezerTops => "TWEEZER_TOPS",
      Pattern::BullishHarami => "HARAMI_BULLISH",
      Pattern::BearishHarami => "HARAMI_BEARISH",
      Pattern::MorningStar => "MORNING_STAR",
      Pattern::EveningStar => "EVENING_STAR",
      Pattern::ThreeWhiteSoldiers => "THREE_WHITE_SOLDIERS",
      Pattern::ThreeBlackCrows => "THREE_BLACK_CROWS",
      Pattern::TripleTop => "TRIPLE_TOP",
      Pattern::TripleBottom => "TRIPLE_BOTTOM",
    }
  }

  /// Returns the typical bias of this pattern.
  ///
  /// - `Some(Bias::Long)` - bottom-reversal / continuation-up signal
  /// - `Some(Bias::Short)` - top-reversal / continuation-down signal
  /// - `Some(Bias::Neutral)` - indecision or confirming filter
  /// - `None` - bidirectional; the bias follows the candle itself
  ///   (marubozu: bullish candle signals LONG, bearish SHORT)
  pub fn bias(&self) -> Option<Bias> {
    match self {
      Pattern::Hammer
      | Pattern::InvertedHammer
      | Pattern::BullishEngulfing
      | Pattern::Piercing
      | Pattern::TweezerBottoms
      | Pattern::BullishHarami
      | Pattern::MorningStar
      | Pattern::ThreeWhiteSoldiers => Some(Bias::Long),
      Pattern::ShootingStar
      | Pattern::HangingMan
      | Pattern::BearishEngulfing
      | Pattern::DarkCloudCover
      | Pattern::TweezerTops
      | Pattern::BearishHarami
      | Pattern::EveningStar
      | Pattern::ThreeBlackCrows => Some(Bias::Short),
      Pattern::Doji | Pattern::SpinningTop | Pattern::TripleTop | Pattern::TripleBottom => {
        Some(Bias::Neutral)
      }
      Pattern::Marubozu => None,
    }
  }

  /// Number of candles this pattern is evaluated over
  pub fn candle_count(&self) -> usize {
    match self {
      Pattern::Hammer
      | Pattern::InvertedHammer
      | Pattern::ShootingStar
      | Pattern::HangingMan
      | Pattern::Marubozu
      | Pattern::Doji
      | Pattern::SpinningTop => 1,
      Pattern::BullishEngulfing
      | Pattern::BearishEngulfing
      | Pattern::Piercing
      | Pattern::DarkCloudCover
      | Pattern::TweezerBottoms
      | Pattern::TweezerTops
      | Pattern::BullishHarami
      | Pattern::BearishHarami => 2,
      Pattern::MorningStar
      | Pattern::EveningStar
      | Pattern::ThreeWhiteSoldiers
      | Pattern::ThreeBlackCrows
      | Pattern::TripleTop
      | Pattern::TripleBottom => 3,
    }
  }
}

impl std::fmt::Display for Pattern {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ============================================================
// PATTERN RESULT - produced per evaluation (Copy, no allocations)
// ============================================================

/// Result of one classification: matched label (if any) plus bias
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PatternResult {
  pub pattern: Option<Pattern>,
  pub bias: Bias,
}

impl PatternResult {
  /// No pattern matched
  #[inline]
  pub const fn neutral() -> Self {
    Self {
      pattern: None,
      bias: Bias::Neutral,
    }
  }

  #[inline]
  pub const fn new(pattern: Pattern, bias: Bias) -> Self {
    Self {
      pattern: Some(pattern),
      bias,
    }
  }

  #[inline]
  pub fn is_match(&self) -> bool {
    self.pattern.is_some()
  }
}

impl Default for PatternResult {
  fn default() -> Self {
    Self::neutral()
  }
}

// ============================================================
// TESTS
// ============================================================

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_candle_validate_ok() {
    let c = Candle::new(100.0, 110.0, 90.0, 105.0);
    assert!(c.validate().is_ok());
  }

  #[test]
  fn test_candle_validate_nan() {
    let c = Candle {
      open: f64::NAN,
      high: 110.0,
      low: 90.0,
      close: 105.0,
      time: None,
    };
    assert!(c.validate().is_err());
  }

  #[test]
  fn test_candle_validate_high_below_body() {
    let c = Candle {
      open: 100.0,
      high: 99.0,
      low: 90.0,
      close: 95.0,
      time: None,
    };
    assert!(matches!(
      c.validate(),
      Err(PatternError::InvalidCandle { .. })
    ));
  }

  #[test]
  fn test_candle_with_time() {
    let c = Candle::with_time(1.0, 2.0, 0.5, 1.5, 1_700_000_000);
    assert_eq!(c.time, Some(1_700_000_000));
  }

  #[test]
  fn test_pattern_bias_table() {
    assert_eq!(Pattern::Hammer.bias(), Some(Bias::Long));
    assert_eq!(Pattern::ShootingStar.bias(), Some(Bias::Short));
    assert_eq!(Pattern::Doji.bias(), Some(Bias::Neutral));
    assert_eq!(Pattern::Marubozu.bias(), None);
  }

  #[test]
  fn test_pattern_candle_count() {
    assert_eq!(Pattern::Doji.candle_count(), 1);
    assert_eq!(Pattern::BullishHarami.candle_count(), 2);
    assert_eq!(Pattern::TripleBottom.candle_count(), 3);
  }

  #[test]
  fn test_pattern_display() {
    assert_eq!(Pattern::DarkCloudCover.to_string(), "DARK_CLOUD_COVER");
    assert_eq!(Pattern::BearishHarami.to_string(), "HARAMI_BEARISH");
  }

  #[test]
  fn test_result_neutral() {
    let r = PatternResult::neutral();
    assert!(!r.is_match());
    assert_eq!(r.bias, Bias::Neutral);
    assert_eq!(r, PatternResult::default());
  }

  #[test]
  fn test_bias_predicates() {
    assert!(Bias::Long.is_long());
    assert!(Bias::Short.is_short());
    assert!(Bias::Neutral.is_neutral());
    assert!(!Bias::Long.is_short());
  }
}
