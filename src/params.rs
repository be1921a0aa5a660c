//! Threshold parameters for pattern predicates
//!
//! Every magic number used by a predicate lives here, with the defaults the
//! predicates were tuned for. Callers can deserialize a `PatternParams` from
//! config, tweak fields, and validate before use.

use crate::{PatternError, Result};

/// Tunable thresholds for all pattern predicates.
///
/// Fields are plain `f64` ratios; [`PatternParams::validate`] enforces the
/// documented ranges. A default-constructed value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PatternParams {
  /// Doji: body <= tolerance * range
  pub doji_tolerance: f64,
  /// Spinning top: body <= tolerance * range
  pub spinning_top_body: f64,
  /// Spinning top: both wicks > tolerance * range
  pub spinning_top_wick: f64,
  /// Marubozu: both wicks <= tolerance * range
  pub marubozu_wick_tolerance: f64,
  /// Marubozu: body >= tolerance * range
  pub marubozu_body: f64,
  /// Hammer family / shooting star: dominant wick >= ratio * body
  pub wick_body_ratio: f64,
  /// Hammer family / shooting star: opposite wick <= ratio * body
  pub opposite_wick_ratio: f64,
  /// Hammer / inverted hammer: body edge within tolerance * range of the
  /// relevant range extreme
  pub body_position_tolerance: f64,
  /// Hanging man: max(open, close) / low must exceed this level
  pub hanging_man_level: f64,
  /// Morning / evening star: middle body <= ratio * first body
  pub star_body_ratio: f64,
  /// Soldiers / crows: first body >= ratio * first range
  pub soldier_body_ratio: f64,
  /// Tweezers: absolute low/high difference tolerance (price units)
  pub tweezer_tolerance: f64,
  /// Triple top/bottom: max deviation from mean as a fraction of the mean
  pub triple_tolerance: f64,
}

impl Default for PatternParams {
  fn default() -> Self {
    Self {
      doji_tolerance: 0.12,
      spinning_top_body: 0.35,
      spinning_top_wick: 0.2,
      marubozu_wick_tolerance: 0.001,
      marubozu_body: 0.98,
      wick_body_ratio: 2.5,
      opposite_wick_ratio: 0.2,
      body_position_tolerance: 0.15,
      hanging_man_level: 0.6,
      star_body_ratio: 0.6,
      soldier_body_ratio: 0.4,
      tweezer_tolerance: 1e-5,
      triple_tolerance: 0.002,
    }
  }
}

impl PatternParams {
  /// Validate all fields against their documented ranges.
  pub fn validate(&self) -> Result<()> {
    let fractional: [(&'static str, f64); 8] = [
      ("doji_tolerance", self.doji_tolerance),
      ("spinning_top_body", self.spinning_top_body),
      ("spinning_top_wick", self.spinning_top_wick),
      ("marubozu_wick_tolerance", self.marubozu_wick_tolerance),
      ("marubozu_body", self.marubozu_body),
      ("body_position_tolerance", self.body_position_tolerance),
      ("star_body_ratio", self.star_body_ratio),
      ("soldier_body_ratio", self.soldier_body_ratio),
    ];
    for (field, value) in fractional {
      Self::check_range(field, value, 0.0, 1.0)?;
    }

    // Wick dominance ratios may exceed 1.0 (default 2.5)
    Self::check_range("wick_body_ratio", self.wick_body_ratio, 0.0, 100.0)?;
    Self::check_range("opposite_wick_ratio", self.opposite_wick_ratio, 0.0, 100.0)?;
    Self::check_range("hanging_man_level", self.hanging_man_level, 0.0, 100.0)?;

    // Absolute price tolerances: non-negative, finite
    Self::check_range("tweezer_tolerance", self.tweezer_tolerance, 0.0, f64::MAX)?;
    Self::check_range("triple_tolerance", self.triple_tolerance, 0.0, 1.0)?;

    // Doji must stay below the marubozu body threshold so the two labels
    // remain mutually exclusive on any nonzero-range candle.
    if self.doji_tolerance >= self.marubozu_body {
      return Err(PatternError::InvalidValue(
        "doji_tolerance must be < marubozu_body",
      ));
    }

    Ok(())
  }

  fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_nan() || value.is_infinite() {
      return Err(PatternError::InvalidValue(
        "parameter cannot be NaN or infinite",
      ));
    }
    if value < min || value > max {
      return Err(PatternError::OutOfRange {
        field,
        value,
        min,
        max,
      });
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_are_valid() {
    assert!(PatternParams::default().validate().is_ok());
  }

  #[test]
  fn test_rejects_out_of_range() {
    let params = PatternParams {
      doji_tolerance: 1.5,
      ..Default::default()
    };
    assert!(matches!(
      params.validate(),
      Err(PatternError::OutOfRange {
        field: "doji_tolerance",
        ..
      })
    ));
  }

  #[test]
  fn test_rejects_nan() {
    let params = PatternParams {
      wick_body_ratio: f64::NAN,
      ..Default::default()
    };
    assert!(matches!(
      params.validate(),
      Err(PatternError::InvalidValue(_))
    ));
  }

  #[test]
  fn test_rejects_doji_marubozu_overlap() {
    let params = PatternParams {
      doji_tolerance: 0.99,
      marubozu_body: 0.98,
      ..Default::default()
    };
    assert!(params.validate().is_err());
  }

  #[test]
  fn test_negative_tolerance_rejected() {
    let params = PatternParams {
      tweezer_tolerance: -1e-5,
      ..Default::default()
    };
    assert!(params.validate().is_err());
  }

  #[test]
  fn test_serde_defaults_fill_missing_fields() {
    let params: PatternParams = serde_json::from_str(r#"{"doji_tolerance": 0.1}"#).unwrap();
    assert_eq!(params.doji_tolerance, 0.1);
    assert_eq!(params.wick_body_ratio, 2.5);
    assert!(params.validate().is_ok());
  }
}
