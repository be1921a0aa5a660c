//! Three-candle and series pattern predicates
//!
//! Star and soldier/crow predicates take `(c1, c2, c3)` oldest first.
//! Triple top/bottom operate on a caller-selected slice of exactly three
//! peak or valley candles and return an error for any other count - a
//! caller contract violation, not a recoverable runtime condition.

use crate::params::PatternParams;
use crate::{Bias, Candle, Pattern, PatternError, PatternResult, Result};

/// Morning star: bearish candle, small middle body, bullish candle closing
/// above the first body's midpoint.
pub fn is_morning_star(c1: &Candle, c2: &Candle, c3: &Candle, params: &PatternParams) -> bool {
  c1.is_bearish()
    && c2.body() <= params.star_body_ratio * c1.body()
    && c3.is_bullish()
    && c3.close > c1.body_midpoint()
}

/// Evening star: bullish candle, small middle body, bearish candle closing
/// below the first body's midpoint.
pub fn is_evening_star(c1: &Candle, c2: &Candle, c3: &Candle, params: &PatternParams) -> bool {
  c1.is_bullish()
    && c2.body() <= params.star_body_ratio * c1.body()
    && c3.is_bearish()
    && c3.close < c1.body_midpoint()
}

/// Three white soldiers: three bullish candles, solid first body, each
/// successive open inside the prior body.
pub fn is_three_white_soldiers(
  c1: &Candle,
  c2: &Candle,
  c3: &Candle,
  params: &PatternParams,
) -> bool {
  if !(c1.is_bullish() && c2.is_bullish() && c3.is_bullish()) {
    return false;
  }
  if c1.body() < params.soldier_body_ratio * c1.range() {
    return false;
  }
  c2.open > c1.open && c2.open < c1.close && c3.open > c2.open && c3.open < c2.close
}

/// Three black crows: mirror of the soldiers - three bearish candles, solid
/// first body, each successive open inside the prior body.
pub fn is_three_black_crows(c1: &Candle, c2: &Candle, c3: &Candle, params: &PatternParams) -> bool {
  if !(c1.is_bearish() && c2.is_bearish() && c3.is_bearish()) {
    return false;
  }
  if c1.body() < params.soldier_body_ratio * c1.range() {
    return false;
  }
  c2.open < c1.open && c2.open > c1.close && c3.open < c2.open && c3.open > c2.close
}

/// Triple top: three peak candles whose highs all lie within a fractional
/// tolerance of their mean. Flags a potential reversal zone; carries no
/// directional bias by itself.
///
/// Errors with [`PatternError::WrongCandleCount`] unless exactly three
/// candles are supplied.
pub fn is_triple_top(peaks: &[Candle], params: &PatternParams) -> Result<bool> {
  let highs = extremes(peaks, |c| c.high)?;
  Ok(within_tolerance(&highs, params.triple_tolerance))
}

/// Triple bottom: three valley candles whose lows all lie within a
/// fractional tolerance of their mean. Mirror of [`is_triple_top`].
pub fn is_triple_bottom(valleys: &[Candle], params: &PatternParams) -> Result<bool> {
  let lows = extremes(valleys, |c| c.low)?;
  Ok(within_tolerance(&lows, params.triple_tolerance))
}

fn extremes(candles: &[Candle], pick: impl Fn(&Candle) -> f64) -> Result<[f64; 3]> {
  match candles {
    [a, b, c] => Ok([pick(a), pick(b), pick(c)]),
    _ => Err(PatternError::WrongCandleCount {
      expected: 3,
      got: candles.len(),
    }),
  }
}

fn within_tolerance(values: &[f64; 3], tolerance: f64) -> bool {
  let mean = (values[0] + values[1] + values[2]) / 3.0;
  let tol = tolerance * mean;
  values.iter().all(|v| (v - mean).abs() <= tol)
}

/// Evaluate all three-candle patterns in precedence order, first match wins.
///
/// Order: morning star, evening star, three white soldiers, three black
/// crows, triple top, triple bottom.
pub fn evaluate_last_three(
  c1: &Candle,
  c2: &Candle,
  c3: &Candle,
  params: &PatternParams,
) -> PatternResult {
  if is_morning_star(c1, c2, c3, params) {
    return PatternResult::new(Pattern::MorningStar, Bias::Long);
  }
  if is_evening_star(c1, c2, c3, params) {
    return PatternResult::new(Pattern::EveningStar, Bias::Short);
  }
  if is_three_white_soldiers(c1, c2, c3, params) {
    return PatternResult::new(Pattern::ThreeWhiteSoldiers, Bias::Long);
  }
  if is_three_black_crows(c1, c2, c3, params) {
    return PatternResult::new(Pattern::ThreeBlackCrows, Bias::Short);
  }
  let window = [*c1, *c2, *c3];
  // Slice length is fixed at 3 here, so the count check cannot fail
  if is_triple_top(&window, params).unwrap_or(false) {
    return PatternResult::new(Pattern::TripleTop, Bias::Neutral);
  }
  if is_triple_bottom(&window, params).unwrap_or(false) {
    return PatternResult::new(Pattern::TripleBottom, Bias::Neutral);
  }
  PatternResult::neutral()
}
