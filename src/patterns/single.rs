//! Single-candle pattern predicates
//!
//! All predicates share the degenerate-candle guard: a zero range (and a
//! zero body, where the thresholds are body-relative) returns `false`
//! rather than dividing by zero or matching a flat bar.

use crate::geometry::ratio;
use crate::params::PatternParams;
use crate::{Bias, Candle, Pattern, PatternResult};

/// Doji: negligible body relative to range. Indecision, neutral bias.
pub fn is_doji(c: &Candle, params: &PatternParams) -> bool {
  let range = c.range();
  if range == 0.0 {
    return false;
  }
  c.body() <= params.doji_tolerance * range
}

/// Spinning top: small body with meaningful wicks on both sides. Neutral.
pub fn is_spinning_top(c: &Candle, params: &PatternParams) -> bool {
  let range = c.range();
  if range == 0.0 {
    return false;
  }
  c.body() <= params.spinning_top_body * range
    && c.upper_wick() > params.spinning_top_wick * range
    && c.lower_wick() > params.spinning_top_wick * range
}

/// Marubozu: body spans (nearly) the full range, negligible wicks.
/// Bias follows the candle direction.
pub fn is_marubozu(c: &Candle, params: &PatternParams) -> bool {
  let range = c.range();
  if range == 0.0 {
    return false;
  }
  c.upper_wick() <= params.marubozu_wick_tolerance * range
    && c.lower_wick() <= params.marubozu_wick_tolerance * range
    && c.body() >= params.marubozu_body * range
}

/// Hammer: long lower wick, tiny upper wick, body pinned to the top of the
/// range. Bottom-reversal signal, bias LONG.
pub fn is_hammer(c: &Candle, params: &PatternParams) -> bool {
  let body = c.body();
  let range = c.range();
  if body == 0.0 || range == 0.0 {
    return false;
  }
  if c.lower_wick() < params.wick_body_ratio * body {
    return false;
  }
  if c.upper_wick() > params.opposite_wick_ratio * body {
    return false;
  }
  // Body must sit in the top of the range
  c.high - c.body_high() <= params.body_position_tolerance * range
}

/// Inverted hammer: long upper wick, tiny lower wick, body pinned to the
/// bottom of the range. Despite the upper wick this is a bottom-reversal
/// signal, bias LONG.
pub fn is_inverted_hammer(c: &Candle, params: &PatternParams) -> bool {
  let body = c.body();
  let range = c.range();
  if body == 0.0 || range == 0.0 {
    return false;
  }
  if c.upper_wick() < params.wick_body_ratio * body {
    return false;
  }
  if c.lower_wick() > params.opposite_wick_ratio * body {
    return false;
  }
  c.body_low() - c.low <= params.body_position_tolerance * range
}

/// Hanging man: hammer geometry appearing with open/close sitting high
/// relative to the low. Top-reversal signal, bias SHORT.
pub fn is_hanging_man(c: &Candle, params: &PatternParams) -> bool {
  let body = c.body();
  let range = c.range();
  if body == 0.0 || range == 0.0 {
    return false;
  }
  c.lower_wick() >= params.wick_body_ratio * body
    && c.upper_wick() <= params.opposite_wick_ratio * body
    && ratio(c.body_high(), c.low) > params.hanging_man_level
}

/// Shooting star: dominant upper wick, tiny lower wick. Bias SHORT.
pub fn is_shooting_star(c: &Candle, params: &PatternParams) -> bool {
  let body = c.body();
  let range = c.range();
  if body == 0.0 || range == 0.0 {
    return false;
  }
  let uw = c.upper_wick();
  let lw = c.lower_wick();
  uw >= params.wick_body_ratio * body && lw <= params.opposite_wick_ratio * body && uw > lw
}

/// Evaluate all single-candle patterns in precedence order, first match wins.
///
/// Order: hammer, shooting star, inverted hammer, hanging man, marubozu,
/// doji, spinning top. More specific shapes run before more general ones;
/// shooting star outranks inverted hammer because the two geometries overlap
/// almost entirely at the default thresholds and their biases disagree.
pub fn evaluate_single(c: &Candle, params: &PatternParams) -> PatternResult {
  if is_hammer(c, params) {
    return PatternResult::new(Pattern::Hammer, Bias::Long);
  }
  if is_shooting_star(c, params) {
    return PatternResult::new(Pattern::ShootingStar, Bias::Short);
  }
  if is_inverted_hammer(c, params) {
    return PatternResult::new(Pattern::InvertedHammer, Bias::Long);
  }
  if is_hanging_man(c, params) {
    return PatternResult::new(Pattern::HangingMan, Bias::Short);
  }
  if is_marubozu(c, params) {
    let bias = if c.is_bullish() { Bias::Long } else { Bias::Short };
    return PatternResult::new(Pattern::Marubozu, bias);
  }
  if is_doji(c, params) {
    return PatternResult::new(Pattern::Doji, Bias::Neutral);
  }
  if is_spinning_top(c, params) {
    return PatternResult::new(Pattern::SpinningTop, Bias::Neutral);
  }
  PatternResult::neutral()
}
