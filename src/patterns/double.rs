//! Two-candle pattern predicates
//!
//! Every predicate takes `(prev, curr)` in chronological order: `prev`
//! closed before `curr`.

use crate::params::PatternParams;
use crate::{Bias, Candle, Pattern, PatternResult};

/// Bullish engulfing: a bullish body fully covering the prior bearish body.
pub fn is_bullish_engulfing(prev: &Candle, curr: &Candle) -> bool {
  prev.is_bearish()
    && curr.is_bullish()
    && curr.open <= prev.close
    && curr.close >= prev.open
    && curr.body() > prev.body()
}

/// Bearish engulfing: a bearish body fully covering the prior bullish body.
pub fn is_bearish_engulfing(prev: &Candle, curr: &Candle) -> bool {
  prev.is_bullish()
    && curr.is_bearish()
    && curr.open >= prev.close
    && curr.close <= prev.open
    && curr.body() > prev.body()
}

/// Piercing pattern: bullish candle opening below the prior bearish close
/// and closing above the prior body midpoint.
pub fn is_piercing(prev: &Candle, curr: &Candle) -> bool {
  prev.is_bearish()
    && curr.is_bullish()
    && curr.open < prev.close
    && curr.close > prev.body_midpoint()
}

/// Dark cloud cover: bearish candle opening above the prior bullish close
/// and closing below the prior body midpoint.
pub fn is_dark_cloud_cover(prev: &Candle, curr: &Candle) -> bool {
  prev.is_bullish()
    && curr.is_bearish()
    && curr.open > prev.close
    && curr.close < prev.body_midpoint()
}

/// Tweezer bottoms: matching lows, bearish then bullish.
pub fn is_tweezer_bottoms(prev: &Candle, curr: &Candle, params: &PatternParams) -> bool {
  (prev.low - curr.low).abs() <= params.tweezer_tolerance
    && prev.is_bearish()
    && curr.is_bullish()
}

/// Tweezer tops: matching highs, bullish then bearish.
pub fn is_tweezer_tops(prev: &Candle, curr: &Candle, params: &PatternParams) -> bool {
  (prev.high - curr.high).abs() <= params.tweezer_tolerance
    && prev.is_bullish()
    && curr.is_bearish()
}

// Harami body containment: curr's full body inside prev's body, strictly
// smaller. Unsatisfiable when prev has a zero body, so the bullish/bearish
// split below never overlaps.
fn harami_contained(prev: &Candle, curr: &Candle) -> bool {
  prev.body_high() >= curr.body_high()
    && prev.body_low() <= curr.body_low()
    && curr.body() < prev.body()
}

/// Bullish harami: small body inside a prior bearish body.
pub fn is_bullish_harami(prev: &Candle, curr: &Candle) -> bool {
  prev.is_bearish() && harami_contained(prev, curr)
}

/// Bearish harami: small body inside a prior bullish body.
pub fn is_bearish_harami(prev: &Candle, curr: &Candle) -> bool {
  prev.is_bullish() && harami_contained(prev, curr)
}

/// Evaluate all two-candle patterns in precedence order, first match wins.
///
/// Order: bullish engulfing, bearish engulfing, piercing, dark cloud cover,
/// tweezer bottoms, tweezer tops, bullish harami, bearish harami.
pub fn evaluate_last_two(prev: &Candle, curr: &Candle, params: &PatternParams) -> PatternResult {
  if is_bullish_engulfing(prev, curr) {
    return PatternResult::new(Pattern::BullishEngulfing, Bias::Long);
  }
  if is_bearish_engulfing(prev, curr) {
    return PatternResult::new(Pattern::BearishEngulfing, Bias::Short);
  }
  if is_piercing(prev, curr) {
    return PatternResult::new(Pattern::Piercing, Bias::Long);
  }
  if is_dark_cloud_cover(prev, curr) {
    return PatternResult::new(Pattern::DarkCloudCover, Bias::Short);
  }
  if is_tweezer_bottoms(prev, curr, params) {
    return PatternResult::new(Pattern::TweezerBottoms, Bias::Long);
  }
  if is_tweezer_tops(prev, curr, params) {
    return PatternResult::new(Pattern::TweezerTops, Bias::Short);
  }
  if is_bullish_harami(prev, curr) {
    return PatternResult::new(Pattern::BullishHarami, Bias::Long);
  }
  if is_bearish_harami(prev, curr) {
    return PatternResult::new(Pattern::BearishHarami, Bias::Short);
  }
  PatternResult::neutral()
}
