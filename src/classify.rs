//! Classification entry point
//!
//! [`Classifier`] applies the fixed precedence order over a window of up to
//! three candles: single-candle patterns on the most recent candle, then
//! two-candle patterns on the last two, then three-candle patterns on all
//! three - first match wins, not best match. Several real-world windows
//! satisfy multiple predicates simultaneously and downstream behavior
//! depends on this fixed tie-break order.

use crate::params::PatternParams;
use crate::patterns::{evaluate_last_three, evaluate_last_two, evaluate_single};
use crate::{Candle, PatternError, PatternResult, Result};

/// Stateless pattern classifier holding a validated parameter set.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
  params: PatternParams,
}

impl Default for Classifier {
  fn default() -> Self {
    Self {
      params: PatternParams::default(),
    }
  }
}

impl Classifier {
  /// Create a classifier with custom thresholds. Fails if any parameter is
  /// out of its documented range.
  pub fn new(params: PatternParams) -> Result<Self> {
    params.validate()?;
    Ok(Self { params })
  }

  #[inline]
  pub fn params(&self) -> &PatternParams {
    &self.params
  }

  /// Evaluate single-candle patterns on one candle.
  #[inline]
  pub fn evaluate_single(&self, candle: &Candle) -> PatternResult {
    evaluate_single(candle, &self.params)
  }

  /// Evaluate two-candle patterns on `(prev, curr)`, oldest first.
  #[inline]
  pub fn evaluate_last_two(&self, prev: &Candle, curr: &Candle) -> PatternResult {
    evaluate_last_two(prev, curr, &self.params)
  }

  /// Evaluate three-candle patterns on `(c1, c2, c3)`, oldest first.
  #[inline]
  pub fn evaluate_last_three(&self, c1: &Candle, c2: &Candle, c3: &Candle) -> PatternResult {
    evaluate_last_three(c1, c2, c3, &self.params)
  }

  /// Classify a window of 1-3 consecutive candles, oldest first.
  ///
  /// Precedence: single-candle patterns on the most recent candle, then
  /// two-candle, then three-candle; the first match wins. If nothing
  /// matches, returns [`PatternResult::neutral`]. An empty or oversized
  /// window is a caller contract violation and fails with
  /// [`PatternError::InvalidWindow`].
  pub fn classify(&self, window: &[Candle]) -> Result<PatternResult> {
    if window.is_empty() || window.len() > 3 {
      return Err(PatternError::InvalidWindow { got: window.len() });
    }
    Ok(self.classify_window(window))
  }

  // Infallible inner path shared by classify and the series scan; the
  // window is guaranteed to hold 1-3 candles.
  fn classify_window(&self, window: &[Candle]) -> PatternResult {
    let last = &window[window.len() - 1];

    let single = self.evaluate_single(last);
    if single.is_match() {
      return single;
    }

    if window.len() >= 2 {
      let prev = &window[window.len() - 2];
      let two = self.evaluate_last_two(prev, last);
      if two.is_match() {
        return two;
      }
    }

    if window.len() == 3 {
      let three = self.evaluate_last_three(&window[0], &window[1], &window[2]);
      if three.is_match() {
        return three;
      }
    }

    PatternResult::neutral()
  }

  /// Classify every bar of a series using the up-to-3-candle trailing
  /// window ending at that bar. Returns one result per input candle.
  ///
  /// The caller owns the slice; nothing is fetched or buffered.
  pub fn classify_series(&self, candles: &[Candle]) -> Vec<PatternResult> {
    self.iter(candles).map(|(_, result)| result).collect()
  }

  /// Lazy iterator over `(index, PatternResult)` for each bar of a series.
  pub fn iter<'a>(&'a self, candles: &'a [Candle]) -> SeriesIter<'a> {
    SeriesIter {
      classifier: self,
      candles,
      current: 0,
    }
  }
}

/// Iterator over per-bar classifications of a candle series.
pub struct SeriesIter<'a> {
  classifier: &'a Classifier,
  candles: &'a [Candle],
  current: usize,
}

impl Iterator for SeriesIter<'_> {
  type Item = (usize, PatternResult);

  fn next(&mut self) -> Option<Self::Item> {
    if self.current >= self.candles.len() {
      return None;
    }

    let index = self.current;
    let start = index.saturating_sub(2);
    let result = self.classifier.classify_window(&self.candles[start..=index]);

    self.current += 1;
    Some((index, result))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.candles.len().saturating_sub(self.current);
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for SeriesIter<'_> {}
