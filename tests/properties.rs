//! Property tests for the pattern predicates and the classifier.
//!
//! These pin down the contract-level guarantees: degenerate candles never
//! match, mutually exclusive labels stay exclusive, classification is pure
//! and its bias always agrees with the matched label.

use candela::prelude::*;
use proptest::prelude::*;

/// Strategy producing a valid candle: body endpoints plus non-negative
/// wicks, so the OHLC invariant holds by construction.
fn arb_candle() -> impl Strategy<Value = Candle> {
  (
    0.5f64..2.0,     // open
    0.0f64..0.02,    // signed body magnitude
    any::<bool>(),   // direction
    0.0f64..0.02,    // upper wick
    0.0f64..0.02,    // lower wick
  )
    .prop_map(|(open, body, bullish, uw, lw)| {
      let close = if bullish { open + body } else { open - body };
      let high = open.max(close) + uw;
      let low = open.min(close) - lw;
      Candle::new(open, high, low, close)
    })
}

fn arb_window() -> impl Strategy<Value = Vec<Candle>> {
  proptest::collection::vec(arb_candle(), 1..=3)
}

proptest! {
  #[test]
  fn zero_range_candles_never_match(price in 0.5f64..2.0) {
    let c = Candle::new(price, price, price, price);
    let params = PatternParams::default();

    prop_assert!(!single::is_doji(&c, &params));
    prop_assert!(!single::is_spinning_top(&c, &params));
    prop_assert!(!single::is_marubozu(&c, &params));
    prop_assert!(!single::is_hammer(&c, &params));
    prop_assert!(!single::is_inverted_hammer(&c, &params));
    prop_assert!(!single::is_hanging_man(&c, &params));
    prop_assert!(!single::is_shooting_star(&c, &params));

    let result = Classifier::default().classify(&[c]).unwrap();
    prop_assert_eq!(result, PatternResult::neutral());
  }

  #[test]
  fn marubozu_and_doji_are_exclusive(c in arb_candle()) {
    let params = PatternParams::default();
    if single::is_marubozu(&c, &params) {
      prop_assert!(!single::is_doji(&c, &params));
    }
  }

  #[test]
  fn engulfings_are_exclusive(prev in arb_candle(), curr in arb_candle()) {
    let bullish = double::is_bullish_engulfing(&prev, &curr);
    let bearish = double::is_bearish_engulfing(&prev, &curr);
    prop_assert!(!(bullish && bearish));
  }

  #[test]
  fn haramis_are_exclusive(prev in arb_candle(), curr in arb_candle()) {
    let bullish = double::is_bullish_harami(&prev, &curr);
    let bearish = double::is_bearish_harami(&prev, &curr);
    prop_assert!(!(bullish && bearish));
  }

  #[test]
  fn classify_is_pure(window in arb_window()) {
    let classifier = Classifier::default();
    let copy = window.clone();

    let first = classifier.classify(&window).unwrap();
    let second = classifier.classify(&window).unwrap();

    prop_assert_eq!(first, second);
    prop_assert_eq!(window, copy);
  }

  #[test]
  fn classify_bias_agrees_with_label(window in arb_window()) {
    let result = Classifier::default().classify(&window).unwrap();
    match result.pattern {
      Some(pattern) => match pattern.bias() {
        // Bidirectional patterns follow the candle itself
        None => prop_assert!(result.bias.is_long() || result.bias.is_short()),
        Some(bias) => prop_assert_eq!(result.bias, bias),
      },
      None => prop_assert_eq!(result.bias, Bias::Neutral),
    }
  }

  #[test]
  fn classify_accepts_exactly_one_to_three(window in proptest::collection::vec(arb_candle(), 0..6)) {
    let outcome = Classifier::default().classify(&window);
    if window.is_empty() || window.len() > 3 {
      let invalid = matches!(outcome, Err(PatternError::InvalidWindow { .. }));
      prop_assert!(invalid, "expected InvalidWindow for {} candles", window.len());
    } else {
      prop_assert!(outcome.is_ok());
    }
  }

  #[test]
  fn series_agrees_with_trailing_windows(candles in proptest::collection::vec(arb_candle(), 1..40)) {
    let classifier = Classifier::default();
    let series = classifier.classify_series(&candles);
    prop_assert_eq!(series.len(), candles.len());

    for (i, result) in series.iter().enumerate() {
      let start = i.saturating_sub(2);
      let expected = classifier.classify(&candles[start..=i]).unwrap();
      prop_assert_eq!(*result, expected);
    }
  }

  #[test]
  fn result_roundtrips_through_json(window in arb_window()) {
    let result = Classifier::default().classify(&window).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: PatternResult = serde_json::from_str(&json).unwrap();
    prop_assert_eq!(back, result);
  }
}
