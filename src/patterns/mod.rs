//! Candlestick pattern predicates
//!
//! Grouped by window size:
//!
//! - **single** (7): hammer family, shooting star, marubozu, doji, spinning top
//! - **double** (8): engulfing, piercing, dark cloud cover, tweezers, harami
//! - **triple** (6): stars, soldiers/crows, triple top/bottom
//!
//! Each predicate is a pure boolean function over candles plus a
//! [`crate::params::PatternParams`]; each module also exposes an
//! `evaluate_*` aggregator that applies the module's fixed precedence order
//! and returns the first match.

pub mod double;
pub mod single;
pub mod triple;

pub use double::evaluate_last_two;
pub use single::evaluate_single;
pub use triple::evaluate_last_three;
