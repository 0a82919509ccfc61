//! Pure indicator functions over numeric sequences.
//!
//! Every function allocates a fresh output of the same length as its
//! input, aligned index-for-index. Warm-up positions where a window is
//! not yet populated are `None`, never zero and never NaN, so rule logic
//! cannot silently compare against an undefined value. The EMA family is
//! the exception: the recurrence is seeded from the first observation
//! and therefore defined at every index.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod volume;

pub use ema::ema;
pub use macd::{MacdOutput, macd};
pub use rsi::rsi;
pub use sma::sma;
pub use volume::volume_average;
