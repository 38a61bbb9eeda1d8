//! Normalize ISO-style time tokens (month, week, day, minute timestamps)
//! into [start, end] intervals with a TimeML-like serialized form.
//!
//! ```
//! use timex::Timex;
//!
//! let t = Timex::parse("2017-11").unwrap();
//! assert_eq!(t.to_string(), "Timex(2017-11-01 00:00:00, 2017-11-30 23:59:59)");
//! ```
#![deny(warnings)]

mod types;
pub use crate::types::{Date, DateTime, Duration, Grain};

mod timex;
pub use crate::timex::{Timex, TimexRecord};
