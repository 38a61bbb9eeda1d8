#![deny(warnings)]

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::types::{DateTime, Duration, Grain};

// Full-precision ISO-8601 rendering; the fraction only shows up when the
// instant carries sub-second precision.
const ISO_FULL: &str = "%Y-%m-%dT%H:%M:%S%.f";

// Trial order for the factory, coarsest first. Month must precede Day so a
// month-only token isn't rejected as a truncated day; Week is singled out by
// its literal 'W'.
const GRAINS: [Grain; 4] = [Grain::Month, Grain::Week, Grain::Day, Grain::Minute];


/// A normalized [start, end] pair covering one recognized calendar unit,
/// both endpoints included. Naive local time, no timezone attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timex {
    start: DateTime,
    end: DateTime,
}

impl Timex {
    /// Build an interval from explicit endpoints. No ordering check is made:
    /// callers own the `start <= end` contract, an inverted pair just reads
    /// back a negative duration.
    pub fn new(start: DateTime, end: DateTime) -> Timex {
        Timex { start, end }
    }

    /// Interpret `text` as one of the recognized fixed-granularity tokens:
    /// month `2017-11`, ISO week `2017-W45`, day `2017-11-01` or minute
    /// timestamp `2017-02-04T13:55`. The first grain whose pattern consumes
    /// the whole input wins; its interval runs from the unit's first instant
    /// to the start of the next unit minus one second.
    ///
    /// None means no pattern matched. That is the normal outcome for free
    /// text ("this summer", "2017-SU"), not an error.
    pub fn parse(text: &str) -> Option<Timex> {
        for grain in GRAINS {
            if let Some(start) = grain.parse_start(text) {
                let end = grain.next_start(start) - Duration::seconds(1);
                return Some(Timex::new(start, end));
            }
        }
        debug!("no timex pattern matched {:?}", text);
        None
    }

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn end(&self) -> DateTime {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// True iff this interval lies entirely within `other`, endpoints
    /// included. Every interval entails itself.
    pub fn is_entailed_in(&self, other: &Timex) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// TimeML-like rendering: two DATE anchors plus a DURATION tying them
    /// together, after TIMEX3's range encoding. The t1/t2/t3 ids are fixed
    /// literals; each interval serializes independently so they never need
    /// to be globally unique.
    pub fn to_records(&self) -> Vec<TimexRecord> {
        vec![
            TimexRecord::Date {
                id: "t1",
                value: self.start.format(ISO_FULL).to_string(),
            },
            TimexRecord::Date {
                id: "t2",
                value: self.end.format(ISO_FULL).to_string(),
            },
            TimexRecord::Duration {
                id: "t3",
                begin_ref: "t1",
                end_ref: "t2",
            },
        ]
    }
}

impl fmt::Display for Timex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Timex({}, {})", self.start, self.end)
    }
}


/// One record of the serialized interval structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum TimexRecord {
    #[serde(rename = "DATE")]
    Date { id: &'static str, value: String },
    #[serde(rename = "DURATION")]
    Duration {
        id: &'static str,
        #[serde(rename = "beginRef")]
        begin_ref: &'static str,
        #[serde(rename = "endRef")]
        end_ref: &'static str,
    },
}
