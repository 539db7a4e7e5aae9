//! JSON response bodies.
//!
//! `GET /status` answers with a bare `CounterState`; the single-counter
//! routes answer with a one-key object named after the counter.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::counter::Counter;

/// `{"<counter>": value}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterBody {
    pub counter: Counter,
    pub value: u64,
}

impl CounterBody {
    pub fn new(counter: Counter, value: u64) -> Self {
        Self { counter, value }
    }
}

impl Serialize for CounterBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.counter.as_str(), &self.value)?;
        map.end()
    }
}

pub const PAGE_NOT_FOUND: &str = "page not found";

/// `{"error": message}`
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ErrorBody {
    pub fn page_not_found() -> Self {
        Self {
            error: PAGE_NOT_FOUND,
        }
    }
}
