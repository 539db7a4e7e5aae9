//! The two fixed counters and their combined state.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RedBlueError, Result};

/// One of the two named counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Red,
    Blue,
}

impl Counter {
    pub const ALL: [Counter; 2] = [Counter::Red, Counter::Blue];

    /// Wire name, also the route path segment.
    pub fn as_str(self) -> &'static str {
        match self {
            Counter::Red => "red",
            Counter::Blue => "blue",
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent state: both counters.
///
/// Absent fields decode as 0. Anything that is not an object of
/// non-negative integers fails to decode as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    #[serde(default)]
    pub red: u64,
    #[serde(default)]
    pub blue: u64,
}

impl CounterState {
    pub fn new(red: u64, blue: u64) -> Self {
        Self { red, blue }
    }

    pub fn get(&self, counter: Counter) -> u64 {
        match counter {
            Counter::Red => self.red,
            Counter::Blue => self.blue,
        }
    }

    /// Add one and return the new value. Saturates at `u64::MAX`.
    pub fn increment(&mut self, counter: Counter) -> u64 {
        let slot = match counter {
            Counter::Red => &mut self.red,
            Counter::Blue => &mut self.blue,
        };
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Decode stored content. Only a JSON object is accepted; the derived
    /// decoder alone would also take `[red, blue]` sequences.
    pub fn from_json(s: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(s)? {
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(RedBlueError::Decode(serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                kind(&other)
            )))),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
