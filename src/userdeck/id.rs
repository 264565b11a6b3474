//! Identifier generation for new users.
//!
//! Two strategies are available. [`new_id`] returns a random UUID v4 string
//! and is the default. [`short_id`] returns a shorter base-36 id made of the
//! current millisecond timestamp followed by a random suffix. Neither needs
//! any shared state.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SHORT_SUFFIX_LEN: usize = 10;

/// A 36-character UUID v4 string, e.g. `3f2b8c1e-9d4a-4c7b-a1e2-5f6d7c8b9a0e`.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Base-36 timestamp followed by a base-36 random suffix.
pub fn short_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    let mut id = to_base36(millis);
    let suffix = to_base36(Uuid::new_v4().as_u128());
    id.extend(suffix.chars().take(SHORT_SUFFIX_LEN));
    id
}

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Short,
}

impl IdStrategy {
    pub fn generate(self) -> String {
        match self {
            IdStrategy::Uuid => new_id(),
            IdStrategy::Short => short_id(),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Uuid => write!(f, "uuid"),
            IdStrategy::Short => write!(f, "short"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "short" => Ok(IdStrategy::Short),
            other => Err(format!(
                "Unknown id strategy '{}' (expected 'uuid' or 'short')",
                other
            )),
        }
    }
}
