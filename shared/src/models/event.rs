//! Event Model

use serde::{Deserialize, Serialize};

/// Upcoming church event. Static fixture data, no persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
}
