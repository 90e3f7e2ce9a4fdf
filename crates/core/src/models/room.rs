//! Room model

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable room with a nightly rate and an availability flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    /// Free-text label, e.g. "Single", "Double", "Suite"
    #[serde(rename = "type")]
    pub kind: String,
    pub price_per_night: f64,
    pub available: bool,
}

impl Room {
    pub fn new(kind: String, price_per_night: f64) -> Self {
        Self::with_id(Uuid::new_v4(), kind, price_per_night)
    }

    /// Construct with a caller-supplied id; rooms start available
    pub fn with_id(id: Uuid, kind: String, price_per_night: f64) -> Self {
        Self {
            id,
            kind,
            price_per_night,
            available: true,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.available { "Available" } else { "Booked" };
        write!(
            f,
            "{} | {} | {:.2} | {}",
            &self.id.to_string()[..8],
            self.kind,
            self.price_per_night,
            status
        )
    }
}
