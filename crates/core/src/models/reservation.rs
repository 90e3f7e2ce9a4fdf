//! Reservation model

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booking linking a room and a customer over a date range
///
/// Room and customer are references by id, resolved with a linear scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub room_id: Uuid,
    pub customer_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Reservation {
    pub fn new(room_id: Uuid, customer_id: Uuid, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4(), room_id, customer_id, check_in, check_out)
    }

    /// Construct with a caller-supplied id
    pub fn with_id(
        id: Uuid,
        room_id: Uuid,
        customer_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            id,
            room_id,
            customer_id,
            check_in,
            check_out,
        }
    }

    /// Length of the stay in nights
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Room:{} | Cust:{} | {} -> {}",
            &self.id.to_string()[..8],
            &self.room_id.to_string()[..8],
            &self.customer_id.to_string()[..8],
            self.check_in,
            self.check_out
        )
    }
}
