//! Customer model

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A guest record created at booking time; never updated or deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Self::with_id(Uuid::new_v4(), name, phone, email)
    }

    /// Construct with a caller-supplied id
    pub fn with_id(id: Uuid, name: String, phone: String, email: String) -> Self {
        Self {
            id,
            name,
            phone,
            email,
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            &self.id.to_string()[..8],
            self.name,
            self.phone,
            self.email
        )
    }
}
