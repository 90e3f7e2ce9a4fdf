//! Data models for Concierge

mod customer;
mod reservation;
mod room;

pub use customer::*;
pub use reservation::*;
pub use room::*;
