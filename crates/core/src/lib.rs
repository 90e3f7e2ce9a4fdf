//! Concierge Core Library
//!
//! Core models, booking workflow, and flat-file storage for the Concierge
//! hotel desk application. The presentation layer drives the [`FrontDesk`]
//! and re-renders from its in-memory collections.

pub mod desk;
pub mod error;
pub mod ids;
pub mod invariants;
pub mod models;
pub mod storage;

pub use desk::{BookingRequest, FrontDesk};
pub use error::{Error, Result};
pub use ids::{IdSource, RandomIds};
pub use models::*;
pub use storage::DataStore;
