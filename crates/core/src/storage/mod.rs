//! Flat-file JSON storage for Concierge
//!
//! Each collection lives in its own JSON-array file inside the data
//! directory. Every save rewrites the whole file; load recovers from a
//! corrupt file by resetting to an empty collection.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::models::{Customer, Reservation, Room};

const ROOMS_FILE: &str = "rooms.json";
const CUSTOMERS_FILE: &str = "customers.json";
const RESERVATIONS_FILE: &str = "reservations.json";

/// Flat-file store handle
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    /// Open the store at the given directory, creating it if absent.
    ///
    /// Failure to create the directory is the one fatal persistence error.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let data_dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Open the store in the platform data directory
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "onyx", "concierge").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;

        Self::open(dirs.data_dir().join("data"))
    }

    /// Directory backing this store
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // ---------- Load ----------

    pub fn load_rooms(&self) -> Vec<Room> {
        self.load(ROOMS_FILE)
    }

    pub fn load_customers(&self) -> Vec<Customer> {
        self.load(CUSTOMERS_FILE)
    }

    pub fn load_reservations(&self) -> Vec<Reservation> {
        self.load(RESERVATIONS_FILE)
    }

    // ---------- Save ----------

    pub fn save_rooms(&self, rooms: &[Room]) {
        self.save(ROOMS_FILE, rooms);
    }

    pub fn save_customers(&self, customers: &[Customer]) {
        self.save(CUSTOMERS_FILE, customers);
    }

    pub fn save_reservations(&self, reservations: &[Reservation]) {
        self.save(RESERVATIONS_FILE, reservations);
    }

    // ---------- Helpers ----------

    /// Read a whole collection. An absent, empty, or corrupt file yields an
    /// empty collection; corruption is logged, never raised to the caller.
    fn load<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        let path = self.data_dir.join(name);
        if !path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Failed to read collection, treating as empty");
                return Vec::new();
            }
        };

        if contents.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&contents) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Collection file corrupted, resetting to empty");
                Vec::new()
            }
        }
    }

    /// Rewrite a whole collection file. Failures are logged and swallowed;
    /// persistence errors never abort an operation.
    fn save<T: Serialize>(&self, name: &str, items: &[T]) {
        if let Err(e) = self.try_save(name, items) {
            tracing::error!(file = name, error = %e, "Failed to save collection");
        }
    }

    fn try_save<T: Serialize>(&self, name: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(self.data_dir.join(name), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use uuid::Uuid;

    #[test]
    fn test_open_creates_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("data");

        let store = DataStore::open(&path).unwrap();
        assert!(path.is_dir());
        assert_eq!(store.data_dir(), path);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let store = DataStore::open(dir.path()).unwrap();

        assert!(store.load_rooms().is_empty());
        assert!(store.load_customers().is_empty());
        assert!(store.load_reservations().is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempdir().unwrap();
        let store = DataStore::open(dir.path()).unwrap();

        fs::write(dir.path().join(ROOMS_FILE), "").unwrap();
        assert!(store.load_rooms().is_empty());
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempdir().unwrap();
        let store = DataStore::open(dir.path()).unwrap();

        fs::write(dir.path().join(ROOMS_FILE), "{ not json [").unwrap();
        assert!(store.load_rooms().is_empty());
    }

    #[test]
    fn test_save_and_load_rooms() {
        let dir = tempdir().unwrap();
        let store = DataStore::open(dir.path()).unwrap();

        let room = Room::with_id(Uuid::from_u128(7), "Suite".to_string(), 5000.0);
        store.save_rooms(&[room.clone()]);

        let loaded = store.load_rooms();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, room.id);
        assert_eq!(loaded[0].kind, "Suite");
        assert_eq!(loaded[0].price_per_night, 5000.0);
        assert!(loaded[0].available);
    }

    #[test]
    fn test_save_rewrites_whole_file() {
        let dir = tempdir().unwrap();
        let store = DataStore::open(dir.path()).unwrap();

        let a = Room::with_id(Uuid::from_u128(1), "Single".to_string(), 1500.0);
        let b = Room::with_id(Uuid::from_u128(2), "Double".to_string(), 2500.0);
        store.save_rooms(&[a, b]);
        store.save_rooms(&[]);

        assert!(store.load_rooms().is_empty());
    }

    #[test]
    fn test_dates_round_trip_as_calendar_dates() {
        let dir = tempdir().unwrap();
        let store = DataStore::open(dir.path()).unwrap();

        let reservation = Reservation::with_id(
            Uuid::from_u128(3),
            Uuid::from_u128(1),
            Uuid::from_u128(2),
            "2024-01-10".parse().unwrap(),
            "2024-01-12".parse().unwrap(),
        );
        store.save_reservations(&[reservation]);

        let raw = fs::read_to_string(dir.path().join(RESERVATIONS_FILE)).unwrap();
        assert!(raw.contains("\"2024-01-10\""));
        assert!(raw.contains("\"2024-01-12\""));

        let loaded = store.load_reservations();
        assert_eq!(loaded[0].nights(), 2);
    }
}
