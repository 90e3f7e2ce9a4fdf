//! Front desk booking workflow
//!
//! The front desk owns the three in-memory collections and binds room
//! availability to the reservation lifecycle. It is constructed once at
//! startup and passed by reference to the presentation layer; every
//! successful mutation rewrites the affected collection file(s).

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::ids::{IdSource, RandomIds};
use crate::invariants::assert_desk_invariants;
use crate::models::{Customer, Reservation, Room};
use crate::storage::DataStore;

/// Booking details as supplied by the caller
///
/// Dates arrive as raw user input and are parsed as ISO calendar dates.
/// Email may be blank; name, phone, and both dates are required.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub room_id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub check_in: String,
    pub check_out: String,
}

/// The front desk: rooms, customers, and reservations plus their store
pub struct FrontDesk {
    store: DataStore,
    ids: Box<dyn IdSource>,
    rooms: Vec<Room>,
    customers: Vec<Customer>,
    reservations: Vec<Reservation>,
}

impl FrontDesk {
    /// Load all collections from the store
    pub fn open(store: DataStore) -> Self {
        Self::with_ids(store, Box::new(RandomIds))
    }

    /// Load with a caller-supplied id source (deterministic ids in tests)
    pub fn with_ids(store: DataStore, ids: Box<dyn IdSource>) -> Self {
        let rooms = store.load_rooms();
        let customers = store.load_customers();
        let reservations = store.load_reservations();

        tracing::info!(
            rooms = rooms.len(),
            customers = customers.len(),
            reservations = reservations.len(),
            "Front desk opened"
        );

        Self {
            store,
            ids,
            rooms,
            customers,
            reservations,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Find a room by id
    pub fn room(&self, id: Uuid) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Find a customer by id
    pub fn customer(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Find a reservation by id
    pub fn reservation(&self, id: Uuid) -> Option<&Reservation> {
        self.reservations.iter().find(|res| res.id == id)
    }

    /// Book a room: create the customer and reservation, then flip the room
    /// unavailable. Nothing is mutated until every check has passed.
    pub fn book(&mut self, request: &BookingRequest) -> Result<Reservation> {
        let room_index = self
            .rooms
            .iter()
            .position(|r| r.id == request.room_id)
            .ok_or_else(|| Error::NotFound(format!("room {}", request.room_id)))?;

        if !self.rooms[room_index].available {
            return Err(Error::RoomUnavailable(request.room_id));
        }

        let name = request.name.trim();
        let phone = request.phone.trim();
        let check_in_raw = request.check_in.trim();
        let check_out_raw = request.check_out.trim();

        if name.is_empty() || phone.is_empty() || check_in_raw.is_empty() || check_out_raw.is_empty()
        {
            return Err(Error::Validation("Please fill required fields".into()));
        }

        let check_in: NaiveDate = check_in_raw.parse()?;
        let check_out: NaiveDate = check_out_raw.parse()?;
        if check_out <= check_in {
            return Err(Error::Validation(
                "Check-out must be after check-in".into(),
            ));
        }

        let customer = Customer::with_id(
            self.ids.next_id(),
            name.to_string(),
            phone.to_string(),
            request.email.trim().to_string(),
        );
        self.customers.push(customer.clone());
        self.store.save_customers(&self.customers);

        let reservation = Reservation::with_id(
            self.ids.next_id(),
            request.room_id,
            customer.id,
            check_in,
            check_out,
        );
        self.reservations.push(reservation.clone());
        self.store.save_reservations(&self.reservations);

        self.rooms[room_index].available = false;
        self.store.save_rooms(&self.rooms);

        tracing::info!(reservation = %reservation.id, room = %request.room_id, "Room booked");
        assert_desk_invariants(&self.rooms, &self.reservations);
        Ok(reservation)
    }

    /// Cancel a reservation, restoring the referenced room's availability
    pub fn cancel(&mut self, reservation_id: Uuid) -> Result<()> {
        let index = self
            .reservations
            .iter()
            .position(|res| res.id == reservation_id)
            .ok_or_else(|| Error::NotFound(format!("reservation {reservation_id}")))?;

        let room_id = self.reservations[index].room_id;
        if let Some(room) = self.rooms.iter_mut().find(|r| r.id == room_id) {
            room.available = true;
        }

        self.reservations.remove(index);
        self.store.save_reservations(&self.reservations);
        self.store.save_rooms(&self.rooms);

        tracing::info!(reservation = %reservation_id, "Reservation cancelled");
        assert_desk_invariants(&self.rooms, &self.reservations);
        Ok(())
    }

    /// Add a new available room
    pub fn add_room(&mut self, kind: &str, price_per_night: f64) -> Result<Room> {
        let kind = kind.trim();
        if kind.is_empty() {
            return Err(Error::Validation("Room type must not be blank".into()));
        }
        if !(price_per_night.is_finite() && price_per_night > 0.0) {
            return Err(Error::Validation("Price must be a positive number".into()));
        }

        let room = Room::with_id(self.ids.next_id(), kind.to_string(), price_per_night);
        self.rooms.push(room.clone());
        self.store.save_rooms(&self.rooms);

        tracing::info!(room = %room.id, kind = %room.kind, "Room added");
        Ok(room)
    }

    /// Remove a room; a booked room cannot be removed
    pub fn remove_room(&mut self, room_id: Uuid) -> Result<()> {
        let index = self
            .rooms
            .iter()
            .position(|r| r.id == room_id)
            .ok_or_else(|| Error::NotFound(format!("room {room_id}")))?;

        if !self.rooms[index].available {
            return Err(Error::RoomUnavailable(room_id));
        }

        self.rooms.remove(index);
        self.store.save_rooms(&self.rooms);

        tracing::info!(room = %room_id, "Room removed");
        Ok(())
    }

    /// First-run convenience: populate a few sample rooms when the room
    /// collection is empty. No-op otherwise.
    pub fn seed_sample_rooms(&mut self) {
        if !self.rooms.is_empty() {
            return;
        }

        for (kind, price) in [("Single", 1500.0), ("Double", 2500.0), ("Suite", 5000.0)] {
            let room = Room::with_id(self.ids.next_id(), kind.to_string(), price);
            self.rooms.push(room);
        }
        self.store.save_rooms(&self.rooms);

        tracing::info!("Seeded sample rooms");
    }
}
