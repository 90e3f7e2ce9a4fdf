//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds. They run after
//! mutations, not after load: a file left behind by a crash mid-write may
//! legitimately be inconsistent until the next save.

use uuid::Uuid;

use crate::models::{Reservation, Room};

/// Validate that a room's fields are internally consistent
pub fn assert_room_invariants(room: &Room) {
    debug_assert!(
        !room.kind.trim().is_empty(),
        "Room {} has blank type",
        room.id
    );

    debug_assert!(
        room.price_per_night.is_finite() && room.price_per_night > 0.0,
        "Room {} has non-positive price {}",
        room.id,
        room.price_per_night
    );
}

/// Validate that a reservation's fields are internally consistent
pub fn assert_reservation_invariants(reservation: &Reservation) {
    debug_assert!(
        reservation.check_out > reservation.check_in,
        "Reservation {} check-out {} is not after check-in {}",
        reservation.id,
        reservation.check_out,
        reservation.check_in
    );

    debug_assert!(
        reservation.room_id != Uuid::nil(),
        "Reservation {} has nil room_id",
        reservation.id
    );

    debug_assert!(
        reservation.customer_id != Uuid::nil(),
        "Reservation {} has nil customer_id",
        reservation.id
    );
}

/// Validate that room availability mirrors the reservation ledger:
/// a room is unavailable exactly when some reservation references it.
pub fn assert_desk_invariants(rooms: &[Room], reservations: &[Reservation]) {
    for room in rooms {
        let reserved = reservations.iter().any(|res| res.room_id == room.id);
        debug_assert!(
            room.available != reserved,
            "Room {} availability {} disagrees with reservation ledger",
            room.id,
            room.available
        );
    }

    for reservation in reservations {
        assert_reservation_invariants(reservation);
        debug_assert!(
            rooms.iter().any(|r| r.id == reservation.room_id),
            "Reservation {} references unknown room {}",
            reservation.id,
            reservation.room_id
        );
    }
}
