//! Immutable descriptions of vehicles and parcels.
//!
//! These are the payloads carried by timed events.  They describe *what* is
//! announced; the engine's pickup-and-delivery model owns the live state.

use std::hash::{Hash, Hasher};

use crate::geo::canonical_bits;
use crate::{Point, Tick, TimeWindow};

// ── VehicleDto ────────────────────────────────────────────────────────────────

/// Template for one vehicle.
///
/// `speed` is expressed in the speed unit of the scenario's road descriptor.
/// Scenario construction rejects a default vehicle whose speed is not
/// strictly positive.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleDto {
    pub start_position: Point,
    pub speed:          f64,
    pub capacity:       u32,
    pub availability:   TimeWindow,
}

impl VehicleDto {
    pub fn new(start_position: Point, speed: f64, capacity: u32, availability: TimeWindow) -> Self {
        Self { start_position, speed, capacity, availability }
    }
}

impl PartialEq for VehicleDto {
    fn eq(&self, other: &Self) -> bool {
        self.start_position == other.start_position
            && canonical_bits(self.speed) == canonical_bits(other.speed)
            && self.capacity == other.capacity
            && self.availability == other.availability
    }
}

impl Eq for VehicleDto {}

impl Hash for VehicleDto {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start_position.hash(state);
        canonical_bits(self.speed).hash(state);
        self.capacity.hash(state);
        self.availability.hash(state);
    }
}

// ── ParcelDto ─────────────────────────────────────────────────────────────────

/// A transport request: pick up at one location, deliver at another, each
/// within its own time window.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParcelDto {
    pub pickup_location:   Point,
    pub delivery_location: Point,
    pub pickup_window:     TimeWindow,
    pub delivery_window:   TimeWindow,
    /// Capacity units the parcel occupies while on board.
    pub needed_capacity:   u32,
    /// Tick at which the order becomes known to the dispatcher.
    pub announce_time:     Tick,
    /// Service durations, in ticks.
    pub pickup_duration:   u64,
    pub delivery_duration: u64,
}

impl ParcelDto {
    /// A unit-capacity parcel with zero service times, announced at tick 0
    /// and serviceable at any time.
    pub fn new(pickup_location: Point, delivery_location: Point) -> Self {
        Self {
            pickup_location,
            delivery_location,
            pickup_window:     TimeWindow::ALWAYS,
            delivery_window:   TimeWindow::ALWAYS,
            needed_capacity:   1,
            announce_time:     Tick::ZERO,
            pickup_duration:   0,
            delivery_duration: 0,
        }
    }

    pub fn with_windows(mut self, pickup: TimeWindow, delivery: TimeWindow) -> Self {
        self.pickup_window = pickup;
        self.delivery_window = delivery;
        self
    }

    pub fn with_announce_time(mut self, t: Tick) -> Self {
        self.announce_time = t;
        self
    }

    pub fn with_durations(mut self, pickup: u64, delivery: u64) -> Self {
        self.pickup_duration = pickup;
        self.delivery_duration = delivery;
        self
    }

    pub fn with_capacity(mut self, needed: u32) -> Self {
        self.needed_capacity = needed;
        self
    }
}
