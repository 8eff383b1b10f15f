//! Timed events — the discrete occurrences a scenario schedules.

use std::fmt;

use pdp_core::{ParcelDto, Point, Tick, VehicleDto};

/// What happens when a [`TimedEvent`] fires.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A new transport request becomes known.
    AddParcel(ParcelDto),
    /// A vehicle joins the fleet.
    AddVehicle(VehicleDto),
    /// A depot is placed at the given location.
    AddDepot(Point),
    /// The scenario's horizon has been reached.
    TimeOut,
}

impl EventKind {
    /// Short label for logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::AddParcel(_)  => "add_parcel",
            EventKind::AddVehicle(_) => "add_vehicle",
            EventKind::AddDepot(_)   => "add_depot",
            EventKind::TimeOut       => "time_out",
        }
    }
}

/// An [`EventKind`] scheduled at a tick.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedEvent {
    pub time: Tick,
    pub kind: EventKind,
}

impl TimedEvent {
    #[inline]
    pub fn new(time: Tick, kind: EventKind) -> Self {
        Self { time, kind }
    }

    /// Announce `parcel` at its own `announce_time`.
    pub fn parcel(parcel: ParcelDto) -> Self {
        Self::new(parcel.announce_time, EventKind::AddParcel(parcel))
    }

    pub fn vehicle(time: Tick, vehicle: VehicleDto) -> Self {
        Self::new(time, EventKind::AddVehicle(vehicle))
    }

    pub fn depot(time: Tick, position: Point) -> Self {
        Self::new(time, EventKind::AddDepot(position))
    }

    pub fn time_out(time: Tick) -> Self {
        Self::new(time, EventKind::TimeOut)
    }
}

impl fmt::Display for TimedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind.as_str(), self.time)
    }
}
