#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod error;
mod flight;
mod track;
mod waypoint;

pub mod bearing;
pub mod interp;
pub mod timeline;

#[cfg(feature = "serde")]
#[cfg_attr(docrs, doc(cfg(feature = "serde")))]
pub mod dataset;

// pub export
pub use error::Error;


// prelude
pub mod prelude {
    pub use crate::bearing::{bearing_deg, Heading};
    pub use crate::flight::{AircraftCategory, Flight, FlightKind};
    pub use crate::interp::{interpolate, InterpolatedPoint, PositionInterpolator, Search};
    pub use crate::timeline::{Advance, Bounds, Config, Selection, Timeline, TimelineState};
    pub use crate::track::Track;
    pub use crate::waypoint::Waypoint;
    #[cfg(feature = "serde")]
    pub use crate::dataset::Dataset;
    // re-export
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
}
