use std::convert::Infallible;
use std::str::FromStr;

use crate::prelude::Track;

/// Flight classification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FlightKind {
    Commercial,
    Special,
    #[default]
    Unknown,
    /// Any classification we do not know about
    Other(String),
}

impl std::fmt::Display for FlightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Commercial => write!(f, "Commercial"),
            Self::Special => write!(f, "Special"),
            Self::Unknown => write!(f, "Unknown"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for FlightKind {
    fn from(s: &str) -> Self {
        match s.trim() {
            "Commercial" => Self::Commercial,
            "Special" => Self::Special,
            "Unknown" | "" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for FlightKind {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Aircraft category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AircraftCategory {
    Aeroplane,
    Helicopter,
    Fighter,
    Other(String),
}

impl std::fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Aeroplane => write!(f, "Aeroplane"),
            Self::Helicopter => write!(f, "Helicopter"),
            Self::Fighter => write!(f, "Fighter"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for AircraftCategory {
    fn from(s: &str) -> Self {
        match s.trim() {
            "Aeroplane" => Self::Aeroplane,
            "Helicopter" => Self::Helicopter,
            "Fighter" => Self::Fighter,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for AircraftCategory {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// A recorded flight: identity, classification and [Track].
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: String,
    pub kind: FlightKind,
    pub aircraft: AircraftCategory,
    /// Reporting source
    pub reported_by: String,
    pub track: Track,
}

impl Flight {
    pub fn new(
        id: &str,
        kind: FlightKind,
        aircraft: AircraftCategory,
        reported_by: &str,
        track: Track,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            aircraft,
            reported_by: reported_by.to_string(),
            track,
        }
    }
}
