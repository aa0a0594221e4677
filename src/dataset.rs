//! Flight dataset loader
use hifitime::Epoch;
use log::{debug, info};
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

use crate::{
    prelude::{AircraftCategory, Flight, FlightKind, Track, Waypoint},
    Error,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawDataset {
    flights: Vec<RawFlight>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawFlight {
    id: RawId,
    #[serde(rename = "Type", default)]
    kind: String,
    #[serde(default)]
    aircraft_type: String,
    #[serde(default)]
    reported_by: String,
    coordinates: Vec<RawWaypoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawWaypoint {
    time_stamp: String,
    latitude: f64,
    longitude: f64,
    height: f64,
    speed: f64,
}

/// Parses an ISO8601 instant. A trailing `Z` stands for UTC.
fn parse_epoch(s: &str) -> Result<Epoch, Error> {
    let trimmed = s.trim();
    let normalized = match trimmed.strip_suffix('Z') {
        Some(utc) => format!("{} UTC", utc),
        None => trimmed.to_string(),
    };
    Epoch::from_str(&normalized).map_err(|_| Error::InvalidTimestamp(s.to_string()))
}

impl RawFlight {
    fn validate(self) -> Result<Flight, Error> {
        let id = match self.id {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        };
        let waypoints = self
            .coordinates
            .into_iter()
            .map(|c| {
                Ok(Waypoint::new(
                    parse_epoch(&c.time_stamp)?,
                    c.latitude,
                    c.longitude,
                    c.height,
                    c.speed,
                ))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let track = Track::new(waypoints)?;
        debug!("flight {}: {} samples", id, track.len());
        let kind = FlightKind::from(self.kind.as_str());
        let aircraft = AircraftCategory::from(self.aircraft_type.as_str());
        Ok(Flight::new(&id, kind, aircraft, &self.reported_by, track))
    }
}

/// Validated set of [Flight]s. Anything that reaches the interpolator
/// or the timeline went through here first.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    flights: Vec<Flight>,
}

impl Dataset {
    /// Parses a JSON document `{"Flights": [..]}`.
    /// Malformed documents, unparsable instants, out of order samples
    /// and invalid coordinates are all rejected.
    pub fn from_json_str(content: &str) -> Result<Self, Error> {
        let raw: RawDataset = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }
    /// Same as [Self::from_json_str], from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let raw: RawDataset = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }
    fn from_raw(raw: RawDataset) -> Result<Self, Error> {
        let flights = raw
            .flights
            .into_iter()
            .map(RawFlight::validate)
            .collect::<Result<Vec<_>, Error>>()?;
        info!("loaded {} flights", flights.len());
        Ok(Self { flights })
    }
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }
    pub fn get(&self, id: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == id)
    }
    pub fn len(&self) -> usize {
        self.flights.len()
    }
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::{parse_epoch, Dataset};
    use crate::prelude::{AircraftCategory, Epoch, FlightKind};
    use crate::Error;
    use std::str::FromStr;

    const DATASET: &str = r#"{
        "Flights": [
            {
                "Id": 101,
                "Type": "Commercial",
                "AircraftType": "Aeroplane",
                "ReportedBy": "Radar",
                "Coordinates": [
                    {"TimeStamp": "2024-05-01T10:00:00Z", "Latitude": 31.2, "Longitude": 71.4, "Height": 30000, "Speed": 450},
                    {"TimeStamp": "2024-05-01T10:05:00Z", "Latitude": 31.4, "Longitude": 71.6, "Height": 31000, "Speed": 460}
                ]
            },
            {
                "Id": "HX-7",
                "Type": "Special",
                "AircraftType": "Helicopter",
                "ReportedBy": "Visual",
                "Coordinates": []
            }
        ]
    }"#;

    #[test]
    fn load() {
        let dataset = Dataset::from_json_str(DATASET).unwrap();
        assert_eq!(dataset.len(), 2);

        let flight = dataset.get("101").unwrap();
        assert_eq!(flight.kind, FlightKind::Commercial);
        assert_eq!(flight.aircraft, AircraftCategory::Aeroplane);
        assert_eq!(flight.reported_by, "Radar");
        assert_eq!(flight.track.len(), 2);
        assert!(flight.track.is_playable());
        assert_eq!(
            flight.track.start(),
            Some(Epoch::from_str("2024-05-01T10:00:00 UTC").unwrap())
        );
        assert_eq!(flight.track.last().unwrap().altitude, 31000.0);

        let flight = dataset.get("HX-7").unwrap();
        assert_eq!(flight.aircraft, AircraftCategory::Helicopter);
        assert!(flight.track.is_empty());

        assert!(dataset.get("unknown").is_none());
    }

    #[test]
    fn from_reader() {
        let dataset = Dataset::from_reader(DATASET.as_bytes()).unwrap();
        assert_eq!(dataset.flights().len(), 2);
    }

    #[test]
    fn timestamps() {
        let utc = Epoch::from_str("2024-05-01T10:00:00 UTC").unwrap();
        assert_eq!(parse_epoch("2024-05-01T10:00:00Z").unwrap(), utc);
        assert_eq!(parse_epoch(" 2024-05-01T10:00:00 UTC ").unwrap(), utc);
        assert!(matches!(
            parse_epoch("yesterday"),
            Err(Error::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn rejections() {
        let malformed = r#"{"Flights": [{"Id": 1, "Coordinates": [{"TimeStamp": "2024-05-01T10:00:00Z"}]}]}"#;
        assert!(matches!(
            Dataset::from_json_str(malformed),
            Err(Error::Json(_))
        ));

        let bad_time = r#"{"Flights": [{"Id": 1, "Coordinates": [
            {"TimeStamp": "not a date", "Latitude": 0, "Longitude": 0, "Height": 0, "Speed": 0}
        ]}]}"#;
        assert!(matches!(
            Dataset::from_json_str(bad_time),
            Err(Error::InvalidTimestamp(_))
        ));

        let out_of_order = r#"{"Flights": [{"Id": 1, "Coordinates": [
            {"TimeStamp": "2024-05-01T10:05:00Z", "Latitude": 0, "Longitude": 0, "Height": 0, "Speed": 0},
            {"TimeStamp": "2024-05-01T10:00:00Z", "Latitude": 0, "Longitude": 0, "Height": 0, "Speed": 0}
        ]}]}"#;
        assert!(matches!(
            Dataset::from_json_str(out_of_order),
            Err(Error::ChronologicalOrder { .. })
        ));

        let off_earth = r#"{"Flights": [{"Id": 1, "Coordinates": [
            {"TimeStamp": "2024-05-01T10:00:00Z", "Latitude": 95.0, "Longitude": 0, "Height": 0, "Speed": 0}
        ]}]}"#;
        assert!(matches!(
            Dataset::from_json_str(off_earth),
            Err(Error::InvalidCoordinates { .. })
        ));

        assert!(Dataset::from_json_str("[]").is_err());
    }
}
