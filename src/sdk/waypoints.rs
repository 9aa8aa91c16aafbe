use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path};

use super::routing::error::RoutingError;

/// A (latitude, longitude) pair the route must pass through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
}

impl Waypoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// OSRM wants `lon,lat`.
    pub fn to_osrm_coord(&self) -> String {
        format!("{},{}", self.lon, self.lat)
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

// Closed loop: the last point repeats the first.
pub const DEFAULT_WAYPOINTS: [Waypoint; 8] = [
    Waypoint::new(39.75123, -105.222302),
    Waypoint::new(39.753914, -105.226298),
    Waypoint::new(39.750895, -105.223291),
    Waypoint::new(39.748435, -105.222988),
    Waypoint::new(39.744379, -105.224428),
    Waypoint::new(39.741498, -105.223882),
    Waypoint::new(39.740863, -105.222378),
    Waypoint::new(39.75123, -105.222302),
];

/// Joins the waypoints as `lon,lat` pairs separated by `;`, keeping their order.
pub fn build_coordinate_query(waypoints: &[Waypoint]) -> String {
    waypoints
        .iter()
        .map(Waypoint::to_osrm_coord)
        .collect::<Vec<_>>()
        .join(";")
}

/// Checks there is something to route between and every point is on the globe.
pub fn validate(waypoints: &[Waypoint]) -> Result<(), RoutingError> {
    if waypoints.len() < 2 {
        return Err(RoutingError::InvalidWaypoints(format!(
            "at least 2 waypoints are required, got {}",
            waypoints.len()
        )));
    }
    if let Some((idx, bad)) = waypoints.iter().enumerate().find(|(_, w)| !w.is_valid()) {
        return Err(RoutingError::InvalidWaypoints(format!(
            "waypoint #{} is out of range: lat={}, lon={}",
            idx + 1,
            bad.lat,
            bad.lon
        )));
    }
    Ok(())
}

/// Loads waypoints from a 2-column CSV file (lat, lon) with a header row.
pub fn load_from_csv<P: AsRef<Path>>(csv_path: P) -> Result<Vec<Waypoint>, RoutingError> {
    let file = File::open(csv_path)?;
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut waypoints = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| RoutingError::InvalidWaypoints(e.to_string()))?;
        let lat = parse_field(record.get(0), "latitude", line)?;
        let lon = parse_field(record.get(1), "longitude", line)?;
        waypoints.push(Waypoint::new(lat, lon));
    }

    log::debug!("Loaded {} waypoints from CSV", waypoints.len());
    Ok(waypoints)
}

fn parse_field(field: Option<&str>, name: &str, line: usize) -> Result<f64, RoutingError> {
    let raw = field.ok_or_else(|| {
        RoutingError::InvalidWaypoints(format!("Missing {} on record {}", name, line + 1))
    })?;
    raw.parse::<f64>().map_err(|_| {
        RoutingError::InvalidWaypoints(format!(
            "Invalid {} \"{}\" on record {}",
            name,
            raw,
            line + 1
        ))
    })
}
