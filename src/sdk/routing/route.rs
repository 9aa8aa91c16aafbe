use crate::sdk::waypoints::Waypoint;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use super::error::RoutingError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub duration_hours: f64,
}

/// Densified path geometry, stored in `lat,lon` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "route", with = "lat_lon_pairs")]
    pub points: Vec<Waypoint>,
}

// --- Serde Helper: points as bare [lat, lon] arrays ---
mod lat_lon_pairs {
    use crate::sdk::waypoints::Waypoint;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(points: &[Waypoint], serializer: S) -> Result<S::Ok, S::Error> {
        let pairs: Vec<[f64; 2]> = points.iter().map(|p| [p.lat, p.lon]).collect();
        pairs.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Waypoint>, D::Error> {
        let pairs = Vec::<[f64; 2]>::deserialize(deserializer)?;
        Ok(pairs.into_iter().map(|[lat, lon]| Waypoint::new(lat, lon)).collect())
    }
}

impl Route {
    /// Builds a route from GeoJSON coordinates, which come as `[lon, lat]`.
    pub fn from_geojson(coordinates: &[[f64; 2]]) -> Self {
        Self {
            points: coordinates
                .iter()
                .map(|&[lon, lat]| Waypoint::new(lat, lon))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Writes `{"route": [[lat, lon], ...]}` indented with 4 spaces.
    /// Missing parent directories are created.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RoutingError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut ser)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RoutingError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
