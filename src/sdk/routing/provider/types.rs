use serde::Deserialize;

// --- Data Structures for parsing OSRM route responses ---

#[derive(Deserialize, Debug)]
pub struct RouteResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub routes: Option<Vec<OsrmRoute>>,
}
#[derive(Deserialize, Debug)]
pub struct OsrmRoute {
    pub geometry: Geometry,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
}
#[derive(Deserialize, Debug)]
pub struct Geometry {
    pub coordinates: Vec<[f64; 2]>,
}
