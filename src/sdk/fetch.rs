// Fetch a route through the waypoints and persist its geometry for the map front end
use std::path::{Path, PathBuf};

use super::{
    routing::{RouteSummary, RoutingError, RoutingProvider},
    waypoints::{validate, Waypoint},
};

pub const DEFAULT_OUTPUT_PATH: &str = "public/route.json";

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Saved {
        path: PathBuf,
        points: usize,
        summary: RouteSummary,
    },
    /// The service answered without a usable route; nothing was written.
    NoRoute,
}

pub fn fetch_and_save<P: RoutingProvider + ?Sized>(
    provider: &P,
    waypoints: &[Waypoint],
    output: &Path,
) -> Result<FetchOutcome, RoutingError> {
    validate(waypoints)?;
    log::info!("Requesting route through {} waypoints", waypoints.len());

    let Some((route, summary)) = provider.fetch_route(waypoints)? else {
        log::warn!("Routing service returned no routes; {} left untouched", output.display());
        return Ok(FetchOutcome::NoRoute);
    };

    log::info!(
        "Route has {} points ({:.1} km, {:.2} hrs)",
        route.len(),
        summary.distance_km,
        summary.duration_hours
    );

    route.save_to_file(output)?;
    Ok(FetchOutcome::Saved {
        path: output.to_path_buf(),
        points: route.len(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::routing::{parse_route_body, Route};
    use crate::sdk::waypoints::{build_coordinate_query, DEFAULT_WAYPOINTS};
    use std::sync::Mutex;

    /// Answers with a canned OSRM body and remembers what it was asked.
    struct CannedProvider {
        body: String,
        queries: Mutex<Vec<String>>,
    }

    impl CannedProvider {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    impl RoutingProvider for CannedProvider {
        fn fetch_route(
            &self,
            waypoints: &[Waypoint],
        ) -> Result<Option<(Route, RouteSummary)>, RoutingError> {
            self.queries
                .lock()
                .unwrap()
                .push(build_coordinate_query(waypoints));
            parse_route_body(&self.body)
        }
    }

    /// Mirrors the request back as a GeoJSON geometry, the way OSRM would for a straight path.
    struct EchoProvider;

    impl RoutingProvider for EchoProvider {
        fn fetch_route(
            &self,
            waypoints: &[Waypoint],
        ) -> Result<Option<(Route, RouteSummary)>, RoutingError> {
            let coordinates: Vec<[f64; 2]> = build_coordinate_query(waypoints)
                .split(';')
                .map(|pair| {
                    let (lon, lat) = pair.split_once(',').unwrap();
                    [lon.parse().unwrap(), lat.parse().unwrap()]
                })
                .collect();
            let summary = RouteSummary {
                distance_km: 0.0,
                duration_hours: 0.0,
            };
            Ok(Some((Route::from_geojson(&coordinates), summary)))
        }
    }

    #[test]
    fn saves_swapped_geometry() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("route.json");
        let provider = CannedProvider::new(
            r#"{"code":"Ok","routes":[{"geometry":{"coordinates":[[-105.1,39.1],[-105.2,39.2]]},"distance":1200.0,"duration":240.0}]}"#,
        );

        let outcome = fetch_and_save(&provider, &DEFAULT_WAYPOINTS, &output).unwrap();

        match outcome {
            FetchOutcome::Saved { path, points, summary } => {
                assert_eq!(path, output);
                assert_eq!(points, 2);
                assert_eq!(summary.distance_km, 1.2);
            }
            FetchOutcome::NoRoute => panic!("expected a saved route"),
        }
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({"route": [[39.1, -105.1], [39.2, -105.2]]}));
    }

    #[test]
    fn empty_routes_write_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("route.json");
        let provider = CannedProvider::new(r#"{"code":"Ok","routes":[]}"#);

        let outcome = fetch_and_save(&provider, &DEFAULT_WAYPOINTS, &output).unwrap();

        assert_eq!(outcome, FetchOutcome::NoRoute);
        assert!(!output.exists());
    }

    #[test]
    fn provider_sees_waypoints_in_order() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let provider = CannedProvider::new(r#"{"routes":[]}"#);

        fetch_and_save(&provider, &DEFAULT_WAYPOINTS, &dir.path().join("r.json")).unwrap();

        let queries = provider.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].starts_with("-105.222302,39.75123;-105.226298,39.753914;"));
        assert!(queries[0].ends_with(";-105.222378,39.740863;-105.222302,39.75123"));
    }

    #[test]
    fn output_keeps_input_lat_lon_convention() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("public").join("route.json");

        fetch_and_save(&EchoProvider, &DEFAULT_WAYPOINTS, &output).unwrap();

        let route = Route::load_from_file(&output).unwrap();
        assert_eq!(route.points, DEFAULT_WAYPOINTS.to_vec());
    }

    #[test]
    fn invalid_waypoints_never_reach_the_provider() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let provider = CannedProvider::new(r#"{"routes":[]}"#);

        let err = fetch_and_save(&provider, &[Waypoint::new(0.0, 0.0)], &dir.path().join("r.json"))
            .unwrap_err();

        assert!(matches!(err, RoutingError::InvalidWaypoints(_)));
        assert!(provider.queries.lock().unwrap().is_empty());
    }
}
