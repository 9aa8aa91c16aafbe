pub mod sdk;

pub use sdk::config::RouterConfig;
pub use sdk::fetch::{fetch_and_save, FetchOutcome};
pub use sdk::routing::{OsrmProvider, Route, RouteSummary, RoutingError, RoutingProvider};
pub use sdk::waypoints::{build_coordinate_query, Waypoint, DEFAULT_WAYPOINTS};
