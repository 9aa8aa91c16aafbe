use super::error::RoutingError;
use super::route::{Route, RouteSummary};
use crate::sdk::waypoints::Waypoint;

pub trait RoutingProvider: Send + Sync {
    /// Fetches the route through `waypoints`, in order.
    ///
    /// `Ok(None)` means the service answered but had no route to offer.
    fn fetch_route(&self, waypoints: &[Waypoint]) -> Result<Option<(Route, RouteSummary)>, RoutingError>;
}
