pub mod error;
pub mod provider;
pub mod route;
pub mod service;

pub use error::RoutingError;
pub use provider::{parse_route_body, OsrmProvider};
pub use route::{Route, RouteSummary};
pub use service::RoutingProvider;
