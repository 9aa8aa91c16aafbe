pub mod remote;
pub mod types;

pub use remote::{parse_route_body, OsrmProvider};
