pub mod config;
pub mod fetch;
pub mod routing;
pub mod util;
pub mod waypoints;
