use super::types::RouteResponse;
use crate::sdk::config::RouterConfig;
use crate::sdk::routing::error::{OsrmErrorPayload, RoutingError};
use crate::sdk::routing::route::{Route, RouteSummary};
use crate::sdk::routing::service::RoutingProvider;
use crate::sdk::waypoints::{build_coordinate_query, Waypoint};
use reqwest::blocking::Client;
use reqwest::StatusCode;

// OSRM answers an unroutable request with this code and a 400.
const NO_ROUTE_CODE: &str = "NoRoute";

pub struct OsrmProvider {
    client: Client,
    base_url: String,
    profile: String,
}

impl OsrmProvider {
    pub fn new(config: &RouterConfig) -> Result<Self, RoutingError> {
        // The blocking client defaults to a 30s timeout; `None` lifts it.
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            profile: config.profile.clone(),
        })
    }

    pub fn route_url(&self, waypoints: &[Waypoint]) -> String {
        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.base_url,
            self.profile,
            build_coordinate_query(waypoints)
        )
    }
}

impl RoutingProvider for OsrmProvider {
    fn fetch_route(
        &self,
        waypoints: &[Waypoint],
    ) -> Result<Option<(Route, RouteSummary)>, RoutingError> {
        let url = self.route_url(waypoints);
        log::debug!("[PROVIDER] Calling OSRM route: {}", url);

        let response = match self.client.get(&url).send() {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to send GET request. URL: {}\nError: {}", url, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            return classify_failure(status, text);
        }

        parse_route_body(&text).map_err(|e| {
            log::error!(
                "Failed to parse RouteResponse. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })
    }
}

fn classify_failure(
    status: StatusCode,
    text: String,
) -> Result<Option<(Route, RouteSummary)>, RoutingError> {
    // Try to parse the structured error first
    match serde_json::from_str::<OsrmErrorPayload>(&text) {
        Ok(payload) if payload.code == NO_ROUTE_CODE => {
            log::warn!("OSRM found no route: {}", payload.message);
            Ok(None)
        }
        Ok(payload) => Err(RoutingError::ApiError {
            code: payload.code,
            message: payload.message,
        }),
        Err(_) => {
            log::error!(
                "API returned non-success status: {}. Unparseable Body: {}",
                status,
                text
            );
            Err(RoutingError::RawApiError {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}

/// Parses a successful OSRM route body. `Ok(None)` when `routes` is absent or empty.
pub fn parse_route_body(text: &str) -> Result<Option<(Route, RouteSummary)>, RoutingError> {
    let response: RouteResponse = serde_json::from_str(text)?;
    if let Some(code) = response.code.as_deref().filter(|c| *c != "Ok") {
        log::debug!("OSRM response code: {}", code);
    }

    let Some(first) = response.routes.and_then(|routes| routes.into_iter().next()) else {
        return Ok(None);
    };

    let summary = RouteSummary {
        distance_km: first.distance / 1000.0,
        duration_hours: first.duration / 3600.0,
    };
    Ok(Some((Route::from_geojson(&first.geometry.coordinates), summary)))
}
