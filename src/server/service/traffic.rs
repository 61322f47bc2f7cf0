//! Live traffic for the portal map: airline flights tracked by ACARS merged with the
//! VATSIM and IVAO network feeds.
//!
//! Network feeds are cached in process for [`FEED_TTL`]. A failed refresh serves the previous
//! snapshot when one exists.

use std::{
    collections::HashSet,
    sync::Arc,
    time::{Duration as StdDuration, Instant},
};

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{
    model::traffic::TrafficFlightDto,
    server::{
        data::active_flight::ActiveFlightRepository, error::AppError,
        model::active_flight::ActiveFlight,
    },
};

pub const VATSIM_DATA_URL: &str = "https://data.vatsim.net/v3/vatsim-data.json";
pub const IVAO_WHAZZUP_URL: &str = "https://api.ivao.aero/v2/tracker/whazzup";

/// Minimum interval between upstream fetches of a network feed.
pub const FEED_TTL: StdDuration = StdDuration::from_secs(15);

/// Airline flights without a heartbeat for this long are left off the map.
pub const VA_WINDOW_MINUTES: i64 = 5;

const FEED_TIMEOUT: StdDuration = StdDuration::from_secs(8);

/// Last successful snapshot of a network feed.
#[derive(Default)]
struct Snapshot {
    flights: Vec<TrafficFlightDto>,
    fetched_at: Option<Instant>,
}

impl Snapshot {
    fn fresh(&self, now: Instant) -> Option<&[TrafficFlightDto]> {
        match self.fetched_at {
            Some(at) if now.duration_since(at) < FEED_TTL => Some(&self.flights),
            _ => None,
        }
    }
}

/// Process-wide cache of the VATSIM and IVAO feeds, shared through the application state.
#[derive(Clone)]
pub struct TrafficCache {
    vatsim_url: String,
    ivao_url: String,
    vatsim: Arc<RwLock<Snapshot>>,
    ivao: Arc<RwLock<Snapshot>>,
}

impl Default for TrafficCache {
    fn default() -> Self {
        Self::new(VATSIM_DATA_URL, IVAO_WHAZZUP_URL)
    }
}

impl TrafficCache {
    pub fn new(vatsim_url: impl Into<String>, ivao_url: impl Into<String>) -> Self {
        Self {
            vatsim_url: vatsim_url.into(),
            ivao_url: ivao_url.into(),
            vatsim: Arc::new(RwLock::new(Snapshot::default())),
            ivao: Arc::new(RwLock::new(Snapshot::default())),
        }
    }
}

#[derive(Deserialize)]
struct VatsimFeed {
    #[serde(default)]
    pilots: Vec<VatsimPilot>,
}

#[derive(Deserialize)]
struct VatsimPilot {
    callsign: String,
    #[serde(default)]
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    altitude: f64,
    #[serde(default)]
    heading: f64,
    #[serde(default)]
    groundspeed: f64,
    flight_plan: Option<VatsimFlightPlan>,
}

#[derive(Deserialize)]
struct VatsimFlightPlan {
    #[serde(default)]
    departure: String,
    #[serde(default)]
    arrival: String,
    #[serde(default)]
    aircraft_short: String,
}

#[derive(Deserialize)]
struct IvaoFeed {
    clients: Option<IvaoClients>,
}

#[derive(Deserialize)]
struct IvaoClients {
    #[serde(default)]
    pilots: Vec<IvaoPilot>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IvaoPilot {
    callsign: Option<String>,
    user_id: Option<i64>,
    last_track: Option<IvaoTrack>,
    flight_plan: Option<IvaoFlightPlan>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IvaoTrack {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    altitude: f64,
    #[serde(default)]
    heading: f64,
    #[serde(default)]
    ground_speed: f64,
    state: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IvaoFlightPlan {
    departure_id: Option<String>,
    arrival_id: Option<String>,
    aircraft_id: Option<String>,
    aircraft: Option<IvaoAircraft>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IvaoAircraft {
    icao_code: Option<String>,
}

pub struct TrafficService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub cache: &'a TrafficCache,
}

impl<'a> TrafficService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        cache: &'a TrafficCache,
    ) -> Self {
        Self {
            db,
            http_client,
            cache,
        }
    }

    /// Flights for the portal map.
    ///
    /// # Arguments
    /// - `global` - Also include IVAO traffic; airline callsigns hide IVAO duplicates
    ///
    /// # Returns
    /// - `Ok(Vec<TrafficFlightDto>)` - Airline flights first, newest heartbeat first
    pub async fn active_flights(&self, global: bool) -> Result<Vec<TrafficFlightDto>, AppError> {
        let cutoff = Utc::now() - Duration::minutes(VA_WINDOW_MINUTES);
        let va = ActiveFlightRepository::new(self.db)
            .updated_since(cutoff)
            .await?;
        let mut flights = dedupe_by_callsign(va);

        if global {
            let ivao = self.ivao().await;
            flights = merge_network(flights, ivao);
        }

        Ok(flights)
    }

    /// Pilots on the VATSIM network.
    ///
    /// # Returns
    /// - `Ok(Vec<TrafficFlightDto>)` - Fresh or previously cached pilots
    /// - `Err(AppError::InternalError)` - Upstream failed and nothing has been cached yet
    pub async fn vatsim(&self) -> Result<Vec<TrafficFlightDto>, AppError> {
        if let Some(flights) = self.cache.vatsim.read().await.fresh(Instant::now()) {
            return Ok(flights.to_vec());
        }

        match self.fetch_vatsim().await {
            Ok(flights) => {
                let mut snapshot = self.cache.vatsim.write().await;
                snapshot.flights = flights.clone();
                snapshot.fetched_at = Some(Instant::now());
                Ok(flights)
            }
            Err(e) => {
                tracing::error!("Failed to fetch VATSIM data: {}", e);
                let snapshot = self.cache.vatsim.read().await;
                if snapshot.fetched_at.is_some() {
                    return Ok(snapshot.flights.clone());
                }
                Err(AppError::InternalError(
                    "Failed to fetch VATSIM data".to_string(),
                ))
            }
        }
    }

    /// Pilots on the IVAO network; an upstream failure serves the previous snapshot.
    pub async fn ivao(&self) -> Vec<TrafficFlightDto> {
        if let Some(flights) = self.cache.ivao.read().await.fresh(Instant::now()) {
            return flights.to_vec();
        }

        match self.fetch_ivao().await {
            Ok(flights) => {
                let mut snapshot = self.cache.ivao.write().await;
                snapshot.flights = flights.clone();
                snapshot.fetched_at = Some(Instant::now());
                flights
            }
            Err(e) => {
                tracing::warn!("IVAO whazzup fetch failed: {}", e);
                self.cache.ivao.read().await.flights.clone()
            }
        }
    }

    async fn fetch_vatsim(&self) -> Result<Vec<TrafficFlightDto>, AppError> {
        let feed = self
            .http_client
            .get(&self.cache.vatsim_url)
            .timeout(FEED_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<VatsimFeed>()
            .await?;

        Ok(map_vatsim(feed))
    }

    async fn fetch_ivao(&self) -> Result<Vec<TrafficFlightDto>, AppError> {
        let feed = self
            .http_client
            .get(&self.cache.ivao_url)
            .header("Accept", "application/json")
            .timeout(FEED_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<IvaoFeed>()
            .await?;

        Ok(map_ivao(feed))
    }
}

/// Keeps the most recently updated flight of each callsign; input is newest first.
fn dedupe_by_callsign(flights: Vec<ActiveFlight>) -> Vec<TrafficFlightDto> {
    let mut seen = HashSet::new();

    flights
        .into_iter()
        .filter(|f| seen.insert(f.callsign.clone()))
        .map(ActiveFlight::into_traffic_dto)
        .collect()
}

fn merge_network(
    mut va: Vec<TrafficFlightDto>,
    network: Vec<TrafficFlightDto>,
) -> Vec<TrafficFlightDto> {
    let callsigns: HashSet<String> = va.iter().map(|f| f.callsign.clone()).collect();
    va.extend(network.into_iter().filter(|f| !callsigns.contains(&f.callsign)));
    va
}

fn or_unknown(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "????".to_string())
}

fn map_vatsim(feed: VatsimFeed) -> Vec<TrafficFlightDto> {
    feed.pilots
        .into_iter()
        .map(|p| {
            let plan = p.flight_plan;
            TrafficFlightDto {
                callsign: p.callsign,
                pilot_name: if p.name.is_empty() {
                    "VATSIM Pilot".to_string()
                } else {
                    p.name
                },
                latitude: p.latitude,
                longitude: p.longitude,
                altitude: p.altitude,
                heading: p.heading,
                ground_speed: p.groundspeed,
                departure: or_unknown(plan.as_ref().map(|f| f.departure.clone())),
                arrival: or_unknown(plan.as_ref().map(|f| f.arrival.clone())),
                aircraft: plan
                    .map(|f| f.aircraft_short)
                    .filter(|a| !a.is_empty())
                    .unwrap_or_else(|| "ACFT".to_string()),
                phase: None,
                source: "vatsim".to_string(),
            }
        })
        .collect()
}

fn map_ivao(feed: IvaoFeed) -> Vec<TrafficFlightDto> {
    let pilots = feed.clients.map(|c| c.pilots).unwrap_or_default();

    pilots
        .into_iter()
        .filter_map(|p| {
            let track = p.last_track?;
            let (latitude, longitude) = (track.latitude?, track.longitude?);
            let plan = p.flight_plan;
            let aircraft = plan.as_ref().and_then(|f| {
                f.aircraft
                    .as_ref()
                    .and_then(|a| a.icao_code.clone())
                    .or_else(|| f.aircraft_id.clone())
            });

            Some(TrafficFlightDto {
                callsign: p.callsign.unwrap_or_else(|| "UNKNOWN".to_string()),
                pilot_name: format!(
                    "IVAO {}",
                    p.user_id.map(|id| id.to_string()).unwrap_or_default()
                ),
                latitude,
                longitude,
                altitude: track.altitude,
                heading: track.heading,
                ground_speed: track.ground_speed,
                departure: or_unknown(plan.as_ref().and_then(|f| f.departure_id.clone())),
                arrival: or_unknown(plan.as_ref().and_then(|f| f.arrival_id.clone())),
                aircraft: or_unknown(aircraft),
                phase: Some(track.state.unwrap_or_else(|| "Unknown".to_string())),
                source: "ivao".to_string(),
            })
        })
        .collect()
}
