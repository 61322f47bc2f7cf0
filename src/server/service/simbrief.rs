//! SimBrief flight plan lookup for pilots with a linked SimBrief account.

use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    model::acars::{OfpSummaryDto, SimbriefPlanDto},
    server::{error::AppError, model::pilot::Pilot},
};

pub const SIMBRIEF_FETCHER_URL: &str = "https://www.simbrief.com/api/xml.fetcher.php";

pub struct SimbriefService<'a> {
    pub http_client: &'a reqwest::Client,
    pub base_url: &'a str,
}

impl<'a> SimbriefService<'a> {
    pub fn new(http_client: &'a reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: SIMBRIEF_FETCHER_URL,
        }
    }

    /// Latest flight plan generated by the pilot on SimBrief.
    ///
    /// # Returns
    /// - `Ok(SimbriefPlanDto)` - The pilot's SimBrief id and plan summary
    /// - `Err(AppError::BadRequest)` - Pilot has not linked a SimBrief id
    /// - `Err(AppError::NotFound)` - SimBrief has no plan for the id
    /// - `Err(AppError::InternalError)` - SimBrief could not be reached
    pub async fn plan_for(&self, pilot: &Pilot) -> Result<SimbriefPlanDto, AppError> {
        let simbrief_id = linked_id(pilot.simbrief_id.as_deref())?;

        let flight_plan = self.latest_ofp(&simbrief_id).await?;

        Ok(SimbriefPlanDto {
            simbrief_id,
            flight_plan,
        })
    }

    pub async fn latest_ofp(&self, simbrief_id: &str) -> Result<OfpSummaryDto, AppError> {
        let response = self
            .http_client
            .get(self.base_url)
            .query(&[("userid", simbrief_id), ("json", "v2")])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(
                "SimBrief fetch for {} returned {}",
                simbrief_id,
                response.status()
            );
            return Err(AppError::InternalError(
                "Failed to fetch from SimBrief".to_string(),
            ));
        }

        let body = response.json::<Value>().await?;

        parse_ofp(&body).ok_or_else(|| {
            AppError::NotFound("No flight plan found on SimBrief".to_string())
        })
    }
}

fn linked_id(simbrief_id: Option<&str>) -> Result<String, AppError> {
    simbrief_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest("No SimBrief ID linked to this profile".to_string()))
}

/// Maps a SimBrief JSON fetch into the plan summary; `None` when the fetch did not succeed.
fn parse_ofp(body: &Value) -> Option<OfpSummaryDto> {
    if text(body, "/fetch/status") != "Success" {
        return None;
    }

    Some(OfpSummaryDto {
        callsign: text(body, "/atc/callsign"),
        flight_number: text(body, "/general/flight_number"),
        departure_icao: text(body, "/origin/icao_code"),
        arrival_icao: text(body, "/destination/icao_code"),
        alternate_icao: text(body, "/alternate/icao_code"),
        aircraft_type: text(body, "/aircraft/icaocode"),
        aircraft_registration: text(body, "/aircraft/reg"),
        route: text(body, "/general/route"),
        pax: number(body, "/weights/pax_count"),
        cargo: number(body, "/weights/cargo"),
        cruise_altitude: number(body, "/general/initial_altitude"),
        distance: number(body, "/general/air_distance"),
        fuel: number(body, "/fuel/plan_ramp"),
        flight_time: text(body, "/times/est_time_enroute"),
        origin_metar: text(body, "/weather/orig_metar"),
        dest_metar: text(body, "/weather/dest_metar"),
    })
}

/// SimBrief sends most values as strings; numbers are rendered as text.
fn text(body: &Value, pointer: &str) -> String {
    match body.pointer(pointer) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn number(body: &Value, pointer: &str) -> i64 {
    match body.pointer(pointer) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or_default(),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(|f| f.round() as i64)
            .unwrap_or_default(),
        _ => 0,
    }
}
