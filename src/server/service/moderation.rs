//! Administrator review of filed flights and manual PIREPs from the portal.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        pirep::{ManualPirepDto, PirepDto, UpdatePirepDto},
    },
    server::{
        data::{
            finance::FinanceRepository, flight::FlightRepository,
            notification::NotificationRepository, pilot::PilotRepository, tour::TourRepository,
        },
        error::AppError,
        model::{
            flight::{ApprovalStatus, CreateFlightParam, Flight, FlightFilter, UpdateFlightParam},
            notification::{CreateNotificationParam, NotificationKind},
            pilot::Pilot,
            tour::TourStatus,
        },
        util::parse::{parse_icao, require_text},
    },
};

/// Credits per flight minute for an approved manual PIREP.
pub const MANUAL_CREDITS_PER_MINUTE: i64 = 50;

const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 100;

pub struct ModerationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists flights newest first.
    ///
    /// # Arguments
    /// - `status` - `pending`, `approved` or `denied`; anything else lists every status
    /// - `search` - Substring of the flight number or callsign
    /// - `page` - One-based page, defaults to 1
    /// - `limit` - Page size, defaults to 20
    pub async fn list(
        &self,
        status: Option<&str>,
        search: Option<String>,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<PageDto<PirepDto>, AppError> {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        let (flights, total) = FlightRepository::new(self.db)
            .get_paginated(FlightFilter {
                status: status.and_then(ApprovalStatus::parse),
                search,
                page,
                limit,
            })
            .await?;

        Ok(PageDto {
            items: flights.into_iter().map(Flight::into_dto).collect(),
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        })
    }

    pub async fn get(&self, id: i32) -> Result<Flight, AppError> {
        FlightRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("PIREP {} not found", id)))
    }

    /// Applies an administrator's edits and status decision to a flight.
    ///
    /// Approving a pending manual PIREP credits the pilot for the flight. Approval and
    /// rejection notify the pilot each time they are sent, even when the status is unchanged.
    ///
    /// # Arguments
    /// - `id` - Flight id
    /// - `dto` - Changed fields; `None` keeps the current value
    /// - `reviewer` - Administrator stamped as the reviewer on a status change
    ///
    /// # Returns
    /// - `Ok(Flight)` - The updated flight
    /// - `Err(AppError::NotFound)` - Unknown flight
    /// - `Err(AppError::BadRequest)` - Unknown status, invalid ICAO, or approval of a
    ///   restricted aircraft type
    pub async fn update(
        &self,
        id: i32,
        dto: UpdatePirepDto,
        reviewer: &Pilot,
    ) -> Result<Flight, AppError> {
        let flight_repo = FlightRepository::new(self.db);
        let current = self.get(id).await?;

        let status = match dto.status.as_deref() {
            Some(value) => Some(ApprovalStatus::parse(value).ok_or_else(|| {
                AppError::BadRequest(format!("Unknown PIREP status {}", value))
            })?),
            None => None,
        };

        if status == Some(ApprovalStatus::Approved) {
            let aircraft_type = dto.aircraft_type.as_deref().unwrap_or(&current.aircraft_type);
            if is_restricted_type(aircraft_type) {
                return Err(AppError::BadRequest(
                    "Fleet Violation: A380/A388 aircraft is restricted and cannot be approved."
                        .to_string(),
                ));
            }
        }

        let param = UpdateFlightParam {
            flight_number: dto.flight_number.map(|v| v.trim().to_uppercase()),
            callsign: dto.callsign.map(|v| v.trim().to_uppercase()),
            departure_icao: dto.departure_icao.as_deref().map(parse_icao).transpose()?,
            arrival_icao: dto.arrival_icao.as_deref().map(parse_icao).transpose()?,
            route: dto.route.map(|v| v.trim().to_uppercase()),
            aircraft_type: dto.aircraft_type.map(|v| v.trim().to_uppercase()),
            flight_time: dto.flight_time,
            landing_rate: dto.landing_rate,
            fuel_used: dto.fuel_used,
            distance: dto.distance,
            pax: dto.pax,
            cargo: dto.cargo,
            score: dto.score,
            admin_comments: dto.admin_comments,
            status,
            reviewed_by: status.map(|_| reviewer.pilot_id.clone()),
        };

        let updated = flight_repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("PIREP {} not found", id)))?;

        if status == Some(ApprovalStatus::Approved)
            && current.is_manual
            && current.status == ApprovalStatus::Pending
        {
            let credits = updated.flight_time as i64 * MANUAL_CREDITS_PER_MINUTE;
            PilotRepository::new(self.db)
                .credit_manual_flight(
                    updated.pilot_id,
                    updated.flight_time as f64 / 60.0,
                    credits,
                )
                .await?;
            flight_repo
                .set_credits(updated.id, credits, &[format!("Manual flight: +{} CR", credits)])
                .await?;
            tracing::info!(
                "Credited {} CR to pilot {} for manual PIREP {}",
                credits,
                updated.pilot_id,
                updated.id
            );
        }

        if let Some(status) = status {
            self.notify_decision(&updated, status).await?;
        }

        tracing::info!(
            "{} updated PIREP {} ({})",
            reviewer.pilot_id,
            updated.id,
            updated.status.as_str()
        );

        Ok(updated)
    }

    /// Deletes a flight and backs out what it contributed.
    ///
    /// Pilot statistics are reversed, ledger entries referencing the flight are removed and
    /// a tour completed by this flight as its final leg is reopened.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let flight = self.get(id).await?;

        PilotRepository::new(self.db)
            .reverse_flight_stats(
                flight.pilot_id,
                flight.flight_time as f64 / 60.0,
                flight.revenue(),
            )
            .await?;

        let removed_logs = FinanceRepository::new(self.db)
            .delete_logs_by_reference(&flight.id.to_string())
            .await?;

        self.reopen_tours(&flight).await?;

        FlightRepository::new(self.db).delete(flight.id).await?;

        tracing::info!(
            "Deleted PIREP {} of pilot {} ({} ledger entries)",
            flight.id,
            flight.pilot_id,
            removed_logs
        );

        Ok(())
    }

    /// Files a manual PIREP for review.
    ///
    /// # Returns
    /// - `Ok(Flight)` - Pending flight flagged as manual
    /// - `Err(AppError::BadRequest)` - Missing flight number or aircraft type, invalid ICAO or
    ///   non-positive flight time
    pub async fn file_manual(&self, pilot: &Pilot, dto: ManualPirepDto) -> Result<Flight, AppError> {
        let flight_number = require_text("Flight number", &dto.flight_number)?.to_uppercase();
        let aircraft_type = require_text("Aircraft type", &dto.aircraft_type)?.to_uppercase();
        if dto.flight_time <= 0 {
            return Err(AppError::BadRequest(
                "Flight time must be greater than zero".to_string(),
            ));
        }

        let callsign = dto
            .callsign
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| flight_number.clone());

        let flight = FlightRepository::new(self.db)
            .create(CreateFlightParam {
                flight_number,
                callsign,
                departure_icao: parse_icao(&dto.departure_icao)?,
                arrival_icao: parse_icao(&dto.arrival_icao)?,
                route: dto.route.map(|r| r.trim().to_uppercase()).filter(|r| !r.is_empty()),
                aircraft_type,
                aircraft_registration: dto
                    .aircraft_registration
                    .map(|r| r.trim().to_uppercase())
                    .filter(|r| !r.is_empty()),
                flight_time: dto.flight_time,
                landing_rate: dto.landing_rate,
                fuel_used: dto.fuel_used,
                distance: dto.distance,
                comments: dto.comments,
                is_manual: true,
                ..CreateFlightParam::bare(pilot.id, pilot.full_name(), ApprovalStatus::Pending)
            })
            .await?;

        tracing::info!(
            "{} filed manual PIREP {} {}-{}",
            pilot.pilot_id,
            flight.id,
            flight.departure_icao,
            flight.arrival_icao
        );

        Ok(flight)
    }

    async fn notify_decision(&self, flight: &Flight, status: ApprovalStatus) -> Result<(), AppError> {
        let (kind, title, message) = match status {
            ApprovalStatus::Approved => (
                NotificationKind::PirepApproved,
                "PIREP Approved",
                format!(
                    "Your flight {} ({} → {}) has been approved.",
                    flight.flight_number, flight.departure_icao, flight.arrival_icao
                ),
            ),
            ApprovalStatus::Rejected => (
                NotificationKind::PirepRejected,
                "PIREP Rejected",
                format!(
                    "Your flight {} ({} → {}) was rejected. Reason: {}",
                    flight.flight_number,
                    flight.departure_icao,
                    flight.arrival_icao,
                    flight.admin_comments.as_deref().unwrap_or("No reason provided")
                ),
            ),
            ApprovalStatus::Pending => return Ok(()),
        };

        NotificationRepository::new(self.db)
            .create(CreateNotificationParam {
                pilot_id: flight.pilot_id,
                kind,
                title: title.to_string(),
                message,
                link: Some(format!("/portal/reports/{}", flight.id)),
            })
            .await?;

        Ok(())
    }

    async fn reopen_tours(&self, flight: &Flight) -> Result<(), AppError> {
        let tour_repo = TourRepository::new(self.db);

        for progress in tour_repo.progress_for_pilot(flight.pilot_id).await? {
            if progress.status != TourStatus::Completed.as_str() {
                continue;
            }
            let Some(tour) = tour_repo.find_by_id(progress.tour_id).await? else {
                continue;
            };
            let Some(last) = tour.legs.last() else {
                continue;
            };

            if last.departure_icao == flight.departure_icao
                && last.arrival_icao == flight.arrival_icao
            {
                tour_repo
                    .reopen(progress.id, tour.legs.len() as i32 - 1)
                    .await?;
                tracing::info!(
                    "Reopened tour {} for pilot {} after PIREP {} was deleted",
                    tour.name,
                    flight.pilot_id,
                    flight.id
                );
            }
        }

        Ok(())
    }
}

/// Whether an aircraft type belongs to the A380 family, ignoring spacing and punctuation.
pub fn is_restricted_type(aircraft_type: &str) -> bool {
    let normalized: String = aircraft_type
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect::<String>()
        .to_uppercase();

    ["A380", "A388", "380"].iter().any(|t| normalized.contains(t))
}
