//! PIREP filing from the ACARS client.
//!
//! A submission is verified, checked against the auto-reject and checkride rules, priced,
//! stored as an approved flight and then applied to the airline ledger, the pilot's career,
//! the aircraft that flew it and any activity, tour or event it counts for.

pub mod credits;
pub mod economy;
pub mod progress;
pub mod signature;

mod damage;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::pirep::{PirepResultDto, PirepSubmissionDto},
    server::{
        config::Config,
        data::{
            active_flight::ActiveFlightRepository, aircraft::AircraftRepository,
            bid::BidRepository, config::ConfigRepository, dotm::DotmRepository,
            event::EventRepository, finance::FinanceRepository, flight::FlightRepository,
            maintenance_log::MaintenanceLogRepository, pilot::PilotRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            bid::Bid,
            economy::{ledger, AirlineAdjustment, CreateFinanceLogParam, EconomyConfig},
            fleet::{Aircraft, CreateMaintenanceLogParam},
            flight::{ApprovalStatus, CreateFlightParam, Deduction, Flight, LandingGrade},
            pilot::{FlightStatsParam, Pilot},
        },
        service::{
            discord::{DiscordNotifier, ModerationAlert},
            pilot::PilotService,
        },
        util::parse::parse_icao,
    },
};

use self::{
    credits::{CreditBreakdown, CreditInput},
    damage::WearInput,
    economy::{EconomyInput, FlightEconomy, ReviewBucket},
    progress::FlownLeg,
};

/// Landing rates below this raise a moderation alert.
const MODERATION_LANDING_RATE: f64 = -800.0;
const CHECKRIDE_PREFIXES: [&str; 2] = ["CHK", "EXAM"];
const CHECKRIDE_MAX_RATE: f64 = -400.0;
const CHECKRIDE_MAX_G: f64 = 1.6;
const DEFAULT_ACARS_VERSION: &str = "1.0.0";

/// Server-side rules applied to every submission.
#[derive(Debug, Clone)]
pub struct PirepPolicy {
    /// Signing secret; unsigned submissions are accepted when `None`.
    pub app_key: Option<String>,
    /// Landing rates at or below this are rejected outright.
    pub auto_reject_landing_rate: f64,
}

impl Default for PirepPolicy {
    fn default() -> Self {
        Self {
            app_key: None,
            auto_reject_landing_rate: -700.0,
        }
    }
}

impl PirepPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            app_key: config.app_key.clone(),
            auto_reject_landing_rate: config.auto_reject_landing_rate,
        }
    }
}

pub struct PirepService<'a> {
    pub db: &'a DatabaseConnection,
    pub notifier: &'a DiscordNotifier,
    pub policy: PirepPolicy,
}

impl<'a> PirepService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        notifier: &'a DiscordNotifier,
        policy: PirepPolicy,
    ) -> Self {
        Self {
            db,
            notifier,
            policy,
        }
    }

    /// Files a PIREP submitted by the ACARS client.
    ///
    /// Rejections for a hard landing or a failed checkride are stored as rejected flights and
    /// answered with `success: true` and an explanatory message. Failures after the flight
    /// record is written in the non-critical steps are logged and skipped.
    ///
    /// # Arguments
    /// - `dto` - The submission, optionally signed
    ///
    /// # Returns
    /// - `Ok(PirepResultDto)` - Outcome message, pay breakdown and aircraft health
    /// - `Err(AppError::AcarsErr)` - Unsigned, tampered or stale submission
    /// - `Err(AppError::NotFound)` - Unknown pilot
    /// - `Err(AppError::AuthErr)` - Blacklisted pilot
    /// - `Err(AppError::BadRequest)` - Missing callsign or invalid airports
    pub async fn submit(&self, dto: PirepSubmissionDto) -> Result<PirepResultDto, AppError> {
        if let Some(secret) = self.policy.app_key.as_deref().filter(|k| !k.is_empty()) {
            signature::check(secret, &dto, Utc::now().timestamp_millis())?;
        }

        let pilot = PilotService::new(self.db).find_for_acars(&dto.pilot_id).await?;
        if pilot.is_blacklisted() {
            return Err(AuthError::Blacklisted(pilot.pilot_id.clone()).into());
        }

        let submission = Submission::from_dto(dto)?;

        if submission.landing_rate < MODERATION_LANDING_RATE {
            self.notifier
                .moderation(
                    ModerationAlert::HardLanding,
                    &pilot.full_name(),
                    &pilot.pilot_id,
                    format!(
                        "Landing rate: **{} fpm** on {} ({}→{})",
                        submission.landing_rate,
                        submission.callsign,
                        submission.departure_icao,
                        submission.arrival_icao
                    ),
                )
                .await;
        }

        let threshold = self.policy.auto_reject_landing_rate;
        if submission.landing_rate <= threshold {
            self.store_rejected(&pilot, &submission, submission.comments.clone())
                .await?;
            tracing::info!(
                "Auto-rejected PIREP {} from {} at {} fpm",
                submission.callsign,
                pilot.pilot_id,
                submission.landing_rate
            );
            return Ok(PirepResultDto::message(format!(
                "PIREP REJECTED! Landing rate of {} fpm exceeds threshold of {} fpm.",
                submission.landing_rate, threshold
            )));
        }

        let checkride = submission.checkride();
        if let Checkride::Failed(reason) = checkride {
            self.store_rejected(
                &pilot,
                &submission,
                Some(format!("CHECKRIDE FAILED: {}", reason)),
            )
            .await?;
            tracing::info!(
                "{} failed checkride {}: {}",
                pilot.pilot_id,
                submission.flight_number,
                reason
            );
            return Ok(PirepResultDto::message(format!(
                "Checkride FAILED: {}. Please try again.",
                reason
            )));
        }

        self.accept(pilot, submission, checkride == Checkride::Passed)
            .await
    }

    async fn accept(
        &self,
        pilot: Pilot,
        submission: Submission,
        checkride_passed: bool,
    ) -> Result<PirepResultDto, AppError> {
        let config = ConfigRepository::new(self.db).get_or_create().await?;
        let now = Utc::now();

        let (pax, cargo) = economy::simulated_load(submission.pax, submission.cargo);
        let economy = FlightEconomy::calculate(
            &config,
            &EconomyInput {
                pax,
                cargo,
                distance_nm: submission.distance_nm,
                fuel_used: submission.fuel_used,
                flight_time_minutes: submission.flight_time_minutes,
                score: submission.score,
            },
        );

        let dotm_bonus = self.dotm_bonus(&submission, now).await?;
        let butter_bonus = submission
            .butter_score
            .map(economy::butter_bonus)
            .unwrap_or(0);

        let flight = FlightRepository::new(self.db)
            .create(CreateFlightParam {
                landing_grade: LandingGrade::from_rate(submission.landing_rate)
                    .as_str()
                    .to_string(),
                max_g_force: submission
                    .touchdown_g
                    .filter(|g| *g != 0.0)
                    .or(submission.max_g_force.filter(|g| *g != 0.0))
                    .unwrap_or(1.0),
                pax,
                cargo,
                revenue_passenger: economy.revenue_passenger,
                revenue_cargo: economy.revenue_cargo,
                expense_fuel: economy.expense_fuel,
                expense_airport: economy.expense_landing,
                expense_pilot: economy.expense_pilot,
                expense_maintenance: economy.expense_maintenance,
                real_profit: economy.net_profit(),
                passenger_rating: economy::passenger_rating(submission.score),
                passenger_review: Some(
                    ReviewBucket::from_landing(submission.landing_rate, submission.score).pick(),
                ),
                ..submission.flight_param(&pilot, ApprovalStatus::Approved, submission.comments.clone())
            })
            .await?;

        let is_event_flight = self.match_event(&pilot, &submission, &flight).await?;

        self.record_ledger(&pilot, &submission, &flight, &economy)
            .await?;

        let earned = economy.net_pilot_pay() + dotm_bonus + butter_bonus;
        PilotRepository::new(self.db)
            .apply_flight_stats(
                pilot.id,
                FlightStatsParam {
                    hours: submission.flight_time_minutes as f64 / 60.0,
                    revenue: economy.total_revenue(),
                    pay: earned,
                    location: submission.arrival_icao.clone(),
                },
            )
            .await?;

        let bid = BidRepository::new(self.db)
            .find_open_by_callsign(pilot.id, &submission.callsign)
            .await?;
        let aircraft_health = self
            .wear_aircraft(&pilot, &submission, &flight, &config, bid.as_ref())
            .await?;
        if let Some(bid) = &bid {
            BidRepository::new(self.db).delete(bid.id).await?;
        }

        let leg = FlownLeg {
            departure_icao: &submission.departure_icao,
            arrival_icao: &submission.arrival_icao,
            aircraft_type: &submission.aircraft_type,
        };
        let mut progress_message = String::new();
        match self.advance_activity(&pilot, bid.as_ref(), &leg).await {
            Ok(Some(message)) => progress_message.push_str(&message),
            Ok(None) => {}
            Err(e) => tracing::error!("Activity progress failed for {}: {}", pilot.pilot_id, e),
        }
        match self.advance_tours(&pilot, &leg).await {
            Ok(message) => progress_message.push_str(&message),
            Err(e) => tracing::error!("Tour progress failed for {}: {}", pilot.pilot_id, e),
        }

        ActiveFlightRepository::new(self.db)
            .delete_by_callsign(pilot.id, &submission.callsign)
            .await?;

        self.notifier
            .landing(
                &pilot.full_name(),
                &pilot.pilot_id,
                &submission.callsign,
                &submission.arrival_icao,
                submission.landing_rate,
                submission.score,
            )
            .await;

        let new_rank = match self.reload_pilot(pilot.id).await? {
            Some(updated) => {
                PilotService::new(self.db)
                    .check_rank_promotion(&updated, self.notifier)
                    .await?
            }
            None => None,
        };

        let credits = match self
            .award_credits(&pilot, &submission, &flight, &config, bid.as_ref(), is_event_flight, now)
            .await
        {
            Ok(credits) => Some(credits),
            Err(e) => {
                tracing::error!("Credit calculation failed for {}: {}", pilot.pilot_id, e);
                None
            }
        };

        let net_profit = economy.net_profit();
        let mut message = format!(
            "PIREP accepted. Airline Profit: {}{}cr. You earned: {}cr.",
            if net_profit > 0 { "+" } else { "" },
            net_profit,
            earned
        );
        if let Some(credits) = &credits {
            message.push_str(&format!(" +{} bonus CR", credits.total));
        }
        if checkride_passed {
            message.push_str(" CHECKRIDE PASSED!");
        }
        if dotm_bonus > 0 {
            message.push_str(&format!(" (Includes {} DOTM Bonus!)", dotm_bonus));
        }
        if butter_bonus > 0 {
            message.push_str(&format!(" (Includes {} Butter Bonus!)", butter_bonus));
        }
        message.push_str(&progress_message);
        if let Some(rank) = &new_rank {
            message.push_str(&format!(" PROMOTION: {}!", rank));
        }

        tracing::info!(
            "Accepted PIREP {} from {} ({}-{}, {} fpm)",
            flight.id,
            pilot.pilot_id,
            submission.departure_icao,
            submission.arrival_icao,
            submission.landing_rate
        );

        let (bonus_credits, credits_breakdown) = credits
            .map(|c| (c.total, c.details))
            .unwrap_or_default();

        Ok(PirepResultDto {
            success: true,
            message,
            credits_earned: earned,
            bonus_credits,
            credits_breakdown,
            new_rank,
            aircraft_health,
            revenue_breakdown: Some(economy.breakdown(dotm_bonus, butter_bonus)),
        })
    }

    /// Stores a rejected flight and clears the pilot's live flight and open bids.
    async fn store_rejected(
        &self,
        pilot: &Pilot,
        submission: &Submission,
        comments: Option<String>,
    ) -> Result<Flight, AppError> {
        let flight = FlightRepository::new(self.db)
            .create(submission.flight_param(pilot, ApprovalStatus::Rejected, comments))
            .await?;

        ActiveFlightRepository::new(self.db)
            .delete_by_callsign(pilot.id, &submission.callsign)
            .await?;
        BidRepository::new(self.db)
            .delete_open_for_pilot(pilot.id)
            .await?;

        Ok(flight)
    }

    /// Bonus for flying to or from the active destination of the month.
    ///
    /// A destination whose month has passed is deactivated.
    async fn dotm_bonus(
        &self,
        submission: &Submission,
        now: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let dotm_repo = DotmRepository::new(self.db);
        let Some(dotm) = dotm_repo.find_active().await? else {
            return Ok(0);
        };

        if !dotm.is_current(now) {
            dotm_repo.deactivate(dotm.id).await?;
            tracing::info!("Deactivated expired destination of the month {}", dotm.airport_icao);
            return Ok(0);
        }

        let touches = submission.departure_icao == dotm.airport_icao
            || submission.arrival_icao == dotm.airport_icao;
        Ok(if touches { dotm.bonus_points } else { 0 })
    }

    /// Links the flight to the pilot's latest booked event when the flight qualifies.
    ///
    /// Older bookings are never considered, even when the latest one does not match.
    async fn match_event(
        &self,
        pilot: &Pilot,
        submission: &Submission,
        flight: &Flight,
    ) -> Result<bool, AppError> {
        let event_repo = EventRepository::new(self.db);

        let Some(booking) = event_repo.latest_booked_for_pilot(pilot.id).await? else {
            return Ok(false);
        };
        let Some(event) = event_repo.find_by_id(booking.event_id).await? else {
            return Ok(false);
        };
        if !event.matches_flight(
            &submission.departure_icao,
            &submission.arrival_icao,
            flight.submitted_at,
        ) {
            return Ok(false);
        }

        event_repo.mark_attended(booking.id, flight.id).await?;
        FlightRepository::new(self.db)
            .set_event(flight.id, event.id)
            .await?;
        tracing::info!("Flight {} attended event {}", flight.id, event.title);

        Ok(true)
    }

    /// Writes the six ledger entries of the flight and updates the airline account.
    async fn record_ledger(
        &self,
        pilot: &Pilot,
        submission: &Submission,
        flight: &Flight,
        economy: &FlightEconomy,
    ) -> Result<(), AppError> {
        let finance_repo = FinanceRepository::new(self.db);
        let reference = flight.id.to_string();
        let callsign = &submission.callsign;
        let entry = |kind: &'static str, amount: i64, description: String| CreateFinanceLogParam {
            pilot_id: Some(pilot.id),
            kind,
            amount,
            description,
            reference_id: Some(reference.clone()),
        };

        finance_repo
            .log_many(vec![
                entry(
                    ledger::FLIGHT_REVENUE,
                    economy.total_revenue(),
                    format!(
                        "Revenue Flight {} ({}-{})",
                        callsign, submission.departure_icao, submission.arrival_icao
                    ),
                ),
                entry(
                    ledger::FUEL_COST,
                    -economy.expense_fuel,
                    format!("Fuel for {}", callsign),
                ),
                entry(
                    ledger::LANDING_FEE,
                    -economy.expense_landing,
                    format!("Landing Fees at {}", submission.arrival_icao),
                ),
                entry(
                    ledger::PILOT_PAY,
                    -economy.expense_pilot,
                    format!("Pilot Salary for {}", pilot.full_name()),
                ),
                entry(
                    ledger::MAINTENANCE,
                    -economy.expense_maintenance,
                    format!("Wear & Tear for {}", submission.aircraft_type),
                ),
                entry(
                    ledger::REVENUE_SPLIT,
                    economy.total_deductions(),
                    format!(
                        "Vault deposit: FuelTax {} Cr + Penalties {} Cr from {}",
                        economy.fuel_tax, economy.penalty, callsign
                    ),
                ),
            ])
            .await?;

        finance_repo
            .adjust_airline(AirlineAdjustment {
                balance: economy.net_profit() + economy.total_deductions(),
                revenue: economy.total_revenue(),
                expenses: economy.total_expenses(),
            })
            .await?;

        Ok(())
    }

    /// Applies wear to the aircraft that flew the PIREP and returns its health afterwards.
    ///
    /// The aircraft is looked up by the submitted registration, then the bid's registration,
    /// then any aircraft of the type at the departure airport. Without an aircraft the health
    /// is reported as 100.
    async fn wear_aircraft(
        &self,
        pilot: &Pilot,
        submission: &Submission,
        flight: &Flight,
        config: &EconomyConfig,
        bid: Option<&Bid>,
    ) -> Result<f64, AppError> {
        let Some(aircraft) = self.find_flown_aircraft(submission, bid).await? else {
            return Ok(100.0);
        };

        let outcome = damage::wear(
            &aircraft,
            &WearInput {
                callsign: &submission.callsign,
                arrival_icao: &submission.arrival_icao,
                landing_rate: submission.landing_rate,
                touchdown_g: submission.touchdown_g,
                reported_damage: submission.reported_damage,
                flight_time_minutes: submission.flight_time_minutes,
                flight_id: flight.id,
                pilot_id: &pilot.pilot_id,
                grounded_threshold: config.grounded_health_threshold,
                repair_hours_per_percent: config.repair_hours_per_percent,
                now: Utc::now(),
            },
        );
        let condition = outcome.param.condition;

        AircraftRepository::new(self.db)
            .apply_wear(aircraft.id, outcome.param)
            .await?;

        if let Some(kind) = outcome.log_kind {
            MaintenanceLogRepository::new(self.db)
                .create(CreateMaintenanceLogParam {
                    aircraft_registration: aircraft.registration.clone(),
                    kind,
                    health_before: aircraft.condition,
                    health_after: condition,
                    cost: 0,
                    description: format!(
                        "Flight {}: {:.1}% damage (LR: {} fpm)",
                        submission.callsign, outcome.damage, submission.landing_rate
                    ),
                    flight_id: Some(flight.id),
                    pilot_id: Some(pilot.pilot_id.clone()),
                    performed_by: None,
                })
                .await?;
        }

        if condition < config.grounded_health_threshold {
            tracing::warn!(
                "{} grounded at {:.1}% after {}",
                aircraft.registration,
                condition,
                submission.callsign
            );
        }

        Ok(condition)
    }

    async fn find_flown_aircraft(
        &self,
        submission: &Submission,
        bid: Option<&Bid>,
    ) -> Result<Option<Aircraft>, AppError> {
        let aircraft_repo = AircraftRepository::new(self.db);

        if let Some(registration) = &submission.aircraft_registration {
            if let Some(aircraft) = aircraft_repo.find_by_registration(registration).await? {
                return Ok(Some(aircraft));
            }
        }
        if let Some(registration) = bid.and_then(|b| b.aircraft_registration.as_deref()) {
            if let Some(aircraft) = aircraft_repo.find_by_registration(registration).await? {
                return Ok(Some(aircraft));
            }
        }
        if submission.aircraft_type.is_empty() {
            return Ok(None);
        }

        Ok(aircraft_repo
            .find_by_type_at(&submission.aircraft_type, &submission.departure_icao)
            .await?)
    }

    #[allow(clippy::too_many_arguments)]
    async fn award_credits(
        &self,
        pilot: &Pilot,
        submission: &Submission,
        flight: &Flight,
        config: &EconomyConfig,
        bid: Option<&Bid>,
        is_event_flight: bool,
        now: DateTime<Utc>,
    ) -> Result<CreditBreakdown, AppError> {
        let deductions: Vec<_> = submission
            .deductions
            .iter()
            .cloned()
            .map(Deduction::into_dto)
            .collect();

        let breakdown = credits::calculate(
            config,
            &CreditInput {
                departure_icao: &submission.departure_icao,
                arrival_icao: &submission.arrival_icao,
                landing_rate: submission.landing_rate,
                flight_time_minutes: submission.flight_time_minutes,
                fuel_used: submission.fuel_used,
                planned_fuel: bid.and_then(|b| b.planned_fuel),
                deductions: &deductions,
                is_event_flight,
                routes_flown: &pilot.routes_flown,
                last_flight_date: pilot.last_flight_date,
                now,
            },
        );

        if breakdown.total > 0 {
            PilotRepository::new(self.db)
                .award_credits(
                    pilot.id,
                    breakdown.total,
                    &credits::route_key(&submission.departure_icao, &submission.arrival_icao),
                    now,
                )
                .await?;
        }
        FlightRepository::new(self.db)
            .set_credits(flight.id, breakdown.total, &breakdown.details)
            .await?;

        Ok(breakdown)
    }

    async fn reload_pilot(&self, id: i32) -> Result<Option<Pilot>, AppError> {
        Ok(PilotRepository::new(self.db).find_by_id(id).await?)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Checkride {
    NotApplicable,
    Passed,
    Failed(&'static str),
}

/// Normalised submission fields used through the filing pipeline.
#[derive(Debug, Clone)]
struct Submission {
    flight_number: String,
    callsign: String,
    departure_icao: String,
    arrival_icao: String,
    alternate_icao: Option<String>,
    route: Option<String>,
    aircraft_type: String,
    aircraft_registration: Option<String>,
    flight_time_minutes: i32,
    landing_rate: f64,
    fuel_used: f64,
    distance_nm: f64,
    pax: Option<i32>,
    cargo: Option<i32>,
    score: i32,
    comfort_score: f64,
    deductions: Vec<Deduction>,
    butter_score: Option<f64>,
    touchdown_g: Option<f64>,
    max_g_force: Option<f64>,
    reported_damage: Option<f64>,
    comments: Option<String>,
    acars_version: String,
}

impl Submission {
    fn from_dto(dto: PirepSubmissionDto) -> Result<Self, AppError> {
        let callsign = dto.callsign.trim().to_uppercase();
        if callsign.is_empty() {
            return Err(AppError::BadRequest("Callsign is required".to_string()));
        }

        let log = dto.log.unwrap_or_default();
        let analysis = log.landing_analysis;

        Ok(Self {
            flight_number: dto
                .flight_number
                .map(|f| f.trim().to_uppercase())
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            callsign,
            departure_icao: parse_icao(&dto.departure_icao)?,
            arrival_icao: parse_icao(&dto.arrival_icao)?,
            alternate_icao: dto.alternate_icao.filter(|a| !a.trim().is_empty()),
            route: dto.route,
            aircraft_type: dto.aircraft_type.trim().to_uppercase(),
            aircraft_registration: dto
                .aircraft_registration
                .map(|r| r.trim().to_uppercase())
                .filter(|r| !r.is_empty()),
            flight_time_minutes: dto.flight_time_minutes.max(0),
            landing_rate: dto.landing_rate,
            fuel_used: dto.fuel_used.max(0.0),
            distance_nm: dto.distance_nm.max(0.0),
            pax: dto.pax,
            cargo: dto.cargo,
            score: dto.score.filter(|s| *s != 0).unwrap_or(100),
            comfort_score: dto.comfort_score.filter(|c| *c != 0.0).unwrap_or(100.0),
            deductions: log.deductions.into_iter().map(Deduction::from_dto).collect(),
            butter_score: analysis.as_ref().map(|a| a.butter_score),
            touchdown_g: analysis.and_then(|a| a.g_force_touchdown),
            max_g_force: log.max_g_force,
            reported_damage: dto.airframe_damage.map(|d| d.total_damage),
            comments: dto.comments,
            acars_version: dto
                .acars_version
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ACARS_VERSION.to_string()),
        })
    }

    fn checkride(&self) -> Checkride {
        if !CHECKRIDE_PREFIXES
            .iter()
            .any(|p| self.flight_number.starts_with(p))
        {
            return Checkride::NotApplicable;
        }

        if self
            .touchdown_g
            .is_some_and(|g| g.abs() > CHECKRIDE_MAX_G)
        {
            Checkride::Failed("High G-Force")
        } else if self.landing_rate < CHECKRIDE_MAX_RATE {
            Checkride::Failed("Hard Landing")
        } else {
            Checkride::Passed
        }
    }

    /// Flight record with the submitted route and performance but no economy figures.
    fn flight_param(
        &self,
        pilot: &Pilot,
        status: ApprovalStatus,
        comments: Option<String>,
    ) -> CreateFlightParam {
        CreateFlightParam {
            flight_number: self.flight_number.clone(),
            callsign: self.callsign.clone(),
            departure_icao: self.departure_icao.clone(),
            arrival_icao: self.arrival_icao.clone(),
            alternate_icao: self.alternate_icao.clone(),
            route: self.route.clone(),
            aircraft_type: self.aircraft_type.clone(),
            aircraft_registration: self.aircraft_registration.clone(),
            flight_time: self.flight_time_minutes,
            fuel_used: self.fuel_used,
            distance: self.distance_nm,
            landing_rate: self.landing_rate,
            landing_grade: LandingGrade::from_rate(self.landing_rate)
                .as_str()
                .to_string(),
            pax: self.pax.unwrap_or(0),
            cargo: self.cargo.unwrap_or(0),
            score: self.score,
            deductions: self.deductions.clone(),
            comfort_score: self.comfort_score,
            comments,
            acars_version: Some(self.acars_version.clone()),
            ..CreateFlightParam::bare(pilot.id, pilot.full_name(), status)
        }
    }
}

impl PirepResultDto {
    /// A successful response carrying only a message.
    fn message(message: String) -> Self {
        Self {
            success: true,
            message,
            credits_earned: 0,
            bonus_credits: 0,
            credits_breakdown: Vec::new(),
            new_rank: None,
            aircraft_health: 100.0,
            revenue_breakdown: None,
        }
    }
}
