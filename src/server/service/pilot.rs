//! Pilot roster, profile settings, jumpseat travel, leaderboards, notifications and rank
//! promotion.

use std::collections::HashMap;

use chrono::{Datelike, TimeZone, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::pilot::{LeaderboardEntryDto, PilotSettingsDto},
    server::{
        data::{
            flight::FlightRepository, notification::NotificationRepository,
            pilot::PilotRepository, rank::RankRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            notification::{CreateNotificationParam, Notification, NotificationKind},
            pilot::Pilot,
            rank::Rank,
        },
        service::discord::DiscordNotifier,
        util::parse::parse_icao,
    },
};

/// Flat fare for moving to another airport without flying there.
pub const JUMPSEAT_COST: i64 = 1000;

const ALL_TIME_LIMIT: u64 = 20;
const MONTHLY_LIMIT: usize = 10;
const CREDITS_LIMIT: u64 = 20;
const NOTIFICATION_LIMIT: u64 = 50;

/// Leaderboard variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardKind {
    AllTime,
    Monthly,
    Credits,
}

impl LeaderboardKind {
    /// Parses the `type` query value; anything unrecognised is the all-time board.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("monthly") => Self::Monthly,
            Some("credits") => Self::Credits,
            _ => Self::AllTime,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllTime => "all-time",
            Self::Monthly => "monthly",
            Self::Credits => "credits",
        }
    }
}

pub struct PilotService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PilotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the pilot behind an ACARS call by callsign, email or numeric id.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - Matching pilot
    /// - `Err(AppError::BadRequest)` - Identifier missing
    /// - `Err(AppError::NotFound)` - No pilot matches
    pub async fn find_for_acars(&self, identifier: &str) -> Result<Pilot, AppError> {
        if identifier.trim().is_empty() {
            return Err(AppError::BadRequest("pilotId is required".to_string()));
        }

        PilotRepository::new(self.db)
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pilot '{}' not found", identifier.trim())))
    }

    /// Public roster of Active pilots, most hours first.
    pub async fn roster(&self) -> Result<Vec<Pilot>, AppError> {
        Ok(PilotRepository::new(self.db).get_active().await?)
    }

    pub async fn update_settings(
        &self,
        pilot_id: i32,
        settings: PilotSettingsDto,
    ) -> Result<Pilot, AppError> {
        PilotRepository::new(self.db)
            .update_settings(
                pilot_id,
                settings.simbrief_id,
                settings.vatsim_cid,
                settings.ivao_vid,
            )
            .await?
            .ok_or_else(|| AuthError::PilotNotInDatabase(pilot_id).into())
    }

    /// Moves a pilot to another airport for the flat jumpseat fare.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - Pilot at the new location with the fare deducted
    /// - `Err(AppError::BadRequest)` - Invalid ICAO, already there, or balance below the fare
    pub async fn jumpseat(&self, pilot_id: i32, destination: &str) -> Result<Pilot, AppError> {
        let pilot_repo = PilotRepository::new(self.db);

        let destination = parse_icao(destination)?;
        let Some(pilot) = pilot_repo.find_by_id(pilot_id).await? else {
            return Err(AuthError::PilotNotInDatabase(pilot_id).into());
        };

        if pilot.current_location == destination {
            return Err(AppError::BadRequest(format!(
                "You are already at {}",
                destination
            )));
        }
        if pilot.balance < JUMPSEAT_COST {
            return Err(AppError::BadRequest(format!(
                "Insufficient balance: jumpseat costs {} Cr",
                JUMPSEAT_COST
            )));
        }

        let pilot = pilot_repo
            .relocate(pilot.id, destination, JUMPSEAT_COST)
            .await?
            .ok_or(AuthError::PilotNotInDatabase(pilot_id))?;

        tracing::info!(
            "{} jumpseated to {}",
            pilot.pilot_id,
            pilot.current_location
        );

        Ok(pilot)
    }

    /// Builds a leaderboard.
    ///
    /// All-time ranks Active pilots by total hours; monthly ranks by hours of approved flights
    /// submitted since the start of the current UTC month; credits ranks by balance.
    pub async fn leaderboard(
        &self,
        kind: LeaderboardKind,
    ) -> Result<Vec<LeaderboardEntryDto>, AppError> {
        let pilot_repo = PilotRepository::new(self.db);

        let entries = match kind {
            LeaderboardKind::AllTime => pilot_repo
                .top_by_hours(ALL_TIME_LIMIT)
                .await?
                .into_iter()
                .map(|p| career_entry(&p))
                .collect(),
            LeaderboardKind::Credits => pilot_repo
                .top_by_balance(CREDITS_LIMIT)
                .await?
                .into_iter()
                .map(|p| LeaderboardEntryDto {
                    credits: p.balance,
                    ..career_entry(&p)
                })
                .collect(),
            LeaderboardKind::Monthly => self.monthly_entries().await?,
        };

        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| LeaderboardEntryDto {
                position: i as u32 + 1,
                ..entry
            })
            .collect())
    }

    async fn monthly_entries(&self) -> Result<Vec<LeaderboardEntryDto>, AppError> {
        let now = Utc::now();
        let month_start = Utc
            .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
            .single()
            .unwrap_or(now);

        let flights = FlightRepository::new(self.db)
            .approved_since(month_start)
            .await?;

        // pilot id -> (minutes, flights, credits)
        let mut totals: HashMap<i32, (i64, i64, i64)> = HashMap::new();
        for flight in flights {
            let entry = totals.entry(flight.pilot_id).or_default();
            entry.0 += flight.flight_time as i64;
            entry.1 += 1;
            entry.2 += flight.credits_earned;
        }

        let ids: Vec<i32> = totals.keys().copied().collect();
        let pilots = PilotRepository::new(self.db).find_by_ids(&ids).await?;

        let mut entries: Vec<LeaderboardEntryDto> = pilots
            .iter()
            .filter_map(|pilot| {
                let (minutes, flights, credits) = totals.get(&pilot.id)?;
                Some(LeaderboardEntryDto {
                    position: 0,
                    pilot_id: pilot.pilot_id.clone(),
                    name: pilot.full_name(),
                    rank: pilot.rank.clone(),
                    hours: round1(*minutes as f64 / 60.0),
                    flights: *flights,
                    credits: *credits,
                })
            })
            .collect();

        entries.sort_by(|a, b| b.hours.total_cmp(&a.hours));
        entries.truncate(MONTHLY_LIMIT);

        Ok(entries)
    }

    pub async fn notifications(&self, pilot_id: i32) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .for_pilot(pilot_id, NOTIFICATION_LIMIT)
            .await?)
    }

    /// Marks notifications read; an empty id list marks all of the pilot's notifications.
    pub async fn mark_notifications_read(
        &self,
        pilot_id: i32,
        ids: &[i32],
    ) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_read(pilot_id, ids)
            .await?)
    }

    /// Promotes a pilot to the most senior auto-promote rank they now qualify for.
    ///
    /// Only ranks ordered above the pilot's current rank are considered. A promotion posts
    /// to the rank webhook and leaves a RankUp notification.
    ///
    /// # Returns
    /// - `Ok(Some(rank))` - Name of the new rank
    /// - `Ok(None)` - No promotion due
    pub async fn check_rank_promotion(
        &self,
        pilot: &Pilot,
        notifier: &DiscordNotifier,
    ) -> Result<Option<String>, AppError> {
        let ranks = RankRepository::new(self.db).get_all().await?;

        let Some(next) = next_rank(&ranks, pilot) else {
            return Ok(None);
        };
        let rank_name = next.name.clone();

        PilotRepository::new(self.db)
            .set_rank(pilot.id, &rank_name)
            .await?;
        NotificationRepository::new(self.db)
            .create(CreateNotificationParam {
                pilot_id: pilot.id,
                kind: NotificationKind::RankUp,
                title: "Rank Promotion".to_string(),
                message: format!("Congratulations! You have been promoted to {}.", rank_name),
                link: Some("/dashboard".to_string()),
            })
            .await?;

        tracing::info!("{} promoted to {}", pilot.pilot_id, rank_name);

        notifier
            .rank_promotion(&pilot.full_name(), &pilot.pilot_id, &rank_name)
            .await;

        Ok(Some(rank_name))
    }
}

/// Highest-order auto-promote rank above the pilot's current one whose requirements are met.
fn next_rank<'r>(ranks: &'r [Rank], pilot: &Pilot) -> Option<&'r Rank> {
    let current_order = ranks
        .iter()
        .find(|r| r.name == pilot.rank)
        .map(|r| r.order)
        .unwrap_or(i32::MIN);

    ranks
        .iter()
        .filter(|r| r.auto_promote && r.order > current_order)
        .filter(|r| r.is_met_by(pilot.career_hours(), pilot.total_flights))
        .max_by_key(|r| r.order)
}

fn career_entry(pilot: &Pilot) -> LeaderboardEntryDto {
    LeaderboardEntryDto {
        position: 0,
        pilot_id: pilot.pilot_id.clone(),
        name: pilot.full_name(),
        rank: pilot.rank.clone(),
        hours: round1(pilot.total_hours),
        flights: pilot.total_flights as i64,
        credits: pilot.total_credits,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
