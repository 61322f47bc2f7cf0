//! Airframe wear from a completed flight.

use chrono::{DateTime, Duration, Utc};

use crate::server::model::fleet::{
    Aircraft, AircraftStatus, AircraftWearParam, DamageEntry, MaintenanceKind, DAMAGE_LOG_LIMIT,
};

/// Wear applied to every flight without reported damage.
const BASE_WEAR: f64 = 0.5;
/// Condition below which a flown aircraft goes to maintenance.
const MAINTENANCE_HEALTH: f64 = 40.0;
/// Landings harder than this start a repair timer.
const REPAIR_TIMER_RATE: f64 = -600.0;
/// Damage at or above this is logged as a hard landing.
const SEVERE_DAMAGE: f64 = 50.0;

pub struct WearInput<'a> {
    pub callsign: &'a str,
    pub arrival_icao: &'a str,
    pub landing_rate: f64,
    pub touchdown_g: Option<f64>,
    pub reported_damage: Option<f64>,
    pub flight_time_minutes: i32,
    pub flight_id: i32,
    pub pilot_id: &'a str,
    pub grounded_threshold: f64,
    pub repair_hours_per_percent: f64,
    pub now: DateTime<Utc>,
}

/// Computed wear and the maintenance log entry to record, if any.
#[derive(Debug, Clone)]
pub struct WearOutcome {
    pub damage: f64,
    pub param: AircraftWearParam,
    pub log_kind: Option<MaintenanceKind>,
}

/// Damage percentage taken by the airframe.
///
/// A positive total reported by the client wins; otherwise hard landings and high touchdown
/// G add to the base wear.
pub fn damage_for(landing_rate: f64, touchdown_g: Option<f64>, reported: Option<f64>) -> f64 {
    if let Some(reported) = reported.filter(|d| *d > 0.0) {
        return reported;
    }

    let mut damage = BASE_WEAR;
    if landing_rate < -400.0 {
        damage += (landing_rate.abs() - 400.0) * 0.1;
    }
    if let Some(g) = touchdown_g.map(f64::abs).filter(|g| *g > 1.8) {
        damage += (g - 1.8) * 10.0;
    }
    damage
}

pub fn wear(aircraft: &Aircraft, input: &WearInput) -> WearOutcome {
    let damage = damage_for(input.landing_rate, input.touchdown_g, input.reported_damage);
    let condition = ((aircraft.condition - damage) * 100.0).round() / 100.0;
    let condition = condition.max(0.0);

    let mut damage_log = aircraft.damage_log.clone();
    let mut log_kind = None;
    if damage > BASE_WEAR {
        damage_log.push(DamageEntry {
            kind: DamageEntry::kind_for(damage).to_string(),
            amount: (damage * 100.0).round() / 100.0,
            timestamp: input.now,
            flight_id: Some(input.flight_id),
        });
        if damage_log.len() > DAMAGE_LOG_LIMIT {
            damage_log.drain(..damage_log.len() - DAMAGE_LOG_LIMIT);
        }
        log_kind = Some(if damage >= SEVERE_DAMAGE {
            MaintenanceKind::DamageHardLanding
        } else {
            MaintenanceKind::DamageFlight
        });
    }

    let mut grounded_reason = None;
    let mut status = if condition < input.grounded_threshold {
        grounded_reason = Some(format!(
            "Health dropped to {:.1}% after flight {}",
            condition, input.callsign
        ));
        AircraftStatus::Grounded
    } else if condition < MAINTENANCE_HEALTH {
        AircraftStatus::Maintenance
    } else {
        AircraftStatus::Available
    };

    let mut repair_until = None;
    let mut damaged_by_pilot = None;
    if input.landing_rate < REPAIR_TIMER_RATE {
        let damage_percent = (input.landing_rate + 400.0).abs() * 0.05;
        let hours = (damage_percent * input.repair_hours_per_percent).ceil() as i64;
        let until = input.now + Duration::hours(hours);

        status = AircraftStatus::Maintenance;
        grounded_reason = Some(format!(
            "Hard landing {} fpm, under repair until {}Z",
            input.landing_rate,
            until.format("%Y-%m-%dT%H:%M")
        ));
        repair_until = Some(until);
        damaged_by_pilot = Some(input.pilot_id.to_string());
    }

    WearOutcome {
        damage,
        param: AircraftWearParam {
            condition,
            location: input.arrival_icao.to_string(),
            hours: input.flight_time_minutes as f64 / 60.0,
            status,
            grounded_reason,
            damage_log,
            repair_until,
            damaged_by_pilot,
        },
        log_kind,
    }
}
