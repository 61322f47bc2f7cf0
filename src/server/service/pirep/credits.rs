//! Bonus credits earned on top of flight pay.

use chrono::{DateTime, Utc};

use crate::{model::pirep::DeductionDto, server::model::economy::EconomyConfig};

/// Airports flown between for the hub-to-hub bonus.
pub const HUB_AIRPORTS: [&str; 6] = ["OJAI", "ORBI", "OSDI", "OERK", "OMDB", "OTHH"];

/// Fuel use within this percentage of the planned figure earns the efficiency bonus.
const FUEL_EFFICIENCY_TOLERANCE_PERCENT: f64 = 5.0;

pub struct CreditInput<'a> {
    pub departure_icao: &'a str,
    pub arrival_icao: &'a str,
    pub landing_rate: f64,
    pub flight_time_minutes: i32,
    pub fuel_used: f64,
    pub planned_fuel: Option<f64>,
    pub deductions: &'a [DeductionDto],
    pub is_event_flight: bool,
    /// Routes the pilot has already flown, as `DEP-ARR`.
    pub routes_flown: &'a [String],
    pub last_flight_date: Option<DateTime<Utc>>,
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreditBreakdown {
    pub base: i64,
    pub landing: i64,
    pub fuel_efficiency: i64,
    pub long_haul: i64,
    pub hub_to_hub: i64,
    pub new_route: i64,
    pub taxi_speed: i64,
    pub light_violation: i64,
    pub overspeed: i64,
    pub multiplier: f64,
    pub total: i64,
    pub details: Vec<String>,
}

pub fn route_key(departure_icao: &str, arrival_icao: &str) -> String {
    format!("{}-{}", departure_icao, arrival_icao)
}

pub fn is_hub(icao: &str) -> bool {
    HUB_AIRPORTS.contains(&icao)
}

pub fn calculate(config: &EconomyConfig, input: &CreditInput) -> CreditBreakdown {
    let mut details = Vec::new();
    let mut multiplier = 1.0;

    let base = config.credits_base_flight;
    details.push(format!("Base flight: +{} CR", base));

    let rate = input.landing_rate;
    let abs_rate = rate.abs();
    let landing = if abs_rate <= 150.0 {
        details.push(format!(
            "Greaser landing ({} fpm): +{} CR",
            rate, config.credits_greaser_bonus
        ));
        config.credits_greaser_bonus
    } else if abs_rate <= 350.0 {
        details.push(format!(
            "Firm but fair ({} fpm): +{} CR",
            rate, config.credits_firm_bonus
        ));
        config.credits_firm_bonus
    } else if (400.0..=600.0).contains(&abs_rate) {
        details.push(format!(
            "Hard landing ({} fpm): {} CR",
            rate, config.credits_hard_landing_penalty
        ));
        config.credits_hard_landing_penalty
    } else if abs_rate > 600.0 {
        let penalty = config.credits_hard_landing_penalty * 2;
        details.push(format!("Very hard landing ({} fpm): {} CR", rate, penalty));
        penalty
    } else {
        0
    };

    let mut fuel_efficiency = 0;
    if let Some(planned) = input.planned_fuel.filter(|p| *p > 0.0) {
        if input.fuel_used > 0.0 {
            let diff_percent = (input.fuel_used - planned).abs() / planned * 100.0;
            if diff_percent <= FUEL_EFFICIENCY_TOLERANCE_PERCENT {
                fuel_efficiency = config.credits_fuel_efficiency_bonus;
                details.push(format!(
                    "Fuel efficiency (within 5%): +{} CR",
                    fuel_efficiency
                ));
            }
        }
    }

    let hours = input.flight_time_minutes as f64 / 60.0;
    let long_haul = if hours >= 8.0 {
        details.push(format!("Long haul 8h+: +{} CR", config.credits_long_haul_8h));
        config.credits_long_haul_8h
    } else if hours >= 4.0 {
        details.push(format!("Long haul 4h+: +{} CR", config.credits_long_haul_4h));
        config.credits_long_haul_4h
    } else {
        0
    };

    let mut hub_to_hub = 0;
    if is_hub(input.departure_icao)
        && is_hub(input.arrival_icao)
        && input.departure_icao != input.arrival_icao
    {
        hub_to_hub = config.credits_hub_to_hub_bonus;
        details.push(format!("Hub-to-hub flight: +{} CR", hub_to_hub));
    }

    let mut new_route = 0;
    let key = route_key(input.departure_icao, input.arrival_icao);
    if !input.routes_flown.contains(&key) {
        new_route = config.credits_new_route_bonus;
        details.push(format!("New route discovery: +{} CR", new_route));
    }

    let first_multiplier = config.credits_first_flight_multiplier;
    match input.last_flight_date {
        Some(last) if last.date_naive() == input.now.date_naive() => {}
        Some(_) => {
            multiplier *= first_multiplier;
            details.push(format!(
                "First flight of the day: {}x multiplier",
                first_multiplier
            ));
        }
        None => {
            multiplier *= first_multiplier;
            details.push(format!("First flight ever: {}x multiplier", first_multiplier));
        }
    }

    if input.is_event_flight {
        multiplier *= config.credits_event_multiplier;
        details.push(format!(
            "Event flight: {}x multiplier",
            config.credits_event_multiplier
        ));
    }

    let mut taxi_speed = 0;
    let mut light_violation = 0;
    let mut overspeed = 0;
    for deduction in input.deductions {
        let reason = deduction.reason.to_lowercase();
        if reason.contains("taxi") && reason.contains("speed") {
            taxi_speed += config.credits_taxi_speed_penalty;
        }
        if reason.contains("light") || reason.contains("strobe") {
            light_violation += config.credits_light_violation_penalty;
        }
        if reason.contains("overspeed") || reason.contains("over speed") || reason.contains("vmo")
        {
            overspeed += config.credits_overspeed_penalty;
        }
    }
    if taxi_speed != 0 {
        details.push(format!("Taxi speed violation: {} CR", taxi_speed));
    }
    if light_violation != 0 {
        details.push(format!("Light violation: {} CR", light_violation));
    }
    if overspeed != 0 {
        details.push(format!("Overspeed penalty: {} CR", overspeed));
    }

    let raw = base
        + landing
        + fuel_efficiency
        + long_haul
        + hub_to_hub
        + new_route
        + taxi_speed
        + light_violation
        + overspeed;
    let total = ((raw as f64 * multiplier).round() as i64).max(0);

    details.push("---".to_string());
    details.push(format!("Multiplier: {:.2}x", multiplier));
    details.push(format!("Total: {} CR", total));

    CreditBreakdown {
        base,
        landing,
        fuel_efficiency,
        long_haul,
        hub_to_hub,
        new_route,
        taxi_speed,
        light_violation,
        overspeed,
        multiplier,
        total,
        details,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn input<'a>(routes: &'a [String], deductions: &'a [DeductionDto]) -> CreditInput<'a> {
        let now = Utc::now();
        CreditInput {
            departure_icao: "OJAI",
            arrival_icao: "LLBG",
            landing_rate: -120.0,
            flight_time_minutes: 60,
            fuel_used: 0.0,
            planned_fuel: None,
            deductions,
            is_event_flight: false,
            routes_flown: routes,
            last_flight_date: Some(now),
            now,
        }
    }

    /// Tests a plain repeat flight on the same day.
    ///
    /// Expected: base plus greaser bonus with no multiplier
    #[test]
    fn repeat_flight_same_day() {
        let routes = vec!["OJAI-LLBG".to_string()];
        let result = calculate(&EconomyConfig::default(), &input(&routes, &[]));

        assert_eq!(result.landing, 50);
        assert_eq!(result.new_route, 0);
        assert_eq!(result.multiplier, 1.0);
        assert_eq!(result.total, 150);
        assert_eq!(result.details.last().unwrap(), "Total: 150 CR");
    }

    /// Tests the landing rate bands including the gap between firm and hard.
    ///
    /// Expected: 350 to 400 fpm earns nothing, above 600 doubles the penalty
    #[test]
    fn landing_bands() {
        let routes = vec!["OJAI-LLBG".to_string()];
        let config = EconomyConfig::default();

        let band = |rate: f64| {
            calculate(
                &config,
                &CreditInput {
                    landing_rate: rate,
                    ..input(&routes, &[])
                },
            )
            .landing
        };

        assert_eq!(band(-300.0), 25);
        assert_eq!(band(-375.0), 0);
        assert_eq!(band(-500.0), -50);
        assert_eq!(band(-650.0), -100);
    }

    /// Tests every bonus and multiplier stacking on a first ever hub flight.
    ///
    /// Expected: all bonuses summed, then scaled by first flight and event multipliers
    #[test]
    fn stacks_bonuses_and_multipliers() {
        let result = calculate(
            &EconomyConfig::default(),
            &CreditInput {
                departure_icao: "OJAI",
                arrival_icao: "OMDB",
                flight_time_minutes: 250,
                fuel_used: 10_200.0,
                planned_fuel: Some(10_000.0),
                is_event_flight: true,
                last_flight_date: None,
                ..input(&[], &[])
            },
        );

        // 100 + 50 + 30 + 100 + 50 + 50
        let raw = 380.0;
        assert_eq!(result.multiplier, 1.2 * 2.0);
        assert_eq!(result.total, (raw * 2.4_f64).round() as i64);
        assert!(result
            .details
            .contains(&"First flight ever: 1.2x multiplier".to_string()));
    }

    /// Tests professionalism deductions reported by the client.
    ///
    /// Expected: each matching reason applies its penalty and the total never drops below zero
    #[test]
    fn applies_deduction_penalties() {
        let routes = vec!["OJAI-LLBG".to_string()];
        let deductions = vec![
            DeductionDto {
                reason: "Taxi speed above 30 kts".to_string(),
                points: 5.0,
            },
            DeductionDto {
                reason: "Strobe lights off".to_string(),
                points: 2.0,
            },
            DeductionDto {
                reason: "VMO exceeded".to_string(),
                points: 10.0,
            },
        ];
        let result = calculate(&EconomyConfig::default(), &input(&routes, &deductions));

        assert_eq!(result.taxi_speed, -10);
        assert_eq!(result.light_violation, -15);
        assert_eq!(result.overspeed, -50);
        assert_eq!(result.total, 150 - 75);

        let config = EconomyConfig {
            credits_overspeed_penalty: -1000,
            ..EconomyConfig::default()
        };
        assert_eq!(calculate(&config, &input(&routes, &deductions)).total, 0);
    }

    /// Tests the first flight of a new UTC day.
    ///
    /// Expected: the first flight multiplier applies
    #[test]
    fn first_flight_of_day() {
        let routes = vec!["OJAI-LLBG".to_string()];
        let now = Utc::now();
        let result = calculate(
            &EconomyConfig::default(),
            &CreditInput {
                last_flight_date: Some(now - Duration::days(2)),
                now,
                ..input(&routes, &[])
            },
        );

        assert_eq!(result.multiplier, 1.2);
        assert_eq!(result.total, 180);
    }
}
