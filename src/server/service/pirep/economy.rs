//! Revenue, expense and pay figures of a filed flight.

use rand::{seq::IndexedRandom, Rng};

use crate::{model::pirep::RevenueBreakdownDto, server::model::economy::EconomyConfig};

/// Landing fee per nautical mile on top of the base fee.
const LANDING_FEE_PER_NM: f64 = 0.1;
/// Wear and tear charged per nautical mile.
const MAINTENANCE_PER_NM: f64 = 0.5;
const BUTTER_BONUS_MIN_SCORE: f64 = 8.0;
const BUTTER_BONUS_PER_POINT: f64 = 50.0;

/// Measured figures a flight's economy is computed from.
#[derive(Debug, Clone, Copy)]
pub struct EconomyInput {
    pub pax: i32,
    pub cargo: i32,
    pub distance_nm: f64,
    pub fuel_used: f64,
    pub flight_time_minutes: i32,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlightEconomy {
    pub revenue_passenger: i64,
    pub revenue_cargo: i64,
    pub expense_fuel: i64,
    pub expense_landing: i64,
    pub expense_pilot: i64,
    pub expense_maintenance: i64,
    pub fuel_tax: i64,
    pub penalty: i64,
}

impl FlightEconomy {
    pub fn calculate(config: &EconomyConfig, input: &EconomyInput) -> Self {
        let distance = input.distance_nm;

        let revenue_passenger = round(input.pax as f64 * distance * config.ticket_price_per_nm);
        let revenue_cargo = round(input.cargo as f64 * distance * config.cargo_price_per_lb_nm);
        let gross = revenue_passenger + revenue_cargo;

        Self {
            revenue_passenger,
            revenue_cargo,
            expense_fuel: round(input.fuel_used * config.fuel_price_per_lb),
            expense_landing: round(config.base_landing_fee) + round(distance * LANDING_FEE_PER_NM),
            expense_pilot: round(input.flight_time_minutes as f64 / 60.0 * config.pilot_pay_rate),
            expense_maintenance: round(distance * MAINTENANCE_PER_NM),
            fuel_tax: round(gross as f64 * config.fuel_tax_percent / 100.0),
            penalty: round((100 - input.score) as f64 * config.penalty_multiplier),
        }
    }

    pub fn total_revenue(&self) -> i64 {
        self.revenue_passenger + self.revenue_cargo
    }

    pub fn total_expenses(&self) -> i64 {
        self.expense_fuel + self.expense_landing + self.expense_pilot + self.expense_maintenance
    }

    /// Fuel tax and score penalties kept by the airline.
    pub fn total_deductions(&self) -> i64 {
        self.fuel_tax + self.penalty
    }

    pub fn net_pilot_pay(&self) -> i64 {
        (self.total_revenue() - self.total_deductions()).max(0)
    }

    pub fn net_profit(&self) -> i64 {
        self.total_revenue() - self.total_expenses()
    }

    /// Response breakdown including the bonuses paid on top.
    pub fn breakdown(&self, dotm_bonus: i64, butter_bonus: i64) -> RevenueBreakdownDto {
        RevenueBreakdownDto {
            gross_revenue: self.total_revenue(),
            fuel_tax: self.fuel_tax,
            penalty_fines: self.penalty,
            total_deductions: self.total_deductions(),
            net_pilot_pay: self.net_pilot_pay(),
            dotm_bonus,
            butter_bonus,
            total_earned: self.net_pilot_pay() + dotm_bonus + butter_bonus,
        }
    }
}

/// Fills in passengers and cargo the client did not report with a random load.
pub fn simulated_load(pax: Option<i32>, cargo: Option<i32>) -> (i32, i32) {
    let mut rng = rand::rng();

    let pax = pax
        .filter(|p| *p > 0)
        .unwrap_or_else(|| rng.random_range(50..=150));
    let cargo = cargo
        .filter(|c| *c > 0)
        .unwrap_or_else(|| rng.random_range(500..=5000));

    (pax, cargo)
}

/// Bonus for a landing analysis butter score of 8 or more.
pub fn butter_bonus(butter_score: f64) -> i64 {
    if butter_score >= BUTTER_BONUS_MIN_SCORE {
        round(butter_score * BUTTER_BONUS_PER_POINT)
    } else {
        0
    }
}

/// One to five stars from the flight score.
pub fn passenger_rating(score: i32) -> i32 {
    ((score as f64 / 20.0).ceil() as i32).clamp(1, 5)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewBucket {
    Excellent,
    Good,
    Firm,
    Bad,
}

impl ReviewBucket {
    pub fn from_landing(landing_rate: f64, score: i32) -> Self {
        if landing_rate > -150.0 && score >= 90 {
            Self::Excellent
        } else if landing_rate > -300.0 && score >= 75 {
            Self::Good
        } else if landing_rate > -500.0 {
            Self::Firm
        } else {
            Self::Bad
        }
    }

    fn reviews(self) -> &'static [&'static str] {
        match self {
            Self::Excellent => &[
                "Best flight of my life! The landing was like a kiss.",
                "Smooth operator! Didn't even feel the touchdown.",
                "Professional service and a perfect landing. A+",
                "Luxury in the air. 5 stars all the way.",
            ],
            Self::Good => &[
                "A solid flight, fairly smooth arrival.",
                "Everything went well. The crew was very polite.",
                "On time and safe. Average landing.",
                "Good value for money. Would fly with you again.",
            ],
            Self::Firm => &[
                "A bit of a bump on landing, but we got there safe.",
                "Decent flight, but the touchdown was a little firm.",
                "Average experience. Nothing special.",
                "Work on those landings! Otherwise a good flight.",
            ],
            Self::Bad => &[
                "I think I need to see a chiropractor! Hard landing.",
                "Terrifying landing. Why was it so hard?",
                "Not a great experience. Very rough arrival.",
                "Please retrain the pilot. That was not smooth at all.",
            ],
        }
    }

    /// A random passenger review for this bucket.
    pub fn pick(self) -> String {
        let reviews = self.reviews();
        reviews
            .choose(&mut rand::rng())
            .unwrap_or(&reviews[0])
            .to_string()
    }
}

fn round(value: f64) -> i64 {
    value.round() as i64
}
