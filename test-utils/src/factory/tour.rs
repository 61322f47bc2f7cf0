//! Tour factory creating a tour together with its ordered legs.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active tour with one leg per `(departure, arrival)` pair.
///
/// Legs are numbered from 1 in the order given.
///
/// # Arguments
/// - `db` - Database connection
/// - `reward_credits` - Credits paid on completion
/// - `legs` - Ordered leg endpoints
///
/// # Returns
/// - `Ok((tour, legs))` - Created tour and its legs
/// - `Err(DbErr)` - Database error during insert
pub async fn create_tour_with_legs(
    db: &DatabaseConnection,
    reward_credits: i64,
    legs: &[(&str, &str)],
) -> Result<(entity::tour::Model, Vec<entity::tour_leg::Model>), DbErr> {
    let tour = entity::tour::ActiveModel {
        name: ActiveValue::Set(format!("Tour {}", next_id())),
        description: ActiveValue::Set(String::new()),
        banner: ActiveValue::Set(None),
        reward_credits: ActiveValue::Set(reward_credits),
        difficulty: ActiveValue::Set("medium".to_string()),
        is_active: ActiveValue::Set(true),
        start_date: ActiveValue::Set(None),
        end_date: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mut created = Vec::with_capacity(legs.len());
    for (index, (departure, arrival)) in legs.iter().enumerate() {
        let leg = entity::tour_leg::ActiveModel {
            tour_id: ActiveValue::Set(tour.id),
            leg_number: ActiveValue::Set(index as i32 + 1),
            departure_icao: ActiveValue::Set(departure.to_string()),
            arrival_icao: ActiveValue::Set(arrival.to_string()),
            distance_nm: ActiveValue::Set(0.0),
            aircraft_types: ActiveValue::Set("[]".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        created.push(leg);
    }

    Ok((tour, created))
}
