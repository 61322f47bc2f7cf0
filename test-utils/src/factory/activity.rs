//! Activity factory creating an activity together with its legs.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active activity with one leg per `(departure, arrival)` pair.
///
/// # Arguments
/// - `db` - Database connection
/// - `reward_points` - Credits paid on completion
/// - `legs_in_order` - Whether legs must be flown in sequence
/// - `legs` - Leg endpoints in order
///
/// # Returns
/// - `Ok((activity, legs))` - Created activity and its legs
/// - `Err(DbErr)` - Database error during insert
pub async fn create_activity_with_legs(
    db: &DatabaseConnection,
    reward_points: i64,
    legs_in_order: bool,
    legs: &[(&str, &str)],
) -> Result<(entity::activity::Model, Vec<entity::activity_leg::Model>), DbErr> {
    let activity = entity::activity::ActiveModel {
        title: ActiveValue::Set(format!("Activity {}", next_id())),
        description: ActiveValue::Set(String::new()),
        kind: ActiveValue::Set("Event".to_string()),
        start_date: ActiveValue::Set(None),
        end_date: ActiveValue::Set(None),
        legs_in_order: ActiveValue::Set(legs_in_order),
        min_rank: ActiveValue::Set(None),
        reward_points: ActiveValue::Set(reward_points),
        total_pilots_complete: ActiveValue::Set(0),
        first_pilot_to_complete: ActiveValue::Set(None),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mut created = Vec::with_capacity(legs.len());
    for (index, (departure, arrival)) in legs.iter().enumerate() {
        let leg = entity::activity_leg::ActiveModel {
            activity_id: ActiveValue::Set(activity.id),
            leg_order: ActiveValue::Set(index as i32 + 1),
            departure_icao: ActiveValue::Set(Some(departure.to_string())),
            arrival_icao: ActiveValue::Set(Some(arrival.to_string())),
            flight_number: ActiveValue::Set(None),
            aircraft_types: ActiveValue::Set("[]".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        created.push(leg);
    }

    Ok((activity, created))
}
