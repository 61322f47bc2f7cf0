//! Shared helpers used across the factory modules.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pilot with an Active bid on an aircraft parked at the bid's departure.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((pilot, aircraft, bid))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booked_pilot(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::pilot::Model,
        entity::aircraft::Model,
        entity::bid::Model,
    ),
    DbErr,
> {
    let pilot = crate::factory::pilot::create_pilot(db).await?;
    let aircraft = crate::factory::aircraft::create_aircraft_at(db, "OJAI").await?;
    let bid = crate::factory::bid::BidFactory::new(db, &pilot)
        .route_pair("OJAI", "OERK")
        .aircraft_type(&aircraft.aircraft_type)
        .registration(&aircraft.registration)
        .build()
        .await?;

    Ok((pilot, aircraft, bid))
}
