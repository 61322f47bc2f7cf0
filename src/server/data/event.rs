//! Event and event booking data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{Event, EventBooking, EventBookingStatus, UpsertEventParam};

/// Repository for events and pilots' bookings on them.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active events ordered by start time.
    pub async fn get_active(&self) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::IsActive.eq(true))
            .order_by_asc(entity::event::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    pub async fn create(&self, param: UpsertEventParam) -> Result<Event, DbErr> {
        let airports =
            serde_json::to_string(&param.airports).map_err(|e| DbErr::Custom(e.to_string()))?;

        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            banner: ActiveValue::Set(param.banner),
            kind: ActiveValue::Set(param.kind),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            airports: ActiveValue::Set(airports),
            slots_available: ActiveValue::Set(param.slots_available),
            reward_points: ActiveValue::Set(param.reward_points),
            is_active: ActiveValue::Set(param.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn update(&self, id: i32, param: UpsertEventParam) -> Result<Option<Event>, DbErr> {
        let Some(model) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let airports =
            serde_json::to_string(&param.airports).map_err(|e| DbErr::Custom(e.to_string()))?;

        let mut active: entity::event::ActiveModel = model.into();
        active.title = ActiveValue::Set(param.title);
        active.description = ActiveValue::Set(param.description);
        active.banner = ActiveValue::Set(param.banner);
        active.kind = ActiveValue::Set(param.kind);
        active.start_time = ActiveValue::Set(param.start_time);
        active.end_time = ActiveValue::Set(param.end_time);
        active.airports = ActiveValue::Set(airports);
        active.slots_available = ActiveValue::Set(param.slots_available);
        active.reward_points = ActiveValue::Set(param.reward_points);
        active.is_active = ActiveValue::Set(param.is_active);

        Ok(Some(Event::from_entity(active.update(self.db).await?)))
    }

    /// Deletes an event together with its bookings.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::EventBooking::delete_many()
            .filter(entity::event_booking::Column::EventId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Number of bookings on an event that were not cancelled.
    pub async fn booking_count(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventBooking::find()
            .filter(entity::event_booking::Column::EventId.eq(event_id))
            .filter(entity::event_booking::Column::Status.ne(EventBookingStatus::Cancelled.as_str()))
            .count(self.db)
            .await
    }

    pub async fn find_booking(
        &self,
        event_id: i32,
        pilot_id: i32,
    ) -> Result<Option<EventBooking>, DbErr> {
        let entity = entity::prelude::EventBooking::find()
            .filter(entity::event_booking::Column::EventId.eq(event_id))
            .filter(entity::event_booking::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await?;

        Ok(entity.map(EventBooking::from_entity))
    }

    /// Books a pilot on an event.
    ///
    /// A previously cancelled booking for the same pair is reopened instead of inserting a
    /// second row.
    ///
    /// # Arguments
    /// - `event_id` - Event to book
    /// - `pilot_id` - Database id of the pilot
    ///
    /// # Returns
    /// - `Ok(EventBooking)` - The Booked booking
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn book(&self, event_id: i32, pilot_id: i32) -> Result<EventBooking, DbErr> {
        let existing = entity::prelude::EventBooking::find()
            .filter(entity::event_booking::Column::EventId.eq(event_id))
            .filter(entity::event_booking::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(model) => {
                let mut active: entity::event_booking::ActiveModel = model.into();
                active.status = ActiveValue::Set(EventBookingStatus::Booked.as_str().to_string());
                active.booked_at = ActiveValue::Set(Utc::now());
                active.update(self.db).await?
            }
            None => {
                entity::event_booking::ActiveModel {
                    event_id: ActiveValue::Set(event_id),
                    pilot_id: ActiveValue::Set(pilot_id),
                    status: ActiveValue::Set(EventBookingStatus::Booked.as_str().to_string()),
                    flight_id: ActiveValue::Set(None),
                    booked_at: ActiveValue::Set(Utc::now()),
                    attended_at: ActiveValue::Set(None),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(EventBooking::from_entity(entity))
    }

    /// Cancels a pilot's booking on an event.
    ///
    /// # Returns
    /// - `Ok(true)` - A Booked booking was cancelled
    /// - `Ok(false)` - The pilot had no Booked booking on the event
    /// - `Err(DbErr)` - Database error during update
    pub async fn cancel_booking(&self, event_id: i32, pilot_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EventBooking::update_many()
            .filter(entity::event_booking::Column::EventId.eq(event_id))
            .filter(entity::event_booking::Column::PilotId.eq(pilot_id))
            .filter(entity::event_booking::Column::Status.eq(EventBookingStatus::Booked.as_str()))
            .col_expr(
                entity::event_booking::Column::Status,
                sea_orm::sea_query::Expr::value(EventBookingStatus::Cancelled.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// The pilot's most recent Booked booking, if any.
    pub async fn latest_booked_for_pilot(
        &self,
        pilot_id: i32,
    ) -> Result<Option<EventBooking>, DbErr> {
        let entity = entity::prelude::EventBooking::find()
            .filter(entity::event_booking::Column::PilotId.eq(pilot_id))
            .filter(entity::event_booking::Column::Status.eq(EventBookingStatus::Booked.as_str()))
            .order_by_desc(entity::event_booking::Column::BookedAt)
            .order_by_desc(entity::event_booking::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(EventBooking::from_entity))
    }

    /// Marks a booking Attended by the given flight.
    pub async fn mark_attended(&self, booking_id: i32, flight_id: i32) -> Result<(), DbErr> {
        let Some(model) = entity::prelude::EventBooking::find_by_id(booking_id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let mut active: entity::event_booking::ActiveModel = model.into();
        active.status = ActiveValue::Set(EventBookingStatus::Attended.as_str().to_string());
        active.flight_id = ActiveValue::Set(Some(flight_id));
        active.attended_at = ActiveValue::Set(Some(Utc::now()));
        active.update(self.db).await?;

        Ok(())
    }
}
