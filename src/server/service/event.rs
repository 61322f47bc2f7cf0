//! Airline events and pilot bookings on them.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::content::{EventDto, UpsertEventDto},
    server::{
        data::event::EventRepository,
        error::AppError,
        model::{
            event::{Event, EventBooking, EventBookingStatus, UpsertEventParam},
            pilot::Pilot,
        },
        util::parse::require_text,
    },
};

pub struct EventService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active events with their booking counts and the caller's booking status.
    pub async fn list_for_pilot(&self, pilot_id: i32) -> Result<Vec<EventDto>, AppError> {
        let event_repo = EventRepository::new(self.db);
        let events = event_repo.get_active().await?;

        let mut dtos = Vec::with_capacity(events.len());
        for event in events {
            let count = event_repo.booking_count(event.id).await?;
            let mine = event_repo
                .find_booking(event.id, pilot_id)
                .await?
                .map(|b| b.status);
            dtos.push(event.into_dto(count, mine));
        }

        Ok(dtos)
    }

    /// Books the pilot on an event.
    ///
    /// # Returns
    /// - `Ok(EventBooking)` - The Booked booking
    /// - `Err(AppError::NotFound)` - Event unknown or inactive
    /// - `Err(AppError::Conflict)` - Pilot already booked or attended
    /// - `Err(AppError::BadRequest)` - Event full or already over
    pub async fn book(&self, pilot: &Pilot, event_id: i32) -> Result<EventBooking, AppError> {
        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .find_by_id(event_id)
            .await?
            .filter(|e| e.is_active)
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        if let Some(existing) = event_repo.find_booking(event.id, pilot.id).await? {
            if existing.status != EventBookingStatus::Cancelled.as_str() {
                return Err(AppError::Conflict(format!(
                    "You are already booked on {}",
                    event.title
                )));
            }
        }

        if event.effective_end() < Utc::now() {
            return Err(AppError::BadRequest(format!("{} has already ended", event.title)));
        }
        if let Some(slots) = event.slots_available {
            if event_repo.booking_count(event.id).await? >= slots.max(0) as u64 {
                return Err(AppError::BadRequest(format!("{} is fully booked", event.title)));
            }
        }

        let booking = event_repo.book(event.id, pilot.id).await?;
        tracing::info!("{} booked event {}", pilot.pilot_id, event.title);

        Ok(booking)
    }

    /// Cancels the pilot's booking on an event.
    pub async fn cancel(&self, pilot: &Pilot, event_id: i32) -> Result<(), AppError> {
        if !EventRepository::new(self.db)
            .cancel_booking(event_id, pilot.id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "No booking on event {}",
                event_id
            )));
        }

        Ok(())
    }

    /// Every event, inactive ones included, with booking counts.
    pub async fn all(&self) -> Result<Vec<EventDto>, AppError> {
        let event_repo = EventRepository::new(self.db);
        let events = event_repo.get_all().await?;

        let mut dtos = Vec::with_capacity(events.len());
        for event in events {
            let count = event_repo.booking_count(event.id).await?;
            dtos.push(event.into_dto(count, None));
        }

        Ok(dtos)
    }

    pub async fn create(&self, dto: UpsertEventDto) -> Result<Event, AppError> {
        let param = validate(dto)?;

        Ok(EventRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, id: i32, dto: UpsertEventDto) -> Result<EventDto, AppError> {
        let param = validate(dto)?;
        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;
        let count = event_repo.booking_count(event.id).await?;

        Ok(event.into_dto(count, None))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !EventRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }

        Ok(())
    }
}

fn validate(dto: UpsertEventDto) -> Result<UpsertEventParam, AppError> {
    require_text("Title", &dto.title)?;
    if let Some(end) = dto.end_time {
        if end <= dto.start_time {
            return Err(AppError::BadRequest(
                "Event end must be after its start".to_string(),
            ));
        }
    }

    Ok(UpsertEventParam::from_dto(dto))
}
