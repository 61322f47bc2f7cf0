use chrono::Utc;
use dioxus_logger::tracing;

use crate::server::{
    data::{
        activity::ActivityRepository, notification::NotificationRepository,
        pilot::PilotRepository, tour::TourRepository,
    },
    error::AppError,
    model::{
        bid::Bid,
        notification::{CreateNotificationParam, NotificationKind},
        pilot::Pilot,
        tour::TourStatus,
    },
};

use super::PirepService;

/// Route of a completed flight as matched against activity and tour legs.
pub struct FlownLeg<'a> {
    pub departure_icao: &'a str,
    pub arrival_icao: &'a str,
    pub aircraft_type: &'a str,
}

impl<'a> PirepService<'a> {
    /// Marks the next matching leg of the activity the flight was booked for.
    ///
    /// # Returns
    /// - `Ok(Some(message))` - Progress message appended to the PIREP response
    /// - `Ok(None)` - No activity on the bid, activity inactive or no leg matched
    pub(super) async fn advance_activity(
        &self,
        pilot: &Pilot,
        bid: Option<&Bid>,
        leg: &FlownLeg<'_>,
    ) -> Result<Option<String>, AppError> {
        let Some(activity_id) = bid.and_then(|b| b.activity_id) else {
            return Ok(None);
        };

        let activity_repo = ActivityRepository::new(self.db);
        let Some(activity) = activity_repo
            .find_by_id(activity_id)
            .await?
            .filter(|a| a.is_active)
        else {
            return Ok(None);
        };

        let mut progress = match activity_repo.find_progress(activity.id, pilot.id).await? {
            Some(progress) => progress,
            None => activity_repo.start_progress(activity.id, pilot.id).await?,
        };

        let Some(matched) = activity.next_matching_leg(
            &progress.completed_leg_ids,
            leg.departure_icao,
            leg.arrival_icao,
            leg.aircraft_type,
        ) else {
            return Ok(None);
        };

        let now = Utc::now();
        let total_legs = activity.legs.len() as i32;

        progress.completed_leg_ids.push(matched.id);
        progress.legs_complete = progress.completed_leg_ids.len() as i32;
        progress.percent_complete =
            (progress.legs_complete as f64 / total_legs as f64 * 100.0).round();
        progress.last_leg_flown_date = Some(now);

        let message = if progress.legs_complete >= total_legs {
            progress.date_complete = Some(now);
            let days = (now - progress.start_date).num_seconds() as f64 / 86_400.0;
            progress.days_to_complete = Some(days.ceil() as i32);

            activity_repo
                .record_completion(activity.id, &pilot.full_name())
                .await?;
            if activity.reward_points > 0 {
                PilotRepository::new(self.db)
                    .credit_reward(pilot.id, activity.reward_points)
                    .await?;
            }

            tracing::info!("{} completed activity {}", pilot.pilot_id, activity.title);
            self.notifier
                .award(
                    "Activity Completed",
                    format!("**{}** completed **{}**", pilot.full_name(), activity.title),
                )
                .await;

            if activity.reward_points > 0 {
                format!(
                    " ACTIVITY COMPLETED: {}! Bonus {} credits!",
                    activity.title, activity.reward_points
                )
            } else {
                format!(" ACTIVITY COMPLETED: {}!", activity.title)
            }
        } else {
            format!(
                " Activity Leg {} of {} Completed! ({})",
                progress.legs_complete, total_legs, activity.title
            )
        };

        activity_repo.save_progress(&progress).await?;

        Ok(Some(message))
    }

    /// Advances every in-progress tour whose next leg this flight flew.
    ///
    /// # Returns
    /// - `Ok(String)` - Concatenated progress messages, empty when nothing advanced
    pub(super) async fn advance_tours(
        &self,
        pilot: &Pilot,
        leg: &FlownLeg<'_>,
    ) -> Result<String, AppError> {
        let tour_repo = TourRepository::new(self.db);
        let mut message = String::new();

        let in_progress = tour_repo
            .progress_for_pilot(pilot.id)
            .await?
            .into_iter()
            .filter(|p| p.status == TourStatus::InProgress.as_str());

        for progress in in_progress {
            let Some(tour) = tour_repo
                .find_by_id(progress.tour_id)
                .await?
                .filter(|t| t.is_active)
            else {
                continue;
            };

            let index = progress.current_leg as usize;
            let Some(next_leg) = tour.legs.get(index) else {
                continue;
            };
            if !next_leg.matches(leg.departure_icao, leg.arrival_icao, leg.aircraft_type) {
                continue;
            }

            let next_index = progress.current_leg + 1;
            let completed = next_index as usize >= tour.legs.len();
            tour_repo.advance(progress.id, next_index, completed).await?;

            if !completed {
                message.push_str(&format!(
                    " Tour Leg {} Completed! ({})",
                    next_index, tour.name
                ));
                continue;
            }

            if tour.reward_credits > 0 {
                PilotRepository::new(self.db)
                    .credit_reward(pilot.id, tour.reward_credits)
                    .await?;
                message.push_str(&format!(
                    " TOUR COMPLETED: {}! Bonus {} credits!",
                    tour.name, tour.reward_credits
                ));
            } else {
                message.push_str(&format!(" TOUR COMPLETED: {}!", tour.name));
            }

            NotificationRepository::new(self.db)
                .create(CreateNotificationParam {
                    pilot_id: pilot.id,
                    kind: NotificationKind::Tour,
                    title: "Tour Completed".to_string(),
                    message: format!("You completed the {} tour.", tour.name),
                    link: Some(format!("/tours/{}", tour.id)),
                })
                .await?;

            tracing::info!("{} completed tour {}", pilot.pilot_id, tour.name);
            self.notifier
                .award(
                    "Tour Completed",
                    format!("**{}** completed the **{}** tour", pilot.full_name(), tour.name),
                )
                .await;
        }

        Ok(message)
    }
}
