pub use super::acars_token::Entity as AcarsToken;
pub use super::active_flight::Entity as ActiveFlight;
pub use super::activity::Entity as Activity;
pub use super::activity_leg::Entity as ActivityLeg;
pub use super::activity_progress::Entity as ActivityProgress;
pub use super::aircraft::Entity as Aircraft;
pub use super::airline_finance::Entity as AirlineFinance;
pub use super::bid::Entity as Bid;
pub use super::destination_of_the_month::Entity as DestinationOfTheMonth;
pub use super::event::Entity as Event;
pub use super::event_booking::Entity as EventBooking;
pub use super::finance_log::Entity as FinanceLog;
pub use super::flight::Entity as Flight;
pub use super::global_config::Entity as GlobalConfig;
pub use super::maintenance_log::Entity as MaintenanceLog;
pub use super::notam::Entity as Notam;
pub use super::notification::Entity as Notification;
pub use super::password_reset::Entity as PasswordReset;
pub use super::pending_auth::Entity as PendingAuth;
pub use super::pilot::Entity as Pilot;
pub use super::purchase::Entity as Purchase;
pub use super::rank::Entity as Rank;
pub use super::staff_member::Entity as StaffMember;
pub use super::staff_role::Entity as StaffRole;
pub use super::store_item::Entity as StoreItem;
pub use super::tour::Entity as Tour;
pub use super::tour_leg::Entity as TourLeg;
pub use super::tour_progress::Entity as TourProgress;
