pub mod prelude;

pub mod acars_token;
pub mod active_flight;
pub mod activity;
pub mod activity_leg;
pub mod activity_progress;
pub mod aircraft;
pub mod airline_finance;
pub mod bid;
pub mod destination_of_the_month;
pub mod event;
pub mod event_booking;
pub mod finance_log;
pub mod flight;
pub mod global_config;
pub mod maintenance_log;
pub mod notam;
pub mod notification;
pub mod password_reset;
pub mod pending_auth;
pub mod pilot;
pub mod purchase;
pub mod rank;
pub mod staff_member;
pub mod staff_role;
pub mod store_item;
pub mod tour;
pub mod tour_leg;
pub mod tour_progress;
