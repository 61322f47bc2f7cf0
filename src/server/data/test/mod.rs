mod active_flight;
mod activity;
mod aircraft;
mod auth;
mod bid;
mod event;
mod finance;
mod flight;
mod notification;
mod pilot;
mod staff;
mod tour;
