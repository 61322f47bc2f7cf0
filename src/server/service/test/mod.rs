mod acars;
mod auth;
mod booking;
mod cleanup;
mod content;
mod economy;
mod fleet;
mod moderation;
mod oauth;
mod pirep;
