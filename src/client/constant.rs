pub const SITE_NAME: &str = "Flightdeck";

/// Seconds between live traffic refreshes on the map page.
pub const TRAFFIC_REFRESH_SECS: u32 = 30;
