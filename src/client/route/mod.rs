pub mod active_flights;
pub mod dashboard;
pub mod fleet;
pub mod leaderboard;
pub mod login;
pub mod not_found;
pub mod pirep_review;

pub use active_flights::ActiveFlights;
pub use dashboard::Dashboard;
pub use fleet::Fleet;
pub use leaderboard::Leaderboard;
pub use login::Login;
pub use not_found::NotFound;
pub use pirep_review::PirepReview;
