//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand for
//! quick default creation. Factories that need a parent row take the parent model, so
//! tests create pilots before bids, tours before legs, and so on.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let pilot = factory::pilot::PilotFactory::new(&db)
//!     .pilot_id("LVT042")
//!     .balance(5_000)
//!     .build()
//!     .await?;
//! let aircraft = factory::create_aircraft_at(&db, "OJAI").await?;
//! let bid = factory::bid::BidFactory::new(&db, &pilot)
//!     .registration(&aircraft.registration)
//!     .build()
//!     .await?;
//! ```

pub mod active_flight;
pub mod activity;
pub mod aircraft;
pub mod bid;
pub mod event;
pub mod flight;
pub mod helpers;
pub mod pilot;
pub mod rank;
pub mod store_item;
pub mod tour;

pub use active_flight::create_active_flight;
pub use activity::create_activity_with_legs;
pub use aircraft::{create_aircraft, create_aircraft_at};
pub use bid::create_bid;
pub use event::create_event;
pub use flight::create_flight;
pub use pilot::{create_admin, create_pilot};
pub use rank::create_rank;
pub use store_item::create_store_item;
pub use tour::create_tour_with_legs;
