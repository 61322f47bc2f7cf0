use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    ActiveFlights, Dashboard, Fleet, Leaderboard, Login, NotFound, PirepReview,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/login")]
        Login {},

        #[route("/leaderboard")]
        Leaderboard {},

        #[route("/fleet")]
        Fleet {},

        #[layout(RequiresLoggedIn)]
            #[route("/")]
            Dashboard {},

            #[route("/map")]
            ActiveFlights {},
        #[end_layout]

        #[layout(RequiresAdmin)]
            #[route("/admin/pireps")]
            PirepReview {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
