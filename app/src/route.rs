use dioxus::prelude::*;

use crate::pages::{Dashboard, Leaderboard, Trivia};
use crate::components::Layout;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Dashboard {},
    #[route("/trivia")]
    Trivia {},
    #[route("/leaderboard")]
    Leaderboard {},
}
