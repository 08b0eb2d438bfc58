mod browser;
mod use_dashboard;
mod use_leaderboard;
mod use_quiz;

pub use browser::{notify, open_in_new_tab, LocalStore};
pub use use_dashboard::{add_token, refresh_account};
pub use use_leaderboard::{save_score, use_leaderboard};
pub use use_quiz::use_quiz;
