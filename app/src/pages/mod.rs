mod dashboard;
mod trivia;
mod leaderboard;

pub use dashboard::Dashboard;
pub use trivia::Trivia;
pub use leaderboard::Leaderboard;
