mod item;
mod pool;
mod session;

pub use item::*;
pub use pool::*;
pub use session::*;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz is not running")]
    NotRunning,
    #[error("quiz is already in progress")]
    AlreadyRunning,
    #[error("current question was already answered")]
    AlreadyAnswered,
    #[error("no answer is being revealed")]
    NotRevealing,
    #[error("need {needed} distinct names to build options, pool has {distinct}")]
    PoolTooSmall { distinct: usize, needed: usize },
}
