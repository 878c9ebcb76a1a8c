//! Game session state machine and session-adjacent helpers

mod identity;
mod session;
mod share;
mod streak;

pub use identity::Identity;
pub use session::{GameSession, GameStatus, Submission};
pub use share::share_text;
pub use streak::Streak;
