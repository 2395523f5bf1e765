//! Session layer on top of the game engine: sequences generator, reveal
//! engine, clock, and leaderboard hand-off for one player-facing game.

pub use clock::*;
pub use scoreboard::*;
pub use session::*;

mod clock;
mod scoreboard;
mod session;
