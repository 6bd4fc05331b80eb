//! Screen implementations for the explorer state machine.

mod browse;
mod detail;
mod game;

pub use browse::BrowseScreen;
pub use detail::DetailScreen;
pub use game::GameScreen;
