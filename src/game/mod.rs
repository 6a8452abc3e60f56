pub mod round;
pub mod session;

pub use session::Game;
