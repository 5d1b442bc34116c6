// Robot controllers and the helpers they steer with

mod bot;
mod celebration;
pub mod geometry;
pub mod orientation;
mod wrath;

pub use bot::{play_turn, Bot};
pub use celebration::Celebration;
pub use geometry::FireControl;
pub use orientation::Drive;
pub use wrath::WrathBot;

use crate::config::Config;
use crate::error::SetupError;

/// Create the competition controller from configuration
pub fn create_bot(config: Config) -> Result<Box<dyn Bot>, SetupError> {
    Ok(Box::new(WrathBot::new(config)?))
}
