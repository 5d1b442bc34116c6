//! Reactive controller for a tank-battle arena robot.
//!
//! The battle engine owns the clock and the physics. Each tick it hands the
//! controller a [`game::RobotStatus`] plus sensor events, and the controller
//! queues movement, aiming and firing [`game::Command`]s in return.

pub mod ai;
pub mod config;
pub mod debug;
pub mod detect;
pub mod error;
pub mod game;
pub mod harness;

pub use error::SetupError;
