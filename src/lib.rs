//! Lander - Terminal Lunar Lander Library
//!
//! Game logic is exposed here for testing; the binary only drives the
//! terminal.

pub mod build_info;
pub mod cli;
pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod input;
pub mod physics;
pub mod simulation;
pub mod terrain;
pub mod ui;
