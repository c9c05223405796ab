//! Board-agnostic core types for the PicoLCD display driver
//!
//! This crate contains everything about the display controller that does
//! not touch hardware:
//!
//! - The controller's documented command set
//! - RGB565 colors and the named palette
//! - Pixel-region geometry and clipping
//! - Panel definitions (dimensions, bus timing)
//! - The driver init-state machine
//! - The error taxonomy

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod command;
pub mod error;
pub mod geometry;
pub mod panel;
pub mod state;

pub use color::Rgb565;
pub use command::Command;
pub use error::Error;
pub use geometry::Region;
pub use panel::{Panel, PanelConfig, MAX_ROW_BYTES};
pub use state::InitState;
