//! Hardware driver implementations
//!
//! This crate provides the display-controller driver for the PicoCalc LCD,
//! written against the traits in `picolcd-hal`:
//!
//! - Command framing (opcode vs argument phases on the data/command line)
//! - Window programming ahead of bulk pixel transfers
//! - Rectangle fills with clipping
//! - Bring-up and teardown sequencing

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod lcd;

pub use lcd::{Access, LcdDriver, PixelStream};
