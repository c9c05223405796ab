//! PicoLCD Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display driver is written
//! against. Chip-specific implementations (RP2040, STM32, host-side mocks)
//! live elsewhere; the driver in `picolcd-drivers` only sees these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Display driver (picolcd-drivers)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  picolcd-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ chip-specific │       │  test mocks   │
//! │      HAL      │       │  (host)       │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output lines (chip-select, command/data,
//!   reset)
//! - [`spi::SpiBus`] - Blocking SPI transmit/receive with per-transfer
//!   timeouts
//! - [`delay::DelayMs`] - Millisecond busy-wait for reset/settle timing

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;

#[cfg(feature = "embedded-hal")]
pub mod compat;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use spi::{BitOrder, DataPull, Mode, Phase, Polarity, SpiBus, SpiConfig, SpiPins};
