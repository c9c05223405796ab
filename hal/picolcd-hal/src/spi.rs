//! SPI bus abstractions
//!
//! Provides a trait for blocking SPI master operations with caller-supplied
//! per-transfer timeouts, as used by command-oriented display controllers.

/// SPI bus master
///
/// All operations block the calling context until the transfer completes or
/// the timeout elapses. Implementations report how many bytes actually moved
/// so a short transfer is distinguishable from a full one.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Configure and enable the bus
    fn setup(&mut self, config: &SpiConfig) -> Result<(), Self::Error>;

    /// Transmit `data`, discarding anything received
    ///
    /// Returns the number of bytes written.
    fn send(&mut self, data: &[u8], timeout_ms: u32) -> Result<usize, Self::Error>;

    /// Receive into `buf`, clocking out `fill` for every byte read
    ///
    /// Returns the number of bytes read.
    fn recv(&mut self, fill: u8, buf: &mut [u8], timeout_ms: u32) -> Result<usize, Self::Error>;

    /// Disable the bus and release its pins
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// SPI bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity/phase combination
    pub mode: Mode,
    /// Bit transmission order
    pub bit_order: BitOrder,
    /// Pin routing for the bus
    pub pins: SpiPins,
    /// Pull resistor configuration for the data lines
    pub pull: DataPull,
}

/// SPI pin routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiPins {
    /// Serial clock
    pub sck: u8,
    /// Controller out, peripheral in
    pub mosi: u8,
    /// Controller in, peripheral out
    pub miso: u8,
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

/// Bit transmission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// Pull resistor configuration for SPI data lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataPull {
    /// No pull resistors
    #[default]
    None,
    /// Pull-up on the data lines
    PullUp,
    /// Pull-down on the data lines
    PullDown,
}
