//! Bus session guard for bulk pixel transfers
//!
//! Programming the write window deliberately leaves chip-select asserted
//! and the command/data line in the data phase: the pixel stream that
//! follows is a continuation of the same transaction, not a new one. The
//! guard makes that continuation the only thing a caller can do with the
//! open session, and releases chip-select exactly once however the session
//! ends.

use picolcd_hal::{OutputPin, SpiBus};

/// An open bus session in the data phase, ready for pixel transfers
///
/// Holds the driver's bus and chip-select mutably, so no other bus
/// operation can be interleaved while the session is open. Dropping the
/// guard releases chip-select, whether the session ended in success, an
/// early abort, or a transport error propagating out.
pub struct PixelStream<'a, SPI: SpiBus, CS: OutputPin> {
    spi: &'a mut SPI,
    cs: &'a mut CS,
    timeout_ms: u32,
}

impl<'a, SPI: SpiBus, CS: OutputPin> PixelStream<'a, SPI, CS> {
    pub(crate) fn new(spi: &'a mut SPI, cs: &'a mut CS, timeout_ms: u32) -> Self {
        Self {
            spi,
            cs,
            timeout_ms,
        }
    }

    /// Transmit one row of raw pixel bytes
    pub fn send_row(&mut self, row: &[u8]) -> Result<(), SPI::Error> {
        self.spi.send(row, self.timeout_ms)?;
        Ok(())
    }

    /// Receive one row of raw pixel bytes (read-mode sessions)
    pub fn recv_row(&mut self, buf: &mut [u8]) -> Result<(), SPI::Error> {
        self.spi.recv(0x00, buf, self.timeout_ms)?;
        Ok(())
    }

    /// Close the session
    ///
    /// Equivalent to dropping the guard; spelled out so the end of the
    /// transaction is visible at the call site.
    pub fn finish(self) {}
}

impl<'a, SPI: SpiBus, CS: OutputPin> Drop for PixelStream<'a, SPI, CS> {
    fn drop(&mut self) {
        self.cs.set_high();
    }
}
