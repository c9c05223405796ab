//! PicoCalc LCD driver
//!
//! Drives an ILI9488-class controller over 4-wire SPI: a shared bus plus
//! chip-select, command/data-select and reset lines. The controller is
//! command-oriented; every transaction is one opcode byte (command/data
//! line low) optionally followed by argument or pixel bytes (line high),
//! bracketed by chip-select.
//!
//! Framing discipline is the whole game here. A misplaced command/data
//! toggle or a chip-select left asserted corrupts the controller's command
//! stream for the rest of the session, so chip-select release is owned by
//! exactly one place on every path, including transport failures.

mod session;

pub use session::PixelStream;

use picolcd_core::{Command, Error, InitState, Panel, PanelConfig, Region, Rgb565, MAX_ROW_BYTES};
use picolcd_hal::{BitOrder, DataPull, DelayMs, Mode, OutputPin, SpiBus, SpiConfig, SpiPins};

/// Direction of the bulk transfer a window program sets up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Pixel data will be written (memory write)
    Write,
    /// Pixel data will be read back (memory read)
    Read,
}

/// Controller register program issued during bring-up, in fixed order
///
/// Gamma, power and VCOM first, then scan/pixel-format/interface setup.
/// Argument bytes follow the reference bring-up for this panel.
const INIT_SEQUENCE: &[(Command, &[u8])] = &[
    (
        Command::PositiveGammaControl,
        &[
            0x00, 0x03, 0x09, 0x08, 0x16, 0x0A, 0x3F, 0x78, 0x4C, 0x09, 0x0A, 0x08, 0x16, 0x1A,
            0x0F,
        ],
    ),
    (
        Command::NegativeGammaControl,
        &[
            0x00, 0x16, 0x19, 0x03, 0x0F, 0x05, 0x32, 0x45, 0x46, 0x04, 0x0E, 0x0D, 0x35, 0x37,
            0x0F,
        ],
    ),
    (Command::PowerControl1, &[0x17, 0x15]),
    (Command::PowerControl2, &[0x41]),
    (Command::VcomControl, &[0x00, 0x12, 0x80]),
    // MY=0 MX=1 MV=0 ML=0 BGR=1: column order flipped, BGR panel wiring
    (Command::MemoryAccessControl, &[0b0100_1000]),
    // DBI = 16 bits per pixel over the serial interface
    (Command::InterfacePixelFormat, &[0b101]),
    // DIN/SDO 4-wire serial, default sync polarities
    (Command::InterfaceModeControl, &[0x00]),
    // ~91 Hz frame rate
    (Command::FrameRateControlNormal, &[0b1110]),
    (Command::DisplayInversionOff, &[]),
    // Source/VCOM in non-display area, 5-frame scan cycle, 480 lines
    (Command::DisplayFunctionControl, &[0x02, 0x02, 0x3B]),
    // EPF=11, normal gate output, low-voltage detection on
    (Command::EntryModeSet, &[0xC6]),
    // 24-bit data bus disabled
    (Command::SetImageFunction, &[0x00]),
];

/// Settle time after the sleep-out and display-on commands, per datasheet
const POST_COMMAND_SETTLE_MS: u32 = 120;

/// Display controller driver
///
/// Owns the bus, the three control lines and a delay source exclusively;
/// there is no global handle table behind it. One instance per panel,
/// driven from a single control flow; the blocking bus model does not
/// tolerate interleaved access while a transaction is open.
pub struct LcdDriver<SPI, CS, DC, RST, D> {
    spi: SPI,
    cs: CS,
    dc: DC,
    rst: RST,
    delay: D,
    config: PanelConfig,
    state: InitState,
}

impl<SPI, CS, DC, RST, D> LcdDriver<SPI, CS, DC, RST, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayMs,
{
    /// Create a driver for a known panel
    ///
    /// The driver starts uninitialized; call [`LcdDriver::initialize`]
    /// before drawing.
    pub fn new(panel: Panel, spi: SPI, cs: CS, dc: DC, rst: RST, delay: D) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            delay,
            config: panel.config(),
            state: InitState::Uninitialized,
        }
    }

    /// The panel configuration this driver was built for
    pub fn panel(&self) -> &PanelConfig {
        &self.config
    }

    /// Current bring-up state
    pub fn state(&self) -> InitState {
        self.state
    }

    /// Tear the driver apart into its hardware resources
    pub fn release(self) -> (SPI, CS, DC, RST, D) {
        (self.spi, self.cs, self.dc, self.rst, self.delay)
    }

    /// Send one framed command with argument bytes
    ///
    /// Low-level escape hatch; drawing goes through [`LcdDriver::fill_rect`].
    /// Chip-select is released before returning on every path.
    pub fn command(&mut self, command: Command, args: &[u8]) -> Result<(), Error<SPI::Error>> {
        let timeout = self.config.command_timeout_ms;
        self.dc.set_low();
        self.cs.set_low();
        let framed = Self::framed(&mut self.spi, &mut self.dc, command, args, timeout);
        self.cs.set_high();
        framed.map_err(Error::Transport)
    }

    /// Send one framed command with no arguments
    pub fn command_bare(&mut self, command: Command) -> Result<(), Error<SPI::Error>> {
        self.command(command, &[])
    }

    /// Opcode phase, then argument phase if there are argument bytes
    ///
    /// Chip-select handling stays with the caller.
    fn framed(
        spi: &mut SPI,
        dc: &mut DC,
        command: Command,
        args: &[u8],
        timeout_ms: u32,
    ) -> Result<(), SPI::Error> {
        spi.send(&[command.opcode()], timeout_ms)?;
        if !args.is_empty() {
            dc.set_high();
            spi.send(args, timeout_ms)?;
        }
        Ok(())
    }

    /// Program the controller's active window and open a pixel session
    ///
    /// Emits column-address-set, page-address-set and the memory
    /// write/read opcode inside a single transaction, then hands back the
    /// still-open session as a [`PixelStream`]. The stream owns closing
    /// the transaction. A transport error mid-sequence releases
    /// chip-select before propagating.
    pub fn set_window(
        &mut self,
        region: Region,
        access: Access,
    ) -> Result<PixelStream<'_, SPI, CS>, Error<SPI::Error>> {
        if !self.state.is_active() {
            return Err(Error::NotReady);
        }

        let timeout = self.config.command_timeout_ms;
        self.cs.set_low();
        if let Err(e) = Self::window_sequence(&mut self.spi, &mut self.dc, region, access, timeout)
        {
            self.cs.set_high();
            return Err(Error::Transport(e));
        }

        Ok(PixelStream::new(
            &mut self.spi,
            &mut self.cs,
            self.config.stream_timeout_ms,
        ))
    }

    fn window_sequence(
        spi: &mut SPI,
        dc: &mut DC,
        region: Region,
        access: Access,
        timeout_ms: u32,
    ) -> Result<(), SPI::Error> {
        dc.set_low();
        spi.send(&[Command::ColumnAddressSet.opcode()], timeout_ms)?;
        dc.set_high();
        spi.send(&region.column_args(), timeout_ms)?;

        dc.set_low();
        spi.send(&[Command::PageAddressSet.opcode()], timeout_ms)?;
        dc.set_high();
        spi.send(&region.page_args(), timeout_ms)?;

        dc.set_low();
        let memory = match access {
            Access::Write => Command::MemoryWrite,
            Access::Read => Command::MemoryRead,
        };
        spi.send(&[memory.opcode()], timeout_ms)?;

        // Data phase for the pixel stream that continues this transaction.
        // Chip-select stays asserted on purpose.
        dc.set_high();
        Ok(())
    }

    /// Fill a rectangle with a solid color
    ///
    /// The request is clipped to the panel; a rectangle that lies entirely
    /// off-panel (or has zero width/height) draws nothing and succeeds.
    /// On success every pixel of the clipped rectangle holds `color`.
    /// A transport failure mid-stream leaves the controller's window
    /// register stale but the bus idle; the next drawing call reprograms
    /// the window before streaming, so no recovery step is needed.
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Rgb565,
    ) -> Result<(), Error<SPI::Error>> {
        if !self.state.is_active() {
            return Err(Error::NotReady);
        }

        let region = match Region::clip(x, y, width, height, self.config.width, self.config.height)
        {
            Some(region) => region,
            None => return Ok(()),
        };

        // One row of the repeated color pattern, high byte first.
        // MAX_ROW_BYTES covers every panel in the closed set, so the
        // resize cannot come up short for a clipped region.
        let mut row = heapless::Vec::<u8, MAX_ROW_BYTES>::new();
        let _ = row.resize(region.width() as usize * 2, 0);
        let [hi, lo] = color.to_be_bytes();
        for px in row.chunks_exact_mut(2) {
            px[0] = hi;
            px[1] = lo;
        }

        let rows = region.height();
        let mut stream = self.set_window(region, Access::Write)?;
        for _ in 0..rows {
            stream.send_row(&row).map_err(Error::Transport)?;
        }
        stream.finish();
        Ok(())
    }

    /// Bring the controller up from power-on to the active state
    ///
    /// Strictly ordered: control lines to outputs, bus enabled, hardware
    /// reset pulse with its settle time, register program, then sleep-out
    /// and display-on with their settle delays. A transport error is
    /// reported without retry; the caller decides whether startup aborts.
    pub fn initialize(&mut self) -> Result<(), Error<SPI::Error>> {
        // Control lines first: everything deasserted before the bus wakes
        self.cs.set_mode_output();
        self.rst.set_mode_output();
        self.dc.set_mode_output();
        self.cs.set_high();
        self.rst.set_high();
        self.dc.set_high();

        self.spi
            .setup(&SpiConfig {
                frequency: self.config.spi_frequency,
                mode: Mode::Mode0,
                bit_order: BitOrder::MsbFirst,
                pins: SpiPins {
                    sck: self.config.sck_pin,
                    mosi: self.config.mosi_pin,
                    miso: self.config.miso_pin,
                },
                pull: DataPull::None,
            })
            .map_err(Error::Transport)?;
        self.state = InitState::BusConfigured;

        // Hardware reset pulse; the controller needs 200ms after the
        // deasserting edge before it accepts commands
        self.rst.set_high();
        self.delay.delay_ms(10);
        self.rst.set_low();
        self.delay.delay_ms(10);
        self.rst.set_high();
        self.delay.delay_ms(200);
        self.state = InitState::ResetSettled;

        for &(command, args) in INIT_SEQUENCE {
            self.command(command, args)?;
        }
        self.state = InitState::RegistersProgrammed;

        self.command_bare(Command::SleepOut)?;
        self.delay.delay_ms(POST_COMMAND_SETTLE_MS);
        self.command_bare(Command::DisplayOn)?;
        self.delay.delay_ms(POST_COMMAND_SETTLE_MS);
        self.state = InitState::Active;

        Ok(())
    }

    /// Shut the bus down
    ///
    /// Returns the driver to the uninitialized state; a later
    /// [`LcdDriver::initialize`] starts over from the beginning.
    pub fn cleanup(&mut self) -> Result<(), Error<SPI::Error>> {
        self.spi.close().map_err(Error::Transport)?;
        self.state = InitState::Uninitialized;
        Ok(())
    }
}
