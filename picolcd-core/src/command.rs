//! Display controller command set
//!
//! One-byte opcodes for the ILI9488-class controller behind the panel. The
//! closed enumeration keeps invalid opcodes out of the bus layer; anything
//! the driver frames onto the wire starts from one of these.

/// A controller command opcode
///
/// Covers both the standard command set and the extended (EXTC) register
/// set. Argument bytes, where a command takes them, are supplied separately
/// at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    //
    // Standard commands
    //
    /// No operation; terminates a frame memory write or read
    Nop = 0x00,
    /// Software reset
    SoftwareReset = 0x01,
    /// Read display identification information
    ReadDisplayId = 0x04,
    /// Read number of errors on DSI
    ReadDsiErrors = 0x05,
    /// Read display status
    ReadDisplayStatus = 0x09,
    /// Read display power mode
    ReadPowerMode = 0x0A,
    /// Read memory access control setting
    ReadMemoryAccessControl = 0x0B,
    /// Read pixel format
    ReadPixelFormat = 0x0C,
    /// Read display image mode
    ReadImageMode = 0x0D,
    /// Read display signal mode
    ReadSignalMode = 0x0E,
    /// Read display self-diagnostic result
    ReadSelfDiagnostic = 0x0F,
    /// Enter sleep mode
    SleepIn = 0x10,
    /// Exit sleep mode
    SleepOut = 0x11,
    /// Partial display mode on
    PartialModeOn = 0x12,
    /// Normal display mode on
    NormalModeOn = 0x13,
    /// Display inversion on
    DisplayInversionOn = 0x20,
    /// Display inversion off
    DisplayInversionOff = 0x21,
    /// All pixels off
    AllPixelsOff = 0x22,
    /// All pixels on
    AllPixelsOn = 0x23,
    /// Display off
    DisplayOff = 0x28,
    /// Display on
    DisplayOn = 0x29,
    /// Column address set (window x bounds)
    ColumnAddressSet = 0x2A,
    /// Page address set (window y bounds)
    PageAddressSet = 0x2B,
    /// Memory write (bulk pixel data follows)
    MemoryWrite = 0x2C,
    /// Memory read
    MemoryRead = 0x2E,
    /// Partial area
    PartialArea = 0x30,
    /// Vertical scrolling definition
    VerticalScrollDefine = 0x33,
    /// Tearing effect line off
    TearingEffectOff = 0x34,
    /// Tearing effect line on
    TearingEffectOn = 0x35,
    /// Memory access control (scan order, color order)
    MemoryAccessControl = 0x36,
    /// Vertical scrolling start address
    VerticalScrollStart = 0x37,
    /// Idle mode off
    IdleModeOff = 0x38,
    /// Idle mode on
    IdleModeOn = 0x39,
    /// Interface pixel format
    InterfacePixelFormat = 0x3A,
    /// Memory write continue
    MemoryWriteContinue = 0x3C,
    /// Memory read continue
    MemoryReadContinue = 0x3E,
    /// Write tear scan line
    WriteTearScanline = 0x44,
    /// Read scan line
    ReadScanline = 0x45,
    /// Write display brightness value
    WriteBrightness = 0x51,
    /// Read display brightness value
    ReadBrightness = 0x52,
    /// Write CTRL display value
    WriteCtrlDisplay = 0x53,
    /// Read CTRL display value
    ReadCtrlDisplay = 0x54,
    /// Write content adaptive brightness control value
    WriteCabc = 0x55,
    /// Read content adaptive brightness control value
    ReadCabc = 0x56,
    /// Write CABC minimum brightness
    WriteCabcMinBrightness = 0x5E,
    /// Read CABC minimum brightness
    ReadCabcMinBrightness = 0x5F,
    /// Read automatic brightness control self-diagnostic result
    ReadAbcSelfDiagnostic = 0x68,
    /// Read ID1
    ReadId1 = 0xDA,
    /// Read ID2
    ReadId2 = 0xDB,
    /// Read ID3
    ReadId3 = 0xDC,

    //
    // Extended (EXTC) commands
    //
    /// Interface mode control
    InterfaceModeControl = 0xB0,
    /// Frame rate control (normal mode / full colors)
    FrameRateControlNormal = 0xB1,
    /// Frame rate control (idle mode / 8 colors)
    FrameRateControlIdle = 0xB2,
    /// Frame rate control (partial mode / full colors)
    FrameRateControlPartial = 0xB3,
    /// Display inversion control
    DisplayInversionControl = 0xB4,
    /// Blanking porch control
    BlankingPorchControl = 0xB5,
    /// Display function control
    DisplayFunctionControl = 0xB6,
    /// Entry mode set
    EntryModeSet = 0xB7,
    /// Color enhancement control 1
    ColorEnhancement1 = 0xB9,
    /// Color enhancement control 2
    ColorEnhancement2 = 0xBA,
    /// HS lanes control
    HsLanesControl = 0xBE,
    /// Power control 1
    PowerControl1 = 0xC0,
    /// Power control 2
    PowerControl2 = 0xC1,
    /// Power control 3 (normal mode)
    PowerControl3 = 0xC2,
    /// Power control 4 (idle mode)
    PowerControl4 = 0xC3,
    /// Power control 5 (partial mode)
    PowerControl5 = 0xC4,
    /// VCOM control
    VcomControl = 0xC5,
    /// CABC control 1
    CabcControl1 = 0xC6,
    /// CABC control 2
    CabcControl2 = 0xC8,
    /// CABC control 3
    CabcControl3 = 0xC9,
    /// CABC control 4
    CabcControl4 = 0xCA,
    /// CABC control 5
    CabcControl5 = 0xCB,
    /// CABC control 6
    CabcControl6 = 0xCC,
    /// CABC control 7
    CabcControl7 = 0xCD,
    /// CABC control 8
    CabcControl8 = 0xCE,
    /// CABC control 9
    CabcControl9 = 0xCF,
    /// NV memory write
    NvMemoryWrite = 0xD0,
    /// NV memory protection key
    NvMemoryProtectionKey = 0xD1,
    /// NV memory status read
    NvMemoryStatusRead = 0xD2,
    /// Read ID4
    ReadId4 = 0xD3,
    /// Adjust control 1
    AdjustControl1 = 0xD7,
    /// Read ID version
    ReadIdVersion = 0xD8,
    /// Positive gamma control
    PositiveGammaControl = 0xE0,
    /// Negative gamma control
    NegativeGammaControl = 0xE1,
    /// Digital gamma control 1
    DigitalGammaControl1 = 0xE2,
    /// Digital gamma control 2
    DigitalGammaControl2 = 0xE3,
    /// Set image function (24-bit data bus enable)
    SetImageFunction = 0xE9,
    /// Adjust control 2 (op-amp chopper, source eq timing)
    AdjustControl2 = 0xF2,
    /// Adjust control 3 (DSI 18-bit option)
    AdjustControl3 = 0xF7,
    /// Adjust control 4 (3-gamma enable, dither enable)
    AdjustControl4 = 0xF8,
    /// Adjust control 5 (source op-amp chopper option)
    AdjustControl5 = 0xF9,
    /// SPI read command setting
    SpiReadCommandSetting = 0xFB,
    /// Adjust control 6 (gate driver non-overlap timing)
    AdjustControl6 = 0xFC,
    /// Adjust control 7 (24-axis color enhance adjustment enable)
    AdjustControl7 = 0xFF,
}

impl Command {
    /// The opcode byte sent on the wire
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}
