use crate::Result;

const RST_PIN: u8 = 17;
const DC_PIN: u8 = 25;
const CS_PIN: u8 = 8;
const BUSY_PIN: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// BCM numbers of the four control lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pins {
    pub reset: u8,
    pub dc: u8,
    pub cs: u8,
    pub busy: u8,
}
impl Default for Pins {
    /// Wiring of the Waveshare e-Paper HAT.
    fn default() -> Self {
        Self {
            reset: RST_PIN,
            dc: DC_PIN,
            cs: CS_PIN,
            busy: BUSY_PIN,
        }
    }
}

/// Raw pin and bus access the driver is built on.
///
/// Only [`PlatformIo::init_bus`] may fail. Everything else is assumed to
/// succeed; a dead panel shows up as a busy line that never releases.
pub trait PlatformIo {
    /// Opens the bus and configures `reset`, `dc` and `cs` as outputs and
    /// `busy` as an input.
    ///
    /// May be called again without [`PlatformIo::teardown_bus`] in between;
    /// handles from the previous call must be released first.
    fn init_bus(&mut self, pins: &Pins) -> Result<()>;
    /// Drives reset and data/command low and releases the bus.
    fn teardown_bus(&mut self);

    fn write_pin(&mut self, pin: u8, level: Level);
    /// Reads `High` for a pin that is not configured as an input.
    fn read_pin(&mut self, pin: u8) -> Level;
    fn delay_ms(&mut self, ms: u64);

    fn write_byte(&mut self, byte: u8);
    /// Bulk transfer. Backends should override this with a batched write.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }
}

impl<T: PlatformIo + ?Sized> PlatformIo for &mut T {
    fn init_bus(&mut self, pins: &Pins) -> Result<()> {
        (**self).init_bus(pins)
    }
    fn teardown_bus(&mut self) {
        (**self).teardown_bus()
    }
    fn write_pin(&mut self, pin: u8, level: Level) {
        (**self).write_pin(pin, level)
    }
    fn read_pin(&mut self, pin: u8) -> Level {
        (**self).read_pin(pin)
    }
    fn delay_ms(&mut self, ms: u64) {
        (**self).delay_ms(ms)
    }
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }
    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes)
    }
}
