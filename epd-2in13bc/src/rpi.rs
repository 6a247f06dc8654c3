//! Raspberry Pi backend: rppal GPIO plus SPI0/CE0.

use crate::{Level, PlatformIo, Pins, Result};
use log::{debug, error, warn};
use rppal::{
    gpio::{Gpio, InputPin, OutputPin},
    spi::{Bus, Mode, SlaveSelect, Spi},
};
use std::{thread, time::Duration};

const SPI_CLOCK_HZ: u32 = 4_000_000;
/// Default spidev `bufsiz`.
const SPI_CHUNK: usize = 4096;

struct Lines {
    reset: OutputPin,
    dc: OutputPin,
    cs: OutputPin,
    busy: InputPin,
    spi: Spi,
}
impl Lines {
    fn output(&mut self, pin: u8) -> Option<&mut OutputPin> {
        [&mut self.reset, &mut self.dc, &mut self.cs]
            .into_iter()
            .find(|p| p.pin() == pin)
    }
}

/// Nothing is claimed until [`PlatformIo::init_bus`] runs.
#[derive(Default)]
pub struct RppalIo {
    lines: Option<Lines>,
}
impl RppalIo {
    pub fn new() -> Self {
        Self::default()
    }

    fn lines(&mut self) -> Option<&mut Lines> {
        if self.lines.is_none() {
            warn!("bus used before init_bus");
        }
        self.lines.as_mut()
    }
}

impl PlatformIo for RppalIo {
    fn init_bus(&mut self, pins: &Pins) -> Result<()> {
        // rppal hands out each pin once per process.
        if self.lines.take().is_some() {
            debug!("re-init, releasing bus");
        }
        let gpio = Gpio::new()?;
        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, SPI_CLOCK_HZ, Mode::Mode0)?;
        self.lines = Some(Lines {
            reset: gpio.get(pins.reset)?.into_output(),
            dc: gpio.get(pins.dc)?.into_output(),
            cs: gpio.get(pins.cs)?.into_output(),
            busy: gpio.get(pins.busy)?.into_input(),
            spi,
        });
        debug!("bus up: {:?}, SPI0 @ {}Hz", pins, SPI_CLOCK_HZ);
        Ok(())
    }

    fn teardown_bus(&mut self) {
        if let Some(mut lines) = self.lines.take() {
            debug!("close 5V, Module enters 0 power consumption ...");
            lines.reset.set_low();
            lines.dc.set_low();
        }
    }

    fn write_pin(&mut self, pin: u8, level: Level) {
        let Some(out) = self.lines().and_then(|l| l.output(pin)) else {
            warn!("pin {pin} is not an output");
            return;
        };
        match level {
            Level::Low => out.set_low(),
            Level::High => out.set_high(),
        }
    }

    fn read_pin(&mut self, pin: u8) -> Level {
        match self.lines() {
            Some(lines) if lines.busy.pin() == pin => {
                if lines.busy.is_high() {
                    Level::High
                } else {
                    Level::Low
                }
            }
            _ => {
                warn!("pin {pin} is not an input");
                Level::High
            }
        }
    }

    fn delay_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_bytes(&[byte]);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let Some(lines) = self.lines() else { return };
        for chunk in bytes.chunks(SPI_CHUNK) {
            if let Err(e) = lines.spi.write(chunk) {
                error!("SPI write failed: {e}");
                return;
            }
        }
    }
}
