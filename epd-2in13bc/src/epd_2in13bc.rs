//! 2.13" B/C V3 bi-color

use crate::{
    buffer::{Bitplane, BLANK, EPD_HEIGHT, EPD_WIDTH},
    Level, PlatformIo, Pins, Result,
};
use log::{debug, error, info};

const POWER_ON: u8 = 0x04;
const PANEL_SETTING: u8 = 0x00;
const RESOLUTION_SETTING: u8 = 0x61;
const VCOM_AND_DATA_INTERVAL: u8 = 0x50;
const WRITE_BLACK_RAM: u8 = 0x10;
const WRITE_COLOR_RAM: u8 = 0x13;
const DISPLAY_REFRESH: u8 = 0x12;
const GET_STATUS: u8 = 0x71;
const POWER_OFF: u8 = 0x02;
const DEEP_SLEEP: u8 = 0x07;

/// Busy is active low on this panel.
const BUSY: Level = Level::Low;

/// Planes last sent to the panel.
struct Frame {
    black: Box<Bitplane>,
    color: Box<Bitplane>,
}

pub struct Epd<P> {
    platform: P,
    pins: Pins,
    is_initialized: bool,
    last_frame: Option<Frame>,
}
impl<P: PlatformIo> Epd<P> {
    pub fn new(platform: P, pins: Pins) -> Self {
        Self {
            platform,
            pins,
            is_initialized: false,
            last_frame: None,
        }
    }

    pub fn width(&self) -> usize {
        EPD_WIDTH
    }
    pub fn height(&self) -> usize {
        EPD_HEIGHT
    }
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }
    pub fn platform(&self) -> &P {
        &self.platform
    }
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Runs the full reset and configuration sequence.
    ///
    /// Always runs in full, also on an already initialized panel. Fails only
    /// if the platform cannot bring the bus up, in which case no pin has been
    /// touched.
    pub fn init(&mut self) -> Result<()> {
        if let Err(e) = self.platform.init_bus(&self.pins) {
            error!("e-Paper bus init failed: {e}");
            return Err(e);
        }

        self.reset();

        self.send_command(POWER_ON);
        self.wait_until_idle();

        self.send_command(PANEL_SETTING);
        self.send_data(0x0F);
        self.send_data(0x89);

        // 104 sources, 212 gates
        self.send_command(RESOLUTION_SETTING);
        self.send_data(0x68);
        self.send_data(0x00);
        self.send_data(0xD4);

        self.send_command(VCOM_AND_DATA_INTERVAL);
        self.send_data(0x77);

        self.is_initialized = true;
        info!("e-Paper initialized");
        Ok(())
    }

    /// Hardware reset. The timings are required by the controller.
    pub fn reset(&mut self) {
        self.platform.write_pin(self.pins.reset, Level::High);
        self.platform.delay_ms(200);
        self.platform.write_pin(self.pins.reset, Level::Low);
        self.platform.delay_ms(2);
        self.platform.write_pin(self.pins.reset, Level::High);
        self.platform.delay_ms(200);
    }

    pub fn send_command(&mut self, command: u8) {
        self.platform.write_pin(self.pins.dc, Level::Low);
        self.platform.write_pin(self.pins.cs, Level::Low);
        self.platform.write_byte(command);
        self.platform.write_pin(self.pins.cs, Level::High);
    }

    pub fn send_data(&mut self, data: u8) {
        self.platform.write_pin(self.pins.dc, Level::High);
        self.platform.write_pin(self.pins.cs, Level::Low);
        self.platform.write_byte(data);
        self.platform.write_pin(self.pins.cs, Level::High);
    }

    /// Sends `data` in a single chip-select window.
    pub fn send_data_block(&mut self, data: &[u8]) {
        self.platform.write_pin(self.pins.dc, Level::High);
        self.platform.write_pin(self.pins.cs, Level::Low);
        self.platform.write_bytes(data);
        self.platform.write_pin(self.pins.cs, Level::High);
    }

    /// Polls the status register until the busy line releases. Never times
    /// out.
    pub fn wait_until_idle(&mut self) {
        debug!("e-Paper busy");
        self.send_command(GET_STATUS);
        while self.platform.read_pin(self.pins.busy) == BUSY {
            self.send_command(GET_STATUS);
            self.platform.delay_ms(100);
        }
        debug!("e-Paper busy release");
    }

    /// Full refresh with the given planes; a missing plane is sent blank.
    ///
    /// Returns without touching the bus if the resulting frame is identical
    /// to the last one displayed.
    pub fn display(&mut self, black: Option<&Bitplane>, color: Option<&Bitplane>) {
        let black = black.unwrap_or(&BLANK);
        let color = color.unwrap_or(&BLANK);
        if let Some(last) = &self.last_frame {
            if *last.black == *black && *last.color == *color {
                debug!("Frame unchanged, skipping refresh");
                return;
            }
        }
        self.last_frame = Some(Frame {
            black: Box::new(*black),
            color: Box::new(*color),
        });

        self.send_command(WRITE_BLACK_RAM);
        self.send_data_block(black);

        self.send_command(WRITE_COLOR_RAM);
        self.send_data_block(color);

        self.refresh();
    }

    /// Blanks both planes. Ignores and keeps the frame cache.
    pub fn clear(&mut self) {
        self.send_command(WRITE_BLACK_RAM);
        self.send_data_block(&BLANK);
        self.send_command(WRITE_COLOR_RAM);
        self.send_data_block(&BLANK);
        self.refresh();
    }

    /// Powers the panel down and releases the bus. Only [`Epd::init`] may
    /// follow.
    pub fn sleep(&mut self) {
        self.send_command(VCOM_AND_DATA_INTERVAL);
        self.send_data(0xF7);
        self.send_command(POWER_OFF);
        self.wait_until_idle();
        self.send_command(DEEP_SLEEP);
        self.send_data(0xA5);

        self.platform.delay_ms(2000);
        self.platform.teardown_bus();
        self.is_initialized = false;
        info!("e-Paper asleep");
    }

    fn refresh(&mut self) {
        self.send_command(DISPLAY_REFRESH);
        self.platform.delay_ms(100);
        self.wait_until_idle();
    }
}
