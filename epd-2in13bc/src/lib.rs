//! Rust driver for Waveshare's 2.13" B/C V3 e-Paper (104x212, black + red/yellow).

mod buffer;
mod compat;
mod epd_2in13bc;
mod error;
mod platform;
#[cfg(feature = "rpi")]
pub mod rpi;

pub use buffer::{pack_buffer, Bitplane, EPD_BUFFER_SIZE, EPD_HEIGHT, EPD_WIDTH};
pub use compat::EpdCompat;
pub use epd_2in13bc::Epd;
pub use error::{EpdError as Error, Result};
pub use platform::{Level, PlatformIo, Pins};
