#![cfg(feature = "rpi")]

use epd_2in13bc::{rpi::RppalIo, Epd, Level, PlatformIo, Pins};

#[test]
fn init_twice() {
    let mut epd = Epd::new(RppalIo::new(), Pins::default());
    epd.init().unwrap();
    epd.init().unwrap();
    epd.clear();
    epd.sleep();
    epd.init().unwrap();
    epd.sleep();
}

#[test]
fn bus_reinit() {
    let pins = Pins::default();
    let mut io = RppalIo::new();
    io.init_bus(&pins).unwrap();
    io.init_bus(&pins).unwrap();
    io.teardown_bus();
}

#[test]
fn unconfigured_pin_reads_idle() {
    let mut io = RppalIo::new();
    assert_eq!(io.read_pin(Pins::default().busy), Level::High);

    let pins = Pins::default();
    io.init_bus(&pins).unwrap();
    assert_eq!(io.read_pin(pins.reset), Level::High);
    io.teardown_bus();
}
