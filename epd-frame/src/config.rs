use epd_2in13bc::Pins;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub pins: Pins,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    pins: RawPins,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawPins {
    reset: Option<u8>,
    dc: Option<u8>,
    cs: Option<u8>,
    busy: Option<u8>,
}

pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let s = fs::read_to_string(path)?;
    from_str(&s)
}

pub fn from_str(s: &str) -> anyhow::Result<Config> {
    let raw: RawConfig = toml::from_str(s)?;
    let default = Pins::default();
    Ok(Config {
        pins: Pins {
            reset: raw.pins.reset.unwrap_or(default.reset),
            dc: raw.pins.dc.unwrap_or(default.dc),
            cs: raw.pins.cs.unwrap_or(default.cs),
            busy: raw.pins.busy.unwrap_or(default.busy),
        },
    })
}
