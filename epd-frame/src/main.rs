mod bw;
mod config;

use anyhow::Context;
use clap::Parser;
use epd_2in13bc::{pack_buffer, rpi::RppalIo, Epd};
use log::info;
use simplelog::{LevelFilter::Info, SimpleLogger};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
struct Opt {
    /// Image for the black plane.
    #[arg(required_unless_present_any = ["clear", "color"])]
    black: Option<PathBuf>,
    /// Image for the red/yellow plane.
    #[arg(long)]
    color: Option<PathBuf>,
    /// Blank the panel instead of showing an image.
    #[arg(long, conflicts_with_all = ["black", "color"])]
    clear: bool,
    /// Pin configuration (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Gray level below which a pixel is inked.
    #[arg(long, default_value_t = 128)]
    threshold: u8,
}

fn load_plane(path: &Path, threshold: u8) -> anyhow::Result<epd_2in13bc::Bitplane> {
    info!("Loading {}", path.display());
    let image = image::open(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(pack_buffer(&bw::to_bw(&image, threshold)))
}

pub fn main() -> anyhow::Result<()> {
    SimpleLogger::init(Info, Default::default())?;

    let Opt {
        black,
        color,
        clear,
        config,
        threshold,
    } = Parser::parse();

    let config = match config {
        Some(path) => {
            info!("Reading pin configuration from {}", path.display());
            config::load(path)?
        }
        None => Default::default(),
    };
    info!("Using {:?}", config.pins);
    let black = black
        .map(|path| load_plane(&path, threshold))
        .transpose()?;
    let color = color
        .map(|path| load_plane(&path, threshold))
        .transpose()?;

    let mut epd = Epd::new(RppalIo::new(), config.pins);
    epd.init()?;
    if clear {
        info!("Clearing");
        epd.clear();
    } else {
        epd.display(black.as_ref(), color.as_ref());
    }
    epd.sleep();

    Ok(())
}
