use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use plasma_core::{
    plasma::DEFAULT_TIME,
    raster::{self, Frame, MAX_EXTENT},
    PushConstants,
};

// ---------------------------------------------------------------------------
// Args
// ---------------------------------------------------------------------------

/// Render the plasma shader on the CPU and save it as an image.
#[derive(Parser, Debug)]
#[command(name = "plasma-preview", version)]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..=MAX_EXTENT as i64))]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..=MAX_EXTENT as i64))]
    height: u32,

    /// Shader time. The GPU shader is fixed at 1.0.
    #[arg(long, default_value_t = DEFAULT_TIME)]
    time: f32,

    /// Output file; format follows the extension (png, ppm, ...)
    #[arg(short, long, default_value = "plasma.png")]
    output: PathBuf,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Save `frame` to `path`; the extension picks the format.
fn write_frame(frame: &Frame, path: &Path) -> Result<()> {
    let rgba = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_rgba8())
        .context("frame buffer does not match its dimensions")?;
    // Alpha is dropped, as with an opaque swapchain.
    let image = image::DynamicImage::ImageRgba8(rgba).into_rgb8();
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.time != DEFAULT_TIME {
        log::warn!(
            "--time {} only affects this preview; the GPU shader has no time binding and renders at {}",
            args.time,
            DEFAULT_TIME
        );
    }

    let pc = PushConstants::new(args.width, args.height, args.time);
    let frame = raster::render(&pc)?;

    let nan_pixels = frame.pixels.iter().filter(|c| c.is_nan()).count();
    if nan_pixels > 0 {
        log::info!("{nan_pixels} pixel(s) hit the unguarded division by zero and store as 0");
    }

    write_frame(&frame, &args.output)?;

    log::info!(
        "Wrote {}×{} plasma to {}",
        frame.width,
        frame.height,
        args.output.display()
    );
    Ok(())
}
