use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{anyhow, Context, Result};
use bc7_decode::{
    blocks_byte_size,
    decode::{decompress_blocks, decompress_blocks_par},
    DecodeSettings,
};
use clap::Parser;
use ddsfile::{Dds, DxgiFormat};
use env_logger::Env;
use image::RgbaImage;

/// Decodes the main surface of a BC7 DDS texture into a PNG file.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// BC7 compressed DDS file
    input: PathBuf,

    /// Output PNG file. Defaults to the input path with a `png` extension.
    output: Option<PathBuf>,

    /// Decode on the current thread only
    #[arg(long)]
    sequential: bool,

    /// Fill reserved-mode blocks with transparent instead of opaque black
    #[arg(long)]
    transparent_reserved: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("png"));

    let start = Instant::now();

    let dds = read_dds(&args.input)?;
    let width = dds.get_width();
    let height = dds.get_height();
    let size = blocks_byte_size(width, height);
    let blocks = dds.data.get(..size).ok_or_else(|| {
        anyhow!(
            "'{}' holds {} bytes of data, the main surface needs {size}",
            args.input.display(),
            dds.data.len()
        )
    })?;

    let duration = start.elapsed();
    log::info!(
        "DDS read took: {:.3} ms ({width}x{height})",
        duration.as_secs_f64() * 1000.0
    );

    let settings = if args.transparent_reserved {
        DecodeSettings::transparent_black()
    } else {
        DecodeSettings::opaque_black()
    };

    let start = Instant::now();

    let mut rgba = vec![0u8; width as usize * height as usize * 4];
    let summary = if args.sequential {
        decompress_blocks(width, height, blocks, &mut rgba, &settings)
    } else {
        decompress_blocks_par(width, height, blocks, &mut rgba, &settings)
    }
    .with_context(|| format!("failed to decode '{}'", args.input.display()))?;

    let duration = start.elapsed();
    log::info!(
        "Decoding {} blocks took: {:.3} ms",
        summary.blocks,
        duration.as_secs_f64() * 1000.0
    );

    let start = Instant::now();

    let image = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| anyhow!("decoded buffer doesn't match {width}x{height}"))?;
    image
        .save(&output)
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    let duration = start.elapsed();
    log::info!(
        "PNG output to disk took: {:.3} ms",
        duration.as_secs_f64() * 1000.0
    );

    Ok(())
}

fn read_dds(path: &Path) -> Result<Dds> {
    let file = File::open(path).with_context(|| format!("can't open '{}'", path.display()))?;
    let dds = Dds::read(BufReader::new(file))
        .with_context(|| format!("can't parse '{}' as DDS", path.display()))?;

    match dds.get_dxgi_format() {
        Some(DxgiFormat::BC7_Typeless | DxgiFormat::BC7_UNorm | DxgiFormat::BC7_UNorm_sRGB) => {
            Ok(dds)
        }
        format => Err(anyhow!(
            "'{}' is not a BC7 texture (format: {format:?})",
            path.display()
        )),
    }
}
