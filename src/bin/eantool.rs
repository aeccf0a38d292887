use clap::{Parser, Subcommand};
use rust_ean::encoder::{RenderOptions, parse_payload, render_pixmap};
use rust_ean::signal::{THRESHOLD, row_luminance, run_length_encode, threshold_row};
use rust_ean::{DecodeError, decode_barcode, parse_pixmap};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "eantool", version, about = "RustEAN CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode EAN-13/UPC-A barcodes from P6 raster files
    Decode {
        /// Raster files to decode
        files: Vec<PathBuf>,
    },
    /// Render a synthetic barcode raster
    Synth {
        /// The 12 payload digits (check digit is computed)
        #[arg(long)]
        digits: String,
        /// Output path for the P6 raster
        #[arg(long)]
        out: PathBuf,
        /// Pixels per module
        #[arg(long, default_value_t = 6)]
        module_width: usize,
        /// Luminance jitter percentage (also enables edge jitter)
        #[arg(long, default_value_t = 0)]
        noise: u8,
        /// Noise generator seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
    /// Print center-row signal diagnostics for a raster
    DebugSignal {
        /// Raster file to inspect
        image: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let ok = match cli.command {
        Command::Decode { files } => decode_cmd(&files),
        Command::Synth {
            digits,
            out,
            module_width,
            noise,
            seed,
        } => synth_cmd(&digits, &out, module_width, noise, seed),
        Command::DebugSignal { image } => debug_signal_cmd(&image),
    };

    if !ok {
        std::process::exit(1);
    }
}

fn decode_cmd(files: &[PathBuf]) -> bool {
    let mut all_ok = true;
    for path in files {
        match std::fs::read(path) {
            Ok(bytes) => match decode_barcode(&bytes) {
                Ok(digits) => {
                    let text: String = digits.iter().map(|d| (d + b'0') as char).collect();
                    println!("{}: {}", path.display(), text);
                }
                Err(DecodeError::NotFound) => {
                    eprintln!("{}: no barcode found", path.display());
                    all_ok = false;
                }
                Err(err) => {
                    eprintln!("{}: {}", path.display(), err);
                    all_ok = false;
                }
            },
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                all_ok = false;
            }
        }
    }
    all_ok
}

fn synth_cmd(digits: &str, out: &Path, module_width: usize, noise: u8, seed: u64) -> bool {
    let Some(payload) = parse_payload(digits) else {
        eprintln!("--digits must be exactly 12 ASCII digits");
        return false;
    };

    let opts = RenderOptions {
        module_width,
        luma_jitter: noise,
        edge_jitter: noise > 0,
        seed,
        ..Default::default()
    };
    let buf = render_pixmap(&payload, &opts);

    if let Err(err) = std::fs::write(out, &buf) {
        eprintln!("{}: {}", out.display(), err);
        return false;
    }
    println!("Wrote {} ({} bytes)", out.display(), buf.len());
    true
}

fn debug_signal_cmd(image: &Path) -> bool {
    let bytes = match std::fs::read(image) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{}: {}", image.display(), err);
            return false;
        }
    };

    let pixmap = match parse_pixmap(&bytes) {
        Ok(pixmap) => pixmap,
        Err(err) => {
            eprintln!("{}: {}", image.display(), err);
            return false;
        }
    };

    println!(
        "Image: {} ({}x{})",
        image.display(),
        pixmap.width(),
        pixmap.height()
    );
    if pixmap.height() == 0 || pixmap.width() == 0 {
        println!("Empty raster, nothing to scan");
        return true;
    }

    let row = pixmap.height() / 2;
    let luma = row_luminance(&pixmap, row);
    let min = luma.iter().min().copied().unwrap_or(0);
    let max = luma.iter().max().copied().unwrap_or(0);
    let pivot = min as f32 + (max - min) as f32 * THRESHOLD;
    println!("Center row {}: luminance {}-{}, pivot {:.1}", row, min, max, pivot);

    let runs = run_length_encode(&threshold_row(&luma));
    println!("Runs: {}", runs.len());
    let preview: Vec<String> = runs
        .iter()
        .take(16)
        .map(|r| format!("{}x{:?}", r.length, r.bit))
        .collect();
    println!("First runs: {}", preview.join(" "));
    true
}
