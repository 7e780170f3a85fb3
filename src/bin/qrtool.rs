use clap::{Parser, Subcommand};
use qrgrid::decoder::format::{FormatInfo, codeword_table};
use qrgrid::decoder::function_mask::DataAreaMap;
use qrgrid::decoder::tables::{
    alignment_coordinates, data_codewords_per_block, remainder_bits, total_codewords,
};
use qrgrid::tools::{load_grid_image, load_text_grid};
use qrgrid::{BitGrid, DecodeOptions, ECLevel, TruncationPolicy, Version};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "Structural QR grid tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a module grid from a text file or a clean symbol image
    Decode {
        #[arg(long, conflicts_with = "image", required_unless_present = "image")]
        grid: Option<PathBuf>,
        #[arg(long)]
        image: Option<PathBuf>,
        /// Keep decoding when the codeword stream runs short
        #[arg(long)]
        tolerate_truncation: bool,
        /// Print the de-interleaved data codewords
        #[arg(long)]
        codewords: bool,
    },
    /// Print the 32 masked format codewords with their level and mask
    FormatTable,
    /// Print the data-area map and block layout of a version
    Layout {
        #[arg(long)]
        version: u8,
    },
}

fn main() -> ExitCode {
    let default_filter = if std::env::var("QR_DEBUG").is_ok() {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Decode {
            grid,
            image,
            tolerate_truncation,
            codewords,
        } => decode_cmd(grid, image, tolerate_truncation, codewords),
        Command::FormatTable => {
            format_table_cmd();
            ExitCode::SUCCESS
        }
        Command::Layout { version } => layout_cmd(version),
    }
}

fn decode_cmd(
    grid: Option<PathBuf>,
    image: Option<PathBuf>,
    tolerate_truncation: bool,
    show_codewords: bool,
) -> ExitCode {
    let loaded = match (&grid, &image) {
        (Some(path), _) => load_text_grid(path),
        (None, Some(path)) => load_grid_image(path),
        (None, None) => {
            eprintln!("Either --grid or --image is required");
            return ExitCode::FAILURE;
        }
    };
    let grid: BitGrid = match loaded {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Failed to load grid: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut options = DecodeOptions::from_env();
    if tolerate_truncation {
        options = options.with_truncation(TruncationPolicy::Tolerate);
    }

    match qrgrid::decode_with(&grid, options) {
        Ok(symbol) => {
            println!("{}", symbol);
            if let Some(info) = symbol.version_info {
                println!("  version info: {}", info);
            }
            println!(
                "  format distance: {}, iso mask: {}",
                symbol.format_distance,
                symbol.mask.iso_pattern()
            );
            if show_codewords {
                println!("  data codewords: {:?}", symbol.data_codewords);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Decode failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn format_table_cmd() {
    println!("value  codeword         level  mask");
    for (value, &codeword) in codeword_table().iter().enumerate() {
        let info = FormatInfo::from_codeword(codeword as u16, 0);
        println!(
            "{:5}  {:015b}  {:5}  {}",
            value, codeword, info.ec_level, info.mask
        );
    }
}

fn layout_cmd(version: u8) -> ExitCode {
    let Some(version) = Version::new(version) else {
        eprintln!("Version must be 1-40");
        return ExitCode::FAILURE;
    };

    let area = DataAreaMap::for_version(version);
    println!(
        "Version {} ({}x{}): {} data modules, {} codewords, {} remainder bits",
        version,
        version.size(),
        version.size(),
        area.data_modules_count(),
        total_codewords(version),
        remainder_bits(version)
    );
    println!("Alignment coordinates: {:?}", alignment_coordinates(version));
    for level in ECLevel::all() {
        println!(
            "  {}: data blocks {:?}",
            level,
            data_codewords_per_block(version, level)
        );
    }
    for row in 0..area.size() {
        let line: String = (0..area.size())
            .map(|col| if area.is_data(row, col) { '.' } else { '#' })
            .collect();
        println!("{}", line);
    }
    ExitCode::SUCCESS
}
