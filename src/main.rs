use clap::Parser;
use numbadge::imaging::{OutputFormat, RustBackend};
use numbadge::process::BadgeJob;
use numbadge::{config, output, process};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "numbadge")]
#[command(about = "Draw a red number badge on the upper-right corner of an image")]
#[command(long_about = "\
Draw a red number badge on the upper-right corner of an image

The badge is a quarter of the image's shorter edge tall. The result is
written to the current directory as bdg_<name> unless --out is given.

Examples:
  numbadge photo.png 3                  # → bdg_photo.png
  numbadge photo.png 12 --crop          # square crop first
  numbadge photo.png 7 -f jpeg          # → bdg_photo.jpeg
  numbadge photo.png 7 --font DejaVuSans -o badge.png

Defaults for the prefix, font, font directories and JPEG quality can be set
in badge.toml. Run 'numbadge --gen-config' to print a documented one.")]
#[command(version = env!("NUMBADGE_VERSION"))]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Path to the image file
    #[arg(required_unless_present = "gen_config")]
    image: Option<PathBuf>,

    /// The number shown on the upper-right corner of the image
    #[arg(required_unless_present = "gen_config")]
    number: Option<i64>,

    /// Crop the image to a centered square first
    #[arg(short, long)]
    crop: bool,

    /// Output filename (default: prefix + input filename)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Output image format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Font used for the badge number (name or path)
    #[arg(long)]
    font: Option<String>,

    /// Config file with defaults
    #[arg(long, default_value = "badge.toml")]
    config: PathBuf,

    /// Print a summary of what was done
    #[arg(short, long)]
    verbose: bool,

    /// Print a stock badge.toml with all options documented
    #[arg(long)]
    gen_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let (Some(source), Some(number)) = (cli.image, cli.number) else {
        return Err("an image path and a number are required".into());
    };

    let badge_config = config::load_config(&cli.config)?;
    let job = BadgeJob {
        source,
        number,
        crop: cli.crop,
        out: cli.out,
        format: cli.format,
        font: cli.font,
    };

    let outcome = process::run(&RustBackend::new(), &job, &badge_config)?;
    if cli.verbose {
        output::print_outcome(&outcome);
    }

    Ok(())
}
