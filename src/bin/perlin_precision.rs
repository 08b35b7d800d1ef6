use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use perlin_precision::export;
use perlin_precision::{GeneratorKind, PrecisionComparator, Report, RunConfig, SweepReport};

#[derive(Parser)]
#[command(name = "perlin-precision")]
#[command(about = "Compare Perlin noise near the origin against a far coordinate offset")]
#[command(allow_negative_numbers = true)]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: i64,

    /// Cells per side of each sampled window
    #[arg(long, default_value_t = 100)]
    size: usize,

    /// Samples per lattice unit
    #[arg(long, default_value_t = 10.0)]
    step: f64,

    #[arg(long, default_value_t = 0.0)]
    normal_origin: f64,

    #[arg(long, default_value_t = 100_000_000.0)]
    far_offset: f64,

    #[arg(long, value_enum, default_value_t = GeneratorKind::Java)]
    generator: GeneratorKind,

    /// Compare against each of these offsets instead of --far-offset
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<f64>,

    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    #[arg(long)]
    no_images: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig {
        seed: args.seed,
        grid_size: args.size,
        step: args.step,
        normal_origin: args.normal_origin,
        far_offset: args.far_offset,
        generator: args.generator,
    };
    let comparator = PrecisionComparator::from_config(&config)?;

    if !args.sweep.is_empty() {
        let entries = comparator.sweep(config.normal_origin, &args.sweep)?;
        let report = SweepReport::new(&config, &entries);
        if args.json {
            println!("{}", report.to_json()?);
        } else {
            print!("{report}");
        }
        return Ok(());
    }

    eprintln!(
        "Sampling {0}x{0} windows at {1} and {2}...",
        config.grid_size, config.normal_origin, config.far_offset
    );

    let normal = comparator.sample(config.normal_origin);
    let far = comparator.sample(config.far_offset);

    if !args.no_images {
        for path in export::export_pair(&normal, &far, &args.output_dir) {
            eprintln!("Image saved: {}", path.display());
        }
    }

    let verdict = comparator.judge(&normal, &far)?;
    let report = Report::new(&config, &verdict);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    Ok(())
}
