use clap::Parser;
use log::info;
use sine_array::{DEFAULT_SAMPLE_COUNT, SineArrays, WaveShape};

#[derive(Parser, Debug)]
#[command(name = "generate_sine_array")]
#[command(about = "Generates 8-bit sine lookup tables as C source", long_about = None)]
struct Args {
    /// Value of the SAMPLE_COUNT define (256, 512 or 1024)
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    sample_count: usize,

    /// Portion of the sine period covered by each table (full, half, quarter)
    #[arg(long, default_value = "full")]
    wave: WaveShape,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    info!("Generating sine arrays:");
    info!("  SAMPLE_COUNT: {}", args.sample_count);
    info!("  WAVE: {:?}", args.wave);

    let arrays = SineArrays::new(args.sample_count, args.wave)?;
    print!("{}", arrays.render());

    info!("Sanity checks:");
    for (count, samples) in &arrays.tables {
        for (index, value) in quarter_points(samples) {
            info!("  [{}] sample at i={}: {}", count, index, value);
        }
    }
    if arrays.shape == WaveShape::Full {
        info!("  (expected for full wave: 128, 255, 128, 0)");
    }

    Ok(())
}

/// Samples at 0, 1/4, 1/2 and 3/4 of the table.
fn quarter_points(samples: &[u8]) -> Vec<(usize, u8)> {
    (0..4)
        .map(|quarter| samples.len() * quarter / 4)
        .filter_map(|index| samples.get(index).map(|&value| (index, value)))
        .collect()
}
