use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use edsgen::alphabet::Alphabet;
use edsgen::config::GeneratorConfig;
use edsgen::envelope::AverageSettings;
use edsgen::{generator, io, logger};

use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "edsgen", about = "Random elastic degenerate string generator")]
struct Opt {
    /// Alphabet type (D for DNA, P for Protein)
    #[structopt(short, long, default_value = "D")]
    alphabet: Alphabet,

    /// Probability of a degenerate segment on each position
    #[structopt(short, long, default_value = "0.18")]
    probability: f64,

    /// Gaussian mean of the length of a degenerate segment variant
    #[structopt(short = "e", long, default_value = "4")]
    average: f64,

    /// Gaussian standard deviation of the variant length
    #[structopt(short, long, default_value = "0.5")]
    deviation: f64,

    /// Gaussian mean of the number of variants in a degenerate segment
    #[structopt(short, long, default_value = "3")]
    number: f64,

    /// Gaussian standard deviation of the number of variants
    #[structopt(short = "m", long = "ndeviation", default_value = "0.5")]
    number_deviation: f64,

    /// Probability of starting a nested segment inside a variant
    #[structopt(short = "r", long = "recursive", default_value = "0.1")]
    recursion_probability: f64,

    /// Maximum depth of nested segments
    #[structopt(short = "b", long = "maxdepth", default_value = "5")]
    max_depth: usize,

    /// Length of the generated EDS
    #[structopt(short, long, default_value = "1000")]
    length: usize,

    /// Output file
    #[structopt(short, long, parse(from_os_str), default_value = "output.eds")]
    output: PathBuf,

    /// Random seed; a time-based one is used and logged when absent
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Verbose output (-v debug, -vv trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl Opt {
    fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            alphabet: self.alphabet,
            probability: self.probability,
            averages: AverageSettings {
                length_mean: self.average,
                length_deviation: self.deviation,
                count_mean: self.number,
                count_deviation: self.number_deviation,
            },
            recursion_probability: self.recursion_probability,
            max_depth: self.max_depth,
            length: self.length,
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn run(opt: &Opt) -> edsgen::Result<()> {
    let config = opt.to_config();
    let seed = opt.seed.unwrap_or_else(time_seed);

    info!("Random EDS string generator {}", env!("CARGO_PKG_VERSION"));
    config.log_summary();
    info!("  EDS output file: {}", opt.output.display());
    info!("  seed: {}", seed);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let assembly = generator::assemble(&config, &mut rng)?;

    let stats = &assembly.stats;
    info!(
        "generated {} bytes: {} literal symbols, {} degenerate segments, \
         {} nested (deepest level {})",
        assembly.eds.len(),
        stats.literal_symbols,
        stats.top_level_segments,
        stats.nested_segments,
        stats.deepest_depth
    );

    io::write_eds(&opt.output, &assembly.eds)?;
    info!("EDS written to {}", opt.output.display());
    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    if let Err(e) = logger::init_logger(logger::level_for_verbosity(opt.verbose)) {
        eprintln!("could not initialise logger: {}", e);
    }

    if let Err(e) = run(&opt) {
        error!("{}", e);
        process::exit(1);
    }
}
