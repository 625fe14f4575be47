use anyhow::Context;
use bricks::{
    GeneratorConfig, GreedyLayout, PuzzleEngine, pack::FallbackPolicy, partition::SeedOrder,
};
use clap::Parser;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::SplitMix64;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{io::RecordWriter, record::JsonRecord};

mod io;
mod record;

#[derive(Parser, Debug)]
#[command(name = "brickgen", version, about = "Cut a crossword of words into letter bricks")]
struct Cli {
    /// Words to lay out.
    #[arg(required = true)]
    words: Vec<String>,
    /// Base seed; puzzle seeds are derived from it. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of puzzles to generate.
    #[arg(long, default_value_t = 1)]
    count: u32,
    /// Hint passed through to the output.
    #[arg(long, default_value = "")]
    hint: String,
    /// Seed bricks from the rim of the grid inwards.
    #[arg(long)]
    edge_first: bool,
    /// Fail instead of leaving an unplaceable brick where it was.
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed_order: if self.edge_first {
                SeedOrder::EdgeFirst
            } else {
                SeedOrder::Shuffled
            },
            fallback: if self.strict {
                FallbackPolicy::Fail
            } else {
                FallbackPolicy::Original
            },
            ..GeneratorConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let mut sm = match cli.seed {
        Some(seed) => SplitMix64::seed_from_u64(seed),
        None => SplitMix64::from_os_rng(),
    };
    let mut out = RecordWriter::new(std::io::stdout().lock());

    for id in 0..cli.count {
        let seed = sm.next_u64();
        let mut engine = PuzzleEngine::with_seed(config, GreedyLayout, seed);
        let generation = engine
            .generate_report(&cli.words, &cli.hint)
            .with_context(|| format!("puzzle {id} (seed {seed})"))?;
        debug!(id, seed, "assembled grid:\n{}", generation.cells);

        out.write(&JsonRecord {
            schema: "v1",
            id,
            seed,
            words: &cli.words,
            state: generation.state,
            fallbacks: generation.fallbacks,
        })?;
    }

    out.finish()
}
