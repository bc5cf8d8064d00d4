use std::time::Instant;

use clap::Parser;
use ib_matrix::immutable::ImmutableRowMatrix;
use ib_matrix::mutable::MutableRowMatrix;
use ib_matrix::rows::RowStorage;
use ib_matrix::{Matrix, MatrixError};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{info, info_span, warn};
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Width and height of the square operands.
    #[arg(short, long, default_value_t = 90)]
    size: usize,

    /// How many times each engine runs the pipeline.
    #[arg(short, long, default_value_t = 10)]
    iterations: usize,

    /// Seed for the operand generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), MatrixError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let lhs = RowStorage::<i64>::rand(&mut rng, args.size, args.size)?;
    let rhs = RowStorage::<i64>::rand(&mut rng, args.size, args.size)?;
    info!(size = args.size, iterations = args.iterations, "generated operands");

    let immutable_lhs = ImmutableRowMatrix::from_storage(lhs.clone());
    let mut immutable_result = immutable_lhs.clone();
    let start = Instant::now();
    info_span!("immutable engine").in_scope(|| -> Result<(), MatrixError> {
        for _ in 0..args.iterations {
            immutable_result = immutable_lhs
                .add(&rhs)?
                .scalar_multiply(3)
                .matrix_multiply(&rhs)?
                .subtract(&rhs)?;
        }
        Ok(())
    })?;
    info!(elapsed = ?start.elapsed(), "immutable engine finished");

    // One fresh receiver per iteration, built outside the timed region.
    let mut receivers: Vec<_> = (0..args.iterations)
        .map(|_| MutableRowMatrix::from_storage(lhs.clone()))
        .collect();
    let start = Instant::now();
    info_span!("mutable engine").in_scope(|| -> Result<(), MatrixError> {
        for receiver in &mut receivers {
            receiver
                .add(&rhs)?
                .scalar_multiply(3)
                .matrix_multiply(&rhs)?
                .subtract(&rhs)?;
        }
        Ok(())
    })?;
    info!(elapsed = ?start.elapsed(), "mutable engine finished");

    let mutable_result = receivers
        .pop()
        .unwrap_or_else(|| MutableRowMatrix::from_storage(lhs));
    if !mutable_result.equals(&immutable_result) {
        warn!("engines disagree on the pipeline result");
    } else {
        info!("engines agree");
    }
    Ok(())
}
