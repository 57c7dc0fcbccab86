use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;

use tsp_ga::distance::DistanceMatrix;
use tsp_ga::ga::{GaConfig, GaRunner};
use tsp_ga::io::{load_cities, write_tour_csv, write_trace_csv};
use tsp_ga::logging;

/// Search for a short closed tour over a list of geographic cities.
#[derive(Parser)]
#[command(name = "tsp-ga", version, about)]
struct Cli {
    /// City file: one `NAME LAT LON` per line, underscores in names
    /// standing for spaces.
    #[arg(default_value = "tsp.dat")]
    input: PathBuf,

    /// Where to write the best tour as CSV.
    #[arg(short, long, default_value = "best_tour.csv")]
    output: PathBuf,

    /// Where to write the per-generation best-distance trace as CSV.
    #[arg(long, default_value = "trace.csv")]
    trace: PathBuf,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Population size.
    #[arg(long, default_value_t = 300)]
    population: usize,

    /// Number of generations.
    #[arg(long, default_value_t = 1000)]
    generations: usize,

    /// Probability of crossing each selected pair.
    #[arg(long, default_value_t = 0.85)]
    crossover_rate: f64,

    /// Outer per-individual mutation probability.
    #[arg(long, default_value_t = 0.2)]
    mutation_rate: f64,

    /// Inner probability that a considered mutation actually inverts.
    #[arg(long, default_value_t = 0.825)]
    inversion_rate: f64,

    /// Tournament size for parent selection.
    #[arg(long, default_value_t = 3)]
    tournament: usize,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.quiet) {
        eprintln!("failed to install logger: {err}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> tsp_ga::Result<()> {
    let now = Instant::now();

    let cities = load_cities(&cli.input)?;
    info!(
        "loaded {} cities from {}",
        cities.len(),
        cli.input.display()
    );

    let matrix = DistanceMatrix::from_coords(&cities.coords)?;

    let config = GaConfig::default()
        .with_seed(cli.seed)
        .with_population_size(cli.population)
        .with_max_generations(cli.generations)
        .with_crossover_rate(cli.crossover_rate)
        .with_mutation_rate(cli.mutation_rate)
        .with_inversion_rate(cli.inversion_rate)
        .with_tournament_size(cli.tournament);

    let result = GaRunner::run(&matrix, &config)?;
    info!(
        "finished {} generations in {:.2}s",
        result.generations,
        now.elapsed().as_secs_f32()
    );

    info!("best tour:");
    for (pos, &city) in result.best_tour.iter().enumerate() {
        info!("  {:>3}. {}", pos + 1, cities.names[city]);
    }
    info!("best distance = {:.4} miles", result.best_distance);

    write_tour_csv(&cli.output, &result.best_tour, &cities.names, result.best_distance)?;
    write_trace_csv(&cli.trace, &result.fitness_history)?;
    info!(
        "wrote {} and {}",
        cli.output.display(),
        cli.trace.display()
    );

    Ok(())
}
