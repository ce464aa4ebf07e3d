use clap::Parser;
use roadtour::{
    Result,
    config::TourParams,
    fs::TourReport,
    graph::RoadGraph,
    tour::plan_tour,
};
use std::{path::PathBuf, process::ExitCode};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Nearest-neighbor tours over real road distances
#[derive(Parser, Debug)]
#[command(name = "roadtour")]
#[command(about = "Greedy TSP tours where distance is shortest-path cost on a road network", long_about = None)]
struct Args {
    /// Road network in JSON form. A synthetic street grid is generated when omitted
    #[arg(long)]
    network: Option<PathBuf>,

    /// Rows of the synthetic grid
    #[arg(long, default_value_t = 30)]
    grid_rows: usize,

    /// Columns of the synthetic grid
    #[arg(long, default_value_t = 30)]
    grid_cols: usize,

    /// Number of nodes to sample for the tour
    #[arg(short, long, default_value_t = TourParams::default().sample_size)]
    n: usize,

    /// Seed for node sampling (and for the synthetic grid)
    #[arg(short, long, default_value_t = TourParams::default().seed)]
    seed: u64,

    /// Where to write the tour report consumed by the map renderer
    #[arg(short, long, default_value = "tsp_tour.json")]
    out: PathBuf,
}

fn run(args: &Args) -> Result<()> {
    let network = match &args.network {
        Some(path) => RoadGraph::load_json(path)?,
        None => RoadGraph::synthetic_grid(args.grid_rows, args.grid_cols, args.seed)?,
    };

    let plan = plan_tour(&network, &TourParams::new(args.n, args.seed))?;

    println!("Tour: {:?}", plan.tour.sample_positions());
    println!("Tour length ≈ {:.2} km", plan.length.kilometres());

    TourReport::from_plan(&plan)?.write_json(&args.out)?;
    println!("Saved report: {}", args.out.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
