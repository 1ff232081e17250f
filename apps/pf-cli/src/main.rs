use clap::{Parser, Subcommand, ValueEnum};
use pf_models::{DynamicalSystem, Lorenz96, SystemKind};
use pf_sim::{
    integrate, run_sweep, run_sweep_parallel, IntegratorKind, SimOptions, SweepGrid, Trajectory,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Model error: {0}")]
    Model(#[from] pf_models::ModelError),

    #[error("Simulation error: {0}")]
    Sim(#[from] pf_sim::SimError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PhaseFlow CLI - chaotic attractor trajectory simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in dynamical systems
    Systems,
    /// Integrate a single trajectory and export the samples
    Run {
        /// System name (lorenz, lorenz96, aizawa, brusselator, thomas, repressilator)
        system: String,
        /// Final simulation time (defaults to the system's reference span)
        #[arg(long)]
        t_end: Option<f64>,
        /// Number of uniformly spaced samples
        #[arg(long)]
        points: Option<usize>,
        /// Use forward Euler instead of RK4
        #[arg(long)]
        euler: bool,
        /// Ring size for lorenz96 (>= 4)
        #[arg(long)]
        n: Option<usize>,
        /// Forcing term for lorenz96
        #[arg(long)]
        forcing: Option<f64>,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Run a grid sweep of offset initial conditions
    Sweep {
        /// System name
        system: String,
        /// Number of grid rows
        #[arg(long, default_value_t = 2)]
        gridx: usize,
        /// Number of grid columns
        #[arg(long, default_value_t = 2)]
        gridy: usize,
        /// Additive offset applied per grid index
        #[arg(long, default_value_t = 0.2)]
        offset_step: f64,
        /// State axis offset by the row index
        #[arg(long, default_value_t = 0)]
        row_axis: usize,
        /// State axis offset by the column index
        #[arg(long, default_value_t = 1)]
        col_axis: usize,
        /// Do not offset any axis by the row index
        #[arg(long)]
        no_row_offset: bool,
        /// Do not offset any axis by the column index
        #[arg(long)]
        no_col_offset: bool,
        /// Integrate grid cells on a rayon thread pool
        #[arg(long)]
        parallel: bool,
        /// Final simulation time (defaults to the system's reference span)
        #[arg(long)]
        t_end: Option<f64>,
        /// Number of uniformly spaced samples
        #[arg(long)]
        points: Option<usize>,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Systems => cmd_systems(),
        Commands::Run {
            system,
            t_end,
            points,
            euler,
            n,
            forcing,
            output,
            format,
        } => cmd_run(&system, t_end, points, euler, n, forcing, output.as_deref(), format),
        Commands::Sweep {
            system,
            gridx,
            gridy,
            offset_step,
            row_axis,
            col_axis,
            no_row_offset,
            no_col_offset,
            parallel,
            t_end,
            points,
            output,
            format,
        } => {
            let grid = SweepGrid {
                gridx,
                gridy,
                offset_step,
                row_axis: (!no_row_offset).then_some(row_axis),
                col_axis: (!no_col_offset).then_some(col_axis),
            };
            cmd_sweep(
                &system,
                grid,
                parallel,
                t_end,
                points,
                output.as_deref(),
                format,
            )
        }
    }
}

fn cmd_systems() -> CliResult<()> {
    println!("Built-in systems:");
    for kind in SystemKind::ALL {
        let sys = kind.build();
        let (t_end, n_points) = sys.default_span();
        println!(
            "  {:<14} dim={}  default span: t_end={}  points={}",
            kind.key(),
            sys.dim(),
            t_end,
            n_points
        );
    }
    Ok(())
}

/// Build the requested system, applying lorenz96 overrides if given.
fn build_system(
    name: &str,
    n: Option<usize>,
    forcing: Option<f64>,
) -> CliResult<Box<dyn DynamicalSystem>> {
    let kind: SystemKind = name.parse()?;
    if kind == SystemKind::Lorenz96 && (n.is_some() || forcing.is_some()) {
        let defaults = Lorenz96::default();
        let sys = Lorenz96::new(
            n.unwrap_or(defaults.n()),
            forcing.unwrap_or(defaults.forcing),
        )?;
        return Ok(Box::new(sys));
    }
    Ok(kind.build())
}

fn sim_options(
    sys: &dyn DynamicalSystem,
    t_end: Option<f64>,
    points: Option<usize>,
    euler: bool,
) -> SimOptions {
    let (default_t_end, default_points) = sys.default_span();
    SimOptions {
        t_end: t_end.unwrap_or(default_t_end),
        n_points: points.unwrap_or(default_points),
        integrator: if euler {
            IntegratorKind::ForwardEuler
        } else {
            IntegratorKind::RK4
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_run(
    system: &str,
    t_end: Option<f64>,
    points: Option<usize>,
    euler: bool,
    n: Option<usize>,
    forcing: Option<f64>,
    output: Option<&Path>,
    format: Format,
) -> CliResult<()> {
    let sys = build_system(system, n, forcing)?;
    let opts = sim_options(sys.as_ref(), t_end, points, euler);

    info!(
        system = sys.name(),
        t_end = opts.t_end,
        n_points = opts.n_points,
        "integrating"
    );
    let traj = integrate(sys.as_ref(), &sys.default_state(), &opts)?;
    if traj.has_diverged() {
        warn!("trajectory contains non-finite samples");
    }

    export_trajectories(std::slice::from_ref(&traj), output, format)?;
    info!(samples = traj.n_points(), "export complete");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_sweep(
    system: &str,
    grid: SweepGrid,
    parallel: bool,
    t_end: Option<f64>,
    points: Option<usize>,
    output: Option<&Path>,
    format: Format,
) -> CliResult<()> {
    let sys = build_system(system, None, None)?;
    let opts = sim_options(sys.as_ref(), t_end, points, false);

    info!(
        system = sys.name(),
        gridx = grid.gridx,
        gridy = grid.gridy,
        offset_step = grid.offset_step,
        "sweeping"
    );
    let result = if parallel {
        run_sweep_parallel(sys.as_ref(), &sys.default_state(), &grid, &opts)?
    } else {
        run_sweep(sys.as_ref(), &sys.default_state(), &grid, &opts)?
    };

    export_trajectories(&result, output, format)?;
    info!(trajectories = result.len(), "export complete");
    Ok(())
}

/// Write trajectories as CSV (cell, time, one column per component) or JSON.
fn export_trajectories(
    trajectories: &[Trajectory],
    output: Option<&Path>,
    format: Format,
) -> CliResult<()> {
    let text = match format {
        Format::Csv => to_csv(trajectories),
        Format::Json => serde_json::to_string_pretty(trajectories)?,
    };

    match output {
        Some(path) => std::fs::write(path, text)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

fn to_csv(trajectories: &[Trajectory]) -> String {
    let dim = trajectories.first().map_or(0, |t| t.dim());
    let mut csv = String::from("cell,time");
    for i in 1..=dim {
        csv.push_str(&format!(",x{i}"));
    }
    csv.push('\n');

    for (cell, traj) in trajectories.iter().enumerate() {
        for (t, state) in traj.times.iter().zip(&traj.states) {
            csv.push_str(&format!("{cell},{t}"));
            for v in state.iter() {
                csv.push_str(&format!(",{v}"));
            }
            csv.push('\n');
        }
    }
    csv
}
