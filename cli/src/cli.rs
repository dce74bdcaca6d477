//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use cistern::{Catchment, DEFAULT_MAX_CELLS, Options, RenderStyle, Strategy};

/// Cistern - count the rainwater trapped by a skyline of columns
#[derive(Parser, Debug)]
#[command(name = "cistern", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count the water trapped by one height list, e.g. "[4, 0, 2]"
    Collect(CollectArgs),

    /// Count the water for each height list in a file, one per line
    Run(RunArgs),

    /// Run the built-in sample skylines
    Demo(DemoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `collect` command.
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Height list, bracketed or bare: "[4, 0, 2]", "4,0,2" or "4 0 2"
    #[arg(allow_hyphen_values = true)]
    pub heights: String,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(flatten)]
    pub draw: DrawArgs,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// File with one height list per line (use "-" for stdin)
    pub file: String,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(flatten)]
    pub draw: DrawArgs,
}

/// Arguments for the `demo` command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Mark trapped water with `~` in the drawings
    #[arg(long)]
    pub water: bool,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Engine settings shared by the measuring commands.
#[derive(Args, Debug)]
pub struct EngineArgs {
    /// Engine formulation to use
    #[arg(long, default_value = "scan")]
    pub strategy: StrategyArg,

    /// Largest occupancy grid, in cells, that will be built
    #[arg(long, default_value_t = DEFAULT_MAX_CELLS)]
    pub max_cells: usize,
}

impl EngineArgs {
    pub fn options(&self) -> Options {
        let strategy = match self.strategy {
            StrategyArg::Scan | StrategyArg::Both => Strategy::Scan,
            StrategyArg::RunningMax => Strategy::RunningMax,
        };
        Options::default()
            .with_strategy(strategy)
            .with_max_cells(self.max_cells)
    }
}

/// Drawing settings shared by `collect` and `run`.
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Draw the occupancy grid before the count
    #[arg(long)]
    pub draw: bool,

    /// Mark trapped water with `~` (implies --draw)
    #[arg(long)]
    pub water: bool,

    /// Prefix each drawn row with its elevation (implies --draw)
    #[arg(long)]
    pub labels: bool,
}

impl DrawArgs {
    pub fn enabled(&self) -> bool {
        self.draw || self.water || self.labels
    }

    /// The drawing for `catchment`, empty when drawing is off.
    pub fn render(&self, catchment: &Catchment) -> String {
        if !self.enabled() {
            String::new()
        } else if self.labels {
            catchment.draw_labeled(&self.style())
        } else {
            catchment.draw(&self.style())
        }
    }

    pub fn style(&self) -> RenderStyle {
        if self.water {
            RenderStyle::with_water()
        } else {
            RenderStyle::default()
        }
    }
}

/// Engine formulation selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Scan the occupancy grid cell by cell
    #[default]
    Scan,
    /// Use running maxima over the heights
    RunningMax,
    /// Run both and compare results
    Both,
}
