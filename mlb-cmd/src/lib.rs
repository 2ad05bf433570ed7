//! Command implementations for the MLB chart CLI.
//!
//! Provides subcommands for checking chart data files and for printing the
//! render plan or tooltip the browser apps would produce for them.

use clap::{Args, Subcommand, ValueEnum};
use mlb_narrative::{ChartConfig, ChartVariant, NarrativeController};

pub mod inspect;
pub mod plan;

/// Which chart the data is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// One static bar chart
    Single,
    /// Four pages without annotations
    Plain,
    /// Four pages with axis titles and callouts
    Annotated,
}

impl From<Variant> for ChartVariant {
    fn from(value: Variant) -> Self {
        match value {
            Variant::Single => ChartVariant::Single,
            Variant::Plain => ChartVariant::Plain,
            Variant::Annotated => ChartVariant::Annotated,
        }
    }
}

/// Input files shared by every subcommand.
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Path to the team aggregates CSV
    #[arg(short = 't', long = "teams")]
    pub teams_csv: String,

    /// Path to the home-run CSV (needed by the four-page charts)
    #[arg(short = 'r', long = "homeruns")]
    pub homeruns_csv: Option<String>,

    /// Chart variant
    #[arg(long, value_enum, default_value_t = Variant::Annotated)]
    pub variant: Variant,

    /// JSON file overriding chart geometry and styling
    #[arg(long)]
    pub config: Option<String>,
}

/// File contents read for a command.
pub struct Inputs {
    pub teams: String,
    pub homeruns: Option<String>,
    pub config: ChartConfig,
    pub variant: ChartVariant,
}

impl DataArgs {
    pub fn read(&self) -> anyhow::Result<Inputs> {
        let teams = std::fs::read_to_string(&self.teams_csv)?;
        let homeruns = match &self.homeruns_csv {
            Some(path) => Some(std::fs::read_to_string(path)?),
            None => None,
        };
        let config = match &self.config {
            Some(path) => ChartConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => ChartConfig::default(),
        };
        Ok(Inputs {
            teams,
            homeruns,
            config,
            variant: self.variant.into(),
        })
    }
}

impl Inputs {
    pub fn controller(&self) -> anyhow::Result<NarrativeController> {
        Ok(NarrativeController::from_csv(
            self.config.clone(),
            self.variant,
            &self.teams,
            self.homeruns.as_deref(),
        )?)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a data set: row counts, leaders and unknown team codes
    Inspect {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Print the render plan for a page as JSON
    Plan {
        #[command(flatten)]
        data: DataArgs,

        /// Page token to navigate to
        #[arg(short = 'p', long, default_value = "1")]
        page: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the tooltip HTML for a mark, e.g. `bar:0` or `circle:3`
    Tooltip {
        #[command(flatten)]
        data: DataArgs,

        #[arg(short = 'm', long)]
        mark: String,
    },
}

/// Run a command and return what it prints.
pub fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Inspect { data } => {
            let inputs = data.read()?;
            inspect::run_inspect(&inputs.teams, inputs.homeruns.as_deref())
        }
        Command::Plan { data, page, pretty } => {
            let inputs = data.read()?;
            plan::run_plan(&inputs, &page, pretty)
        }
        Command::Tooltip { data, mark } => {
            let inputs = data.read()?;
            plan::run_tooltip(&inputs, &mark)
        }
    }
}
