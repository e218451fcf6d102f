//! statexpr command-line interface

use clap::{Args, Parser, Subcommand};
use statexpr::cli::{deps, evaluate, output, substitute};
use std::path::PathBuf;

/// Derived statistic expression tool
#[derive(Parser)]
#[command(name = "statexpr")]
#[command(author, version, about = "Evaluate and inspect derived statistic expressions", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text", global = true)]
    format: String,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ExpressionArgs {
    /// Expression of the form `derived = expression`
    expression: String,

    /// Category for unqualified statistic names
    #[arg(short, long, default_value = "default")]
    category: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived statistic and the statistics it reads
    Deps {
        #[command(flatten)]
        expr: ExpressionArgs,
    },

    /// Evaluate with one value per statistic
    Eval {
        #[command(flatten)]
        expr: ExpressionArgs,

        /// Values file (JSON object of reference -> number)
        #[arg(long)]
        values: Option<PathBuf>,

        /// Placeholders (key=value)
        #[arg(short, long = "placeholder")]
        placeholders: Vec<String>,
    },

    /// Evaluate with a list of samples per statistic
    Samples {
        #[command(flatten)]
        expr: ExpressionArgs,

        /// Values file (JSON object of reference -> array of numbers)
        #[arg(long)]
        values: PathBuf,
    },

    /// Replace known statistics with their values and print the result
    Substitute {
        #[command(flatten)]
        expr: ExpressionArgs,

        /// Values file (JSON object of reference -> number or array of numbers)
        #[arg(long)]
        values: PathBuf,
    },
}

impl Commands {
    fn expression(&self) -> &str {
        match self {
            Self::Deps { expr }
            | Self::Eval { expr, .. }
            | Self::Samples { expr, .. }
            | Self::Substitute { expr, .. } => &expr.expression,
        }
    }
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let format = output::OutputFormat::parse(&cli.format);
    let source = cli.command.expression().to_string();
    log::debug!("running against `{source}`");

    let result = match cli.command {
        Commands::Deps { expr } => deps::deps(deps::DepsConfig {
            expression: expr.expression,
            category: expr.category,
            format,
        }),

        Commands::Eval {
            expr,
            values,
            placeholders,
        } => evaluate::eval(evaluate::EvalConfig {
            expression: expr.expression,
            category: expr.category,
            values,
            placeholders,
            verbose: cli.verbose,
            format,
        }),

        Commands::Samples { expr, values } => evaluate::samples(evaluate::SamplesConfig {
            expression: expr.expression,
            category: expr.category,
            values,
            verbose: cli.verbose,
            format,
        }),

        Commands::Substitute { expr, values } => {
            substitute::substitute(substitute::SubstituteConfig {
                expression: expr.expression,
                category: expr.category,
                values,
                format,
            })
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e, &source));
        std::process::exit(1);
    }
}
