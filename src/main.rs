//! Greets people and approximates square roots.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use greetings::config::{AppConfig, config_schema, load_config};
use greetings::ui::cli::drivers::InquireDriver;
use greetings::ui::cli::run_session;
use greetings::{Greeter, GreetingFormat, logging};

#[derive(Parser)]
#[command(
    name = "greetings",
    version,
    about = "Seeded greetings and a bounded Newton square root"
)]
struct Cli {
    /// JSON settings file. Missing file = defaults.
    #[arg(long, global = true, default_value = "greetings.json")]
    config: PathBuf,

    /// Seed for picking greeting phrasings. Overrides the settings file.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a greeting for one name.
    Hello {
        name: String,
        /// Use this phrasing instead of a random one.
        #[arg(long)]
        format: Option<GreetingFormat>,
    },
    /// Print a greeting for every name, sorted by name.
    Hellos {
        #[arg(required = true)]
        names: Vec<String>,
        /// Print a JSON object instead of `name: message` lines.
        #[arg(long)]
        json: bool,
    },
    /// Approximate the square root of a number.
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        target: f64,
        /// Maximum number of Newton updates.
        #[arg(long)]
        budget: Option<u32>,
        /// Stop once successive estimates differ by at most this much.
        #[arg(long)]
        tolerance: Option<f64>,
        /// Also print iteration count, stop reason and residual.
        #[arg(long, conflicts_with = "json")]
        report: bool,
        /// Print the full approximation as JSON. Non-finite numbers are
        /// written as strings (`"NaN"`, `"inf"`).
        #[arg(long)]
        json: bool,
    },
    /// Prompt for a name and a number.
    Interactive,
    /// Print the JSON Schema of the settings file.
    Schema,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = || load_config(&cli.config).context("load settings");

    match &cli.command {
        Command::Hello { name, format } => {
            let seed = cli.seed.or(settings()?.seed);
            cmd_hello(name, *format, seed)
        }
        Command::Hellos { names, json } => {
            let seed = cli.seed.or(settings()?.seed);
            cmd_hellos(names, *json, seed)
        }
        Command::Sqrt {
            target,
            budget,
            tolerance,
            report,
            json,
        } => cmd_sqrt(&settings()?, *target, *budget, *tolerance, *report, *json),
        Command::Interactive => {
            let cfg = settings()?;
            let seed = cli.seed.or(cfg.seed);
            cmd_interactive(&cfg, seed)
        }
        Command::Schema => cmd_schema(),
    }
}

fn greeter(seed: Option<u64>) -> Greeter {
    match seed {
        Some(seed) => Greeter::seeded(seed),
        None => Greeter::from_os_rng(),
    }
}

fn cmd_hello(name: &str, format: Option<GreetingFormat>, seed: Option<u64>) -> Result<()> {
    let message = match format {
        Some(format) => format.greet(name)?,
        None => greeter(seed).hello(name)?,
    };
    println!("{message}");
    Ok(())
}

fn cmd_hellos(names: &[String], json: bool, seed: Option<u64>) -> Result<()> {
    let messages = greeter(seed).hellos(names)?;
    if json {
        let payload = serde_json::to_string_pretty(&messages).context("serialize greetings")?;
        println!("{payload}");
    } else {
        for (name, message) in &messages {
            println!("{name}: {message}");
        }
    }
    Ok(())
}

fn cmd_sqrt(
    cfg: &AppConfig,
    target: f64,
    budget: Option<u32>,
    tolerance: Option<f64>,
    report: bool,
    json: bool,
) -> Result<()> {
    let mut settings = cfg.approximation.clone();
    if let Some(budget) = budget {
        settings.iteration_budget = budget;
    }
    if tolerance.is_some() {
        settings.tolerance = tolerance;
    }
    let approximator = settings.build().context("configure approximator")?;

    let a = approximator.approximate(target);
    if json {
        let payload = serde_json::to_string_pretty(&a).context("serialize approximation")?;
        println!("{payload}");
        return Ok(());
    }
    println!("{}", a.value);
    if report {
        println!("iterations: {}", a.iterations);
        println!("termination: {}", a.termination);
        println!("residual: {}", a.residual());
    }
    Ok(())
}

fn cmd_interactive(cfg: &AppConfig, seed: Option<u64>) -> Result<()> {
    let approximator = cfg.approximation.build().context("configure approximator")?;
    let mut greeter = greeter(seed);
    run_session(&InquireDriver, &mut greeter, &approximator, &mut io::stdout())
}

fn cmd_schema() -> Result<()> {
    let schema = serde_json::to_string_pretty(&config_schema()).context("serialize schema")?;
    println!("{schema}");
    Ok(())
}
