//! # Benchtop CLI Application
//!
//! Generates bench protocols for gel extraction, ligation and restriction
//! digestion. Values not given as options are asked for interactively.
//!
//! ```text
//! benchtop ligation -v 5400 -i 540
//! benchtop gel-prep -w 100 -l 1200
//! benchtop gel-recovery -w 250 -l 3000 --volume 50
//! benchtop enzymes
//! benchtop single -l 3000 -s 2 -w 1000 -e EcoRI
//! benchtop --format json double -l 3000 -s 2 -w 1000 -e 1 -f 2
//! ```
//!
//! Logging goes to stderr; set `BENCHTOP_LOG` (e.g. `debug`) or pass
//! `--verbose` to see calculator steps.

mod prompt;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bench_core::enzymes::{all_enzymes, lookup_by_index, Enzyme, EnzymeKind};
use bench_core::protocols::{
    DoubleDigestPlan, GelPrepPlan, GelRecoveryPlan, LigationPlan, SingleDigestPlan,
};
use bench_core::units::{BasePairs, Nanograms};
use bench_core::{render, CalcError, CalcResult, ProtocolReport, ProtocolSettings, ReportFormat};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Benchtop CLI
#[derive(Parser)]
#[command(name = "benchtop")]
#[command(version)]
#[command(about = "Protocol generator for gel extraction, ligation and restriction digestion", long_about = None)]
struct Cli {
    /// Report format (rst or json)
    #[arg(long, global = true, default_value = "rst")]
    format: ReportFormat,

    /// JSON file overriding protocol settings (excess factor, volumes, incubation)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log calculator steps to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Vector and insert amounts for a 1:6 ligation
    Ligation {
        /// Size of the vector in [bp]
        #[arg(short = 'v', long)]
        vector: Option<f64>,
        /// Size of the insert in [bp]
        #[arg(short, long)]
        insert: Option<f64>,
    },

    /// DNA to load before gel extraction to end up with a desired weight
    GelPrep {
        /// Desired DNA weight after extraction in [ng]
        #[arg(short, long)]
        weight: Option<f64>,
        /// Size of the DNA in [bp]
        #[arg(short = 'l', long)]
        size: Option<f64>,
    },

    /// DNA expected after gel extraction of a known load
    GelRecovery {
        /// Loaded DNA weight in [ng]
        #[arg(short, long)]
        weight: Option<f64>,
        /// Size of the DNA in [bp]
        #[arg(short = 'l', long)]
        size: Option<f64>,
        /// Elution volume of the extraction mix
        #[arg(long)]
        volume: Option<f64>,
    },

    /// List available enzymes
    Enzymes,

    /// Single restriction digest protocol
    Single(DigestArgs),

    /// Double restriction digest protocol
    Double {
        #[command(flatten)]
        digest: DigestArgs,
        /// Second enzyme, by list number or name
        #[arg(short = 'f', long)]
        enzyme2: Option<String>,
    },
}

#[derive(Args)]
struct DigestArgs {
    /// Size of the DNA in [bp]
    #[arg(short = 'l', long)]
    size: Option<f64>,
    /// Number of recognition sites in the DNA
    #[arg(short, long)]
    sites: Option<u32>,
    /// Weight of the DNA in [ng]
    #[arg(short, long)]
    weight: Option<f64>,
    /// Enzyme, by list number or name
    #[arg(short, long)]
    enzyme: Option<String>,
}

/// Digest inputs after prompting
struct DigestInputs {
    size: BasePairs,
    sites: u32,
    weight: Nanograms,
    enzyme: &'static Enzyme,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("BENCHTOP_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&Path>) -> Result<ProtocolSettings> {
    let Some(path) = path else {
        return Ok(ProtocolSettings::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings file '{}'", path.display()))?;
    let settings = ProtocolSettings::from_json(&json)
        .with_context(|| format!("parsing settings file '{}'", path.display()))?;
    tracing::debug!(?settings, "loaded settings");
    Ok(settings)
}

/// Resolve a 1-based list number or an enzyme name.
fn resolve_enzyme(choice: &str) -> CalcResult<&'static Enzyme> {
    match choice.trim().parse::<usize>() {
        Ok(number) => {
            let index = number
                .checked_sub(1)
                .ok_or_else(|| CalcError::not_found("Enzyme", format!("list number {}", number)))?;
            lookup_by_index(index)
        }
        Err(_) => choice.parse::<EnzymeKind>().map(|kind| kind.enzyme()),
    }
}

fn print_enzyme_list() {
    for (i, enzyme) in all_enzymes().enumerate() {
        println!(
            "{:02}. {:<8} {:<10} {}",
            i + 1,
            enzyme.kind.code(),
            enzyme.site,
            enzyme.buffer
        );
    }
}

fn enzyme_or_ask(choice: Option<String>, label: &str) -> Result<&'static Enzyme> {
    if let Some(choice) = choice {
        return Ok(resolve_enzyme(&choice)?);
    }
    loop {
        println!("Please select the number of {} from the list below:", label);
        print_enzyme_list();
        let answer: String = prompt::ask("> ")?;
        match resolve_enzyme(&answer) {
            Ok(enzyme) => return Ok(enzyme),
            Err(err) => eprintln!("{}", err),
        }
    }
}

fn digest_inputs(args: DigestArgs) -> Result<DigestInputs> {
    let size = prompt::or_ask(args.size, "Please input the size of DNA in [bp]> ")?;
    let sites = prompt::or_ask(args.sites, "Please input the sites of DNA> ")?;
    let weight = prompt::or_ask(args.weight, "Please input the weight of DNA in [ng]> ")?;
    let enzyme = enzyme_or_ask(args.enzyme, "enzyme")?;
    Ok(DigestInputs {
        size: BasePairs(size),
        sites,
        weight: Nanograms(weight),
        enzyme,
    })
}

fn print_report<P: ProtocolReport>(plan: &P, format: ReportFormat) -> Result<()> {
    println!("{}", render(plan, format)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.settings.as_deref())?;

    match cli.command {
        Commands::Ligation { vector, insert } => {
            let vector = prompt::or_ask(vector, "Please input the size of Vector in [bp]> ")?;
            let insert = prompt::or_ask(insert, "Please input the size of Insert in [bp]> ")?;
            let plan = LigationPlan::new(BasePairs(vector), BasePairs(insert), &settings)?;
            print_report(&plan, cli.format)
        }

        Commands::GelPrep { weight, size } => {
            let weight = prompt::or_ask(weight, "Please input the desired weight of DNA in [ng]> ")?;
            let size = prompt::or_ask(size, "Please input the size of DNA in [bp]> ")?;
            let plan = GelPrepPlan::new(Nanograms(weight), BasePairs(size))?;
            print_report(&plan, cli.format)
        }

        Commands::GelRecovery { weight, size, volume } => {
            let weight = prompt::or_ask(weight, "Please input the loaded weight of DNA in [ng]> ")?;
            let size = prompt::or_ask(size, "Please input the size of DNA in [bp]> ")?;
            let volume = prompt::or_ask(volume, "Please input the elution volume> ")?;
            let plan = GelRecoveryPlan::new(Nanograms(weight), BasePairs(size), volume)?;
            print_report(&plan, cli.format)
        }

        Commands::Enzymes => {
            print_enzyme_list();
            Ok(())
        }

        Commands::Single(args) => {
            let input = digest_inputs(args)?;
            let plan = SingleDigestPlan::new(input.size, input.sites, input.weight, input.enzyme, &settings)?;
            print_report(&plan, cli.format)
        }

        Commands::Double { digest, enzyme2 } => {
            let input = digest_inputs(digest)?;
            let second = enzyme_or_ask(enzyme2, "enzyme2")?;
            let plan = DoubleDigestPlan::new(input.size, input.sites, input.weight, input.enzyme, second, &settings)?;
            print_report(&plan, cli.format)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc_error) = e.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc_error) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
