use std::io::Write;

use anyhow::{bail, Context, Result};
use argsgen_cli::{check, digest, emit, logging, report};
use argsgen_profiles::Profile;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "argsgen")]
#[command(about = "Generate GN args for ungoogled-chromium builds from fixed profiles")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available profiles
    List,

    /// Print a profile exactly as its standalone generator does
    Show {
        #[arg(value_enum)]
        profile: Profile,
    },

    /// Print only the generated args.gn text
    Emit {
        #[arg(value_enum)]
        profile: Profile,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Report flags assigned more than once (all profiles if omitted)
    Check {
        #[arg(value_enum)]
        profile: Option<Profile>,

        /// Fail when a flag is assigned conflicting values
        #[arg(long)]
        strict: bool,
    },

    /// Print the SHA-256 of the generated text (all profiles if omitted)
    Digest {
        #[arg(value_enum)]
        profile: Option<Profile>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List => cmd_list(&mut out),
        Commands::Show { profile } => {
            report::write_report(profile, &mut out).context("failed to write report")
        }
        Commands::Emit { profile, format } => cmd_emit(profile, format, &mut out),
        Commands::Check { profile, strict } => cmd_check(selected(profile), strict, &mut out),
        Commands::Digest { profile } => cmd_digest(selected(profile), &mut out),
    }
}

fn selected(profile: Option<Profile>) -> Vec<Profile> {
    match profile {
        Some(p) => vec![p],
        None => Profile::ALL.to_vec(),
    }
}

fn cmd_list(out: &mut impl Write) -> Result<()> {
    for p in Profile::ALL {
        writeln!(
            out,
            "{:<20} {:>3} flags  {}",
            p.name(),
            p.flag_set().len(),
            p.title()
        )?;
    }
    Ok(())
}

fn cmd_emit(profile: Profile, format: Format, out: &mut impl Write) -> Result<()> {
    tracing::info!(profile = %profile, format = ?format, "emitting");
    match format {
        Format::Text => write!(out, "{}", profile.generate())?,
        Format::Json => writeln!(out, "{}", emit::to_json(profile)?)?,
    }
    Ok(())
}

fn cmd_check(profiles: Vec<Profile>, strict: bool, out: &mut impl Write) -> Result<()> {
    let mut conflicting = Vec::new();

    for profile in profiles {
        let report = check::check_profile(profile)?;
        check::write_check(&report, out)?;
        if report.has_conflicts() {
            conflicting.push(profile.name());
        }
    }
    out.flush()?;

    if strict && !conflicting.is_empty() {
        bail!("conflicting flag values in: {}", conflicting.join(", "));
    }
    Ok(())
}

fn cmd_digest(profiles: Vec<Profile>, out: &mut impl Write) -> Result<()> {
    for profile in profiles {
        writeln!(out, "{}  {}", digest::artifact_digest(profile), profile)?;
    }
    Ok(())
}
