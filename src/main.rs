use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use dexplain::{explain, Error, Options, Query, Source, DEFAULT_URL};

const EXAMPLES: &str = "\
Examples:
  dexplain --name const/16         Search by opcode name
  dexplain -n move-object          Short option
  dexplain --hex 0A                Search by hex value
  dexplain --name const --verbose  Show syntax, explanation and example";

/// Dalvik opcode explorer: look up Dalvik opcodes by name or hex value.
#[derive(Parser)]
#[command(version, after_help = EXAMPLES)]
#[command(group(ArgGroup::new("query").required(true).args(["name", "hex"])))]
struct Args {
    /// Search by opcode name. Matches every opcode whose name contains this
    /// text, ignoring case (e.g. "const/16", "result").
    #[arg(short, long)]
    name: Option<String>,

    /// Search by opcode hex value (e.g. "0A", "0x1f").
    #[arg(long)]
    hex: Option<String>,

    /// Also show syntax, explanation and example.
    #[arg(short, long)]
    verbose: bool,

    /// Page with the opcode table.
    #[arg(long, env = "DEXPLAIN_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Read the opcode table from a saved copy of the page instead of fetching it.
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let result = run(args, &mut io::stdout().lock());
    ExitCode::from(report(&result, &mut io::stderr()))
}

fn run(args: Args, out: &mut impl Write) -> Result<()> {
    // Validate the query before going to the network.
    let query = match (args.name, args.hex) {
        (Some(name), _) => Query::Name(name),
        (None, Some(hex)) => Query::from_hex(&hex)?,
        (None, None) => bail!("expected --name or --hex"),
    };

    let source = match args.file {
        Some(path) => Source::File(path),
        None => Source::Url(args.url),
    };
    let html = source.load()?;

    let opts = Options {
        verbose: args.verbose,
        source: source.to_string(),
    };
    explain(out, &html, &query, &opts)?;

    Ok(())
}

/// Prints a failed run as a single `error: ...` line and returns the exit
/// status. `NotFound` was already printed by the presenter.
fn report(result: &Result<()>, err_out: &mut impl Write) -> u8 {
    let Err(e) = result else {
        return 0;
    };
    if !matches!(e.downcast_ref::<Error>(), Some(Error::NotFound(_))) {
        // Nothing useful to do if stderr is gone.
        let _ = writeln!(err_out, "error: {e:#}");
    }
    1
}
