use std::{
    io::{self, Write},
    num::NonZeroUsize,
};

use clap::{Parser, ValueEnum};
use seqs::{
    ArraySequence,
    LinkedSequence,
    Sequence,
    SequenceError,
    DEFAULT_GROWTH_UNIT,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Runs the same scripted session against each storage strategy and prints
/// what it sees, failures included.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Storage strategy to exercise
    #[arg(long, value_enum, default_value_t = Storage::Both)]
    storage: Storage,
    /// Slots added per growth step of the array storage
    #[arg(long, default_value_t = DEFAULT_GROWTH_UNIT)]
    growth_unit: NonZeroUsize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Storage {
    Linked,
    Array,
    Both,
}

fn init_logging() {
    // Library records go through `log`
    tracing_log::LogTracer::init().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}

/// Writes the failure, if any, and hands back the success value.
fn report<W: Write, R>(
    out: &mut W,
    result: Result<R, SequenceError<i32>>,
) -> io::Result<Option<R>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) => {
            debug!(%error, "statement failed");
            writeln!(out, "{}", error)?;
            Ok(None)
        }
    }
}

/// Runs the scripted session against `seq`, writing everything it sees to
/// `out`. A failing search or removal skips the statements after it in the
/// same group.
fn session<W: Write>(out: &mut W, name: &str, seq: &mut dyn Sequence<i32>) -> io::Result<()> {
    info!(storage = name, "starting session");
    writeln!(out, "/////// {} ///////", name)?;

    for i in 1..10 {
        seq.append(i);
        seq.prepend(-i);
    }
    if let Some(first) = report(out, seq.get_mut(0))? {
        *first = 77;
    }
    writeln!(out, "{}", seq)?;

    if let Some(position) = report(out, seq.position_of(2))? {
        writeln!(out, "{}", position)?;
        if let Some(position) = report(out, seq.position_of(12))? {
            writeln!(out, "{}", position)?;
        }
    }

    if let Some(value) = report(out, seq.get(128))? {
        writeln!(out, "{}", value)?;
    }

    if let Some(value) = report(out, seq.last())? {
        writeln!(out, "{}", value)?;
    }

    for value in [5, 13, 7] {
        if report(out, seq.remove(value))?.is_none() {
            break;
        }
    }

    writeln!(out, "{}", seq)
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging();
    debug!(?args, "parsed arguments");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if matches!(args.storage, Storage::Linked | Storage::Both) {
        session(&mut out, "LinkedSequence", &mut LinkedSequence::<i32>::new())?;
    }
    if matches!(args.storage, Storage::Array | Storage::Both) {
        session(
            &mut out,
            "ArraySequence",
            &mut ArraySequence::<i32>::with_growth_unit(args.growth_unit),
        )?;
    }
    Ok(())
}
