//! `knotperiod`: checks a knot for periodicity from recorded invariants.
//!
//! **Usage:**
//! ```text
//! knotperiod --pages FILE [--jones POLY] [--knot NAME] [--period P|all]
//!            [--field Z2|Z3|Z5|Z7|Z11|Q] [--criterion przytycki|khovanov]
//!            [--components N] [-v]...
//! ```
//!
//! A page file holds the Poincaré polynomials of the Khovanov to Lee
//! spectral sequence, one per line, starting with the Khovanov polynomial.
//! `#` starts a comment. With `--jones`, both criteria test that polynomial,
//! and the Khovanov criterion uses it as its Przytycki pre-filter.
//!
//! One verdict line per period goes to stdout; logs go
//! to stderr and follow `RUST_LOG` when it is set.

#![deny(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use knotperiod::prelude::*;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Check a knot for periodicity.
#[derive(Parser, Debug)]
#[command(name = "knotperiod", version, about = "Periodicity criteria for knots")]
struct Args {
    /// Page file of the Khovanov to Lee spectral sequence.
    #[arg(long, value_name = "FILE", required_unless_present = "jones")]
    pages: Option<PathBuf>,

    /// Unreduced Jones polynomial in `q`, also used by the Khovanov
    /// criterion's Przytycki step; defaults to the Khovanov polynomial at
    /// `t = -1`.
    #[arg(long, value_name = "POLY", allow_hyphen_values = true)]
    jones: Option<String>,

    /// Name printed in every verdict line.
    #[arg(long, default_value = "knot")]
    knot: String,

    /// A supported prime, or `all`.
    #[arg(long, default_value = "5", value_parser = parse_period)]
    period: PeriodSelection,

    /// Coefficient field of Khovanov homology.
    #[arg(long, default_value = "Z2", value_parser = parse_field)]
    field: CoefficientField,

    /// Criterion to apply.
    #[arg(long, value_enum, default_value_t = CriterionArg::Khovanov)]
    criterion: CriterionArg,

    /// Number of components of the diagram.
    #[arg(long, default_value_t = 1)]
    components: usize,

    /// Raise the log level (`-v` info, `-vv` debug, `-vvv` trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CriterionArg {
    Przytycki,
    Khovanov,
}

impl From<CriterionArg> for Criterion {
    fn from(arg: CriterionArg) -> Self {
        match arg {
            CriterionArg::Przytycki => Criterion::Przytycki,
            CriterionArg::Khovanov => Criterion::Khovanov,
        }
    }
}

fn parse_period(s: &str) -> Result<PeriodSelection, String> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(PeriodSelection::AllSupported);
    }
    s.parse()
        .map(PeriodSelection::Single)
        .map_err(|e| format!("expected a prime or `all`: {e}"))
}

fn parse_field(s: &str) -> Result<CoefficientField, String> {
    s.parse().map_err(|e: PeriodicityError| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_engine(args: &Args) -> Result<RecordedSpectralSequence> {
    let jones = args
        .jones
        .as_deref()
        .map(|s| {
            s.parse::<LaurentPoly<Z>>()
                .with_context(|| format!("invalid Jones polynomial `{s}`"))
        })
        .transpose()?;

    let engine = match (&args.pages, jones) {
        (Some(path), jones) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let engine: RecordedSpectralSequence = text
                .parse()
                .with_context(|| format!("invalid page file {}", path.display()))?;
            debug!(path = %path.display(), pages = engine.pages().len(), "loaded page file");
            match jones {
                Some(j) => engine.with_jones(j),
                None => engine,
            }
        }
        (None, Some(j)) => {
            if args.criterion == CriterionArg::Khovanov {
                bail!("the Khovanov criterion needs --pages");
            }
            RecordedSpectralSequence::new(vec![j.clone()])?.with_jones(j)
        }
        (None, None) => bail!("either --pages or --jones is required"),
    };
    Ok(engine.with_components(args.components))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let engine = load_engine(&args)?;
    let request = PeriodicityRequest {
        knot: args.knot.clone(),
        period: args.period,
        field: args.field,
        criterion: args.criterion.into(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    check_periodicity(&engine, &request, &mut out)
        .with_context(|| format!("periodicity check of {} failed", request.knot))?;
    out.flush()?;
    Ok(())
}
