mod result;

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use chuffed_bridge::driver::write_result;
use chuffed_bridge::driver::ChuffedSolver;
use chuffed_bridge::driver::InProcessDriver;
use chuffed_bridge::TaggedResult;
use clap::Parser;
use log::debug;
use log::error;
use log::info;
use log::LevelFilter;
use result::DriverError;
use result::DriverResult;

/// Reads a FlatZinc model from stdin and solves it with the Chuffed library linked into this
/// binary.
///
/// On success, `ok` and the solver output are written to stdout and the exit code is 0. Otherwise
/// `error` and a one-line reason are written to stderr and the exit code is 1.
#[derive(Debug, Parser)]
#[command(
    author,
    about,
    ignore_errors = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Enables log messages on stderr, prefixed with `% `.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Any other arguments are accepted and ignored; the solver options are fixed. This includes
    /// `--help` and `--version`, which would otherwise exit before a result block is written.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<OsString>,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");

    // Panics are reported as "Unknown exception"; the default hook would print the panic
    // message in front of the result block.
    std::panic::set_hook(Box::new(|panic_info| debug!("{panic_info}")));
}

fn main() -> ExitCode {
    match run() {
        Ok(result) if result.is_ok() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("Execution failed, error: {e}");

            if !matches!(e, DriverError::IOError(_)) {
                let _ = write_result(
                    &TaggedResult::error(e.to_string()),
                    std::io::sink(),
                    std::io::stderr().lock(),
                );
            }

            ExitCode::FAILURE
        }
    }
}

fn run() -> DriverResult<TaggedResult> {
    let args = Args::parse();
    configure_logging(args.verbose);

    if !args.ignored.is_empty() {
        debug!("ignoring arguments {:?}", args.ignored);
    }

    let solver = ChuffedSolver::acquire().ok_or(DriverError::SolverUnavailable)?;
    let mut driver = InProcessDriver::new(solver);

    let result = driver.run(
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        std::io::stderr().lock(),
    )?;

    Ok(result)
}
