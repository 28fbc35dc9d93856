// SPDX-License-Identifier: MPL-2.0
use split_lens::app::{self, Flags};
use split_lens::{config, logging};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: split_lens [--lang LANG] [--config-dir DIR] LEFT [RIGHT]

LEFT and RIGHT are image files or directories of image frames.

Options:
  --lang LANG        UI language (e.g. en-US, fr)
  --config-dir DIR   Directory holding settings.toml
  -h, --help         Print this help";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    inputs: Vec<PathBuf>,
}

/// Returns `Ok(None)` when help was requested. `LEFT` is required.
fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Args>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let inputs: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();
    if inputs.is_empty() {
        return Err(pico_args::Error::MissingArgument);
    }

    Ok(Some(Args {
        lang,
        config_dir,
        inputs,
    }))
}

fn main() -> ExitCode {
    logging::setup_logger();

    let args = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if args.inputs.len() > 2 {
        log::warn!("only the first two of {} inputs are selected", args.inputs.len());
    }

    config::init_cli_override(args.config_dir);
    let (playlist, load_failures) = app::load_inputs(&args.inputs);

    let flags = Flags {
        lang: args.lang,
        playlist,
        load_failures,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}
