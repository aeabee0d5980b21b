// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, paths, Flags};
use std::process::ExitCode;
use tracing::Level;

const HELP: &str = "\
iced-toast-demo

USAGE:
  iced-toast-demo [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
  --log-level <LEVEL>  trace, debug, info, warn or error [default: info]
  --duration <MS>      Auto-dismiss delay in milliseconds, 0 keeps toasts open
  -h, --help           Print this help
";

struct Args {
    config_dir: Option<String>,
    log_level: Level,
    duration_ms: Option<u64>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        config_dir: args.opt_value_from_str("--config-dir")?,
        log_level: args.opt_value_from_str("--log-level")?.unwrap_or(Level::INFO),
        duration_ms: args.opt_value_from_str("--duration")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: unused arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    paths::init_cli_overrides(args.config_dir);

    let flags = Flags {
        duration_ms: args.duration_ms,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
