// SPDX-License-Identifier: MPL-2.0
use panotour::api::ApiClient;
use panotour::app::{self, paths, Flags, Startup};
use panotour::config;
use panotour::diagnostics::LOG_PREFIX;
use std::process::ExitCode;
use std::sync::Arc;

const HELP: &str = "\
Usage: panotour [OPTIONS] [ROUTE]

Arguments:
  [ROUTE]                 Path to open, e.g. /events or /lieu/architecture/42

Options:
  --lang <code>           Interface language (fr, ar, wo, en)
  --api-base <url>        Backend base URL
  --config-dir <dir>      Directory holding settings.toml
  --i18n-dir <dir>        Directory of additional .ftl translations
  -h, --help              Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_base: args.opt_value_from_str("--api-base")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        initial_route: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    })
}

fn main() -> ExitCode {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("{LOG_PREFIX} {error}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    let api_base = config::resolve_api_base_url(flags.api_base.clone(), &config);

    let client = match ApiClient::new(api_base, config.api.timeout()) {
        Ok(client) => client,
        Err(error) => {
            eprintln!("{LOG_PREFIX} {error}");
            return ExitCode::FAILURE;
        }
    };

    let startup = Startup {
        flags,
        config,
        config_warning,
        provider: Arc::new(client),
    };

    match app::run(startup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{LOG_PREFIX} {error}");
            ExitCode::FAILURE
        }
    }
}
