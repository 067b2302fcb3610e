// SPDX-License-Identifier: MPL-2.0
use feline_fascination::app::{self, paths, Flags};
use feline_fascination::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Feline Fascination

USAGE:
  feline_fascination [OPTIONS]

OPTIONS:
  --theme <light|dark|system>  Override the configured theme
  --config-dir <PATH>          Directory holding settings.toml
  --seed <N>                   Seed for the chart and confetti
  -h, --help                   Print this help

ENVIRONMENT:
  FELINE_CONFIG_DIR            Same as --config-dir
  RUST_LOG                     Log filter (default: info)
";

fn parse_theme(raw: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(raw).ok_or_else(|| format!("unknown theme '{raw}'"))
}

fn parse_args() -> Result<(Flags, Option<String>), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        theme: args.opt_value_from_fn("--theme", parse_theme)?,
        seed: args.opt_value_from_str("--seed")?,
    };
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok((flags, config_dir))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (flags, config_dir) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };
    paths::init_cli_override(config_dir);

    app::run(flags)
}
