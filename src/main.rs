// SPDX-License-Identifier: MPL-2.0
use img_zoom::app::{self, Flags};
use img_zoom::config::{self, paths, ZoomOverrides};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
img_zoom - view an image with wheel zoom, drag-to-pan and rotation

USAGE:
  img_zoom [OPTIONS] <IMAGE>

OPTIONS:
  --step N          Fractional zoom increment per step (default 0.2)
  --min N           Minimum zoom factor (default 0.125)
  --max N           Maximum zoom factor (default 1024)
  --initial N       Zoom factor applied on reset (default 1)
  --alt TEXT        Alternate text shown when the image is unavailable
  --config-dir DIR  Directory holding settings.toml
  -h, --help        Print this help
";

#[derive(Debug)]
struct Args {
    overrides: ZoomOverrides,
    alt: Option<String>,
    config_dir: Option<String>,
    file_path: Option<PathBuf>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = ZoomOverrides {
        step: args.opt_value_from_str("--step")?,
        min: args.opt_value_from_str("--min")?,
        max: args.opt_value_from_str("--max")?,
        initial: args.opt_value_from_str("--initial")?,
    };
    let alt = args.opt_value_from_str("--alt")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let file_path = args.opt_free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Args {
        overrides,
        alt,
        config_dir,
        file_path,
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("img_zoom=info")),
        )
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(args.config_dir);
    let (config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    app::run(Flags {
        file_path: args.file_path,
        alt: args.alt,
        settings: app::resolve_settings(config, args.overrides),
    })
}
