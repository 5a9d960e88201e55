// SPDX-License-Identifier: MPL-2.0
use iced_message_bar::app::{self, Flags};
use iced_message_bar::config::Position;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
message-bar-demo

USAGE:
  message-bar-demo [OPTIONS]

OPTIONS:
  --position <top|bottom>   Edge the bar is anchored to
  --duration-ms <MS>        Auto-hide delay in milliseconds
  --confirm-copy            Show \"Copied!\" after copying an error
  --config-dir <DIR>        Directory containing message_bar.toml
  -h, --help                Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        position: args.opt_value_from_fn("--position", str::parse::<Position>)?,
        duration_ms: args.opt_value_from_str("--duration-ms")?,
        confirm_copy: args.contains("--confirm-copy"),
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
