mod cmd;

use std::process::exit;

use crate::cmd::CliCommand;

use clap::Parser;
use log::error;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
  /// Keyboard settings as a JSON object, e.g. '{"baseNote": 60, "mode": "Play"}'.
  /// Fields that are left out get their defaults.
  #[clap(long, global = true, value_parser)]
  settings: Option<String>,

  #[clap(subcommand)]
  command: CliCommand,
}

fn main() {
  let default_log_level = "warn";
  let env = env_logger::Env::default().filter_or("RUST_LOG", default_log_level);
  env_logger::init_from_env(env);

  let cli = Cli::parse();
  if let Err(err) = cli.command.run(cli.settings.as_deref()) {
    error!("{err:?}");
    eprintln!("error: {}", err.current_context());
    exit(1);
  }
}
