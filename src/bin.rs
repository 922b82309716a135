extern crate rslog;

use std::{path::Path, process::exit};

use clap::{Args, Parser, Subcommand};
use rslog::log::{Detail, Entry, Level, LoggerExt};

#[derive(Debug, Parser)]
#[command(about = rslog::build_info::PKG_DESCRIPTION, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    #[clap(help = "config path (default: config.yaml if present)", short, long)]
    config: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(about = "show version")]
    Version,
    #[clap(about = "list log levels, least severe first")]
    Levels,
    #[clap(about = "write one log entry")]
    Emit(EmitArgs),
}

#[derive(Debug, Args)]
struct EmitArgs {
    #[clap(help = "log level", short, long, default_value = "message")]
    level: Level,
    #[clap(help = "scope label", short, long)]
    scope: Option<String>,
    #[clap(help = "detail as label=value, repeatable", short, long = "detail")]
    details: Vec<String>,
    #[clap(help = "error text", short, long)]
    error: Option<String>,
    #[clap(help = "message text")]
    message: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Version => {
            println!(
                "rslog v{}-{}",
                rslog::build_info::PKG_VERSION,
                rslog::build_info::SHORT_COMMIT
            );
        }
        Commands::Levels => {
            for level in Level::ALL {
                println!("{}", level);
            }
        }
        Commands::Emit(args) => {
            let config = cli.args.config.as_deref().map(Path::new);
            if let Err(e) = rslog::Options::load(config).and_then(|o| emit(o, args)) {
                eprintln!("{}", e);
                exit(1);
            }
        }
    }
}

fn emit(options: rslog::Options, args: EmitArgs) -> anyhow::Result<()> {
    let logger = rslog::log::new_logger(&options.log)?;
    let details = args
        .details
        .iter()
        .map(|s| rslog::option::parse_detail(s))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let error = args.error.map(anyhow::Error::msg);

    let mut entry = Entry::new();
    if let Some(scope) = &args.scope {
        entry = entry.with_scope(scope);
    }
    if let Some(message) = &args.message {
        entry = entry.with_message(message);
    }
    if let Some(err) = &error {
        entry = entry.with_error(&**err);
    }
    entry = entry.with_details(details.iter().map(|(label, value)| Detail::new(label, value)));

    logger.log(args.level, entry);
    Ok(())
}
