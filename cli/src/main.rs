mod commands;
mod terminal;

use commands::{CommandLine, Commands, scan, services};
use portdrift_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        disable_input: commands.no_input,
    };

    print::banner(&cfg);

    match commands.command {
        Commands::Scan(args) => {
            print::section("starting scanner", cfg.quiet);
            scan::scan(args, &cfg).await
        }
        Commands::Services => {
            print::section("well-known services", cfg.quiet);
            services::services(&cfg);
            Ok(())
        }
    }
}
