mod commands;
mod resolve;
mod terminal;

use commands::{CommandLine, Commands, format, interfaces, wake};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    match commands.command {
        Commands::Wake(args) => wake::wake(args).await,
        Commands::Interfaces { discovery } => interfaces::interfaces(&discovery),
        Commands::Format { address, spec } => {
            format::format(&address, spec);
            Ok(())
        }
    }
}
