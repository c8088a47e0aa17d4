use clap::Parser;
use dataspace::args::Args;
use dataspace::commands::{run, CliError};
use dataspace::console::{Console, TerminalPrompt};

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();
    let console = Console::new(TerminalPrompt, std::io::stdout());
    match run(&args, &console) {
        Ok(()) => {}
        // Already reported through a notification.
        Err(CliError::Failed(_)) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
