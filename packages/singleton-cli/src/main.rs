mod driver;

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use driver::DriverConfig;

#[derive(Parser)]
#[command(name = "singleton")]
#[command(about = "Requests the singleton holder twice and shows both handles are the same")]
struct Cli {
    /// Value passed to the first accessor call
    #[arg(long, default_value = "Version-1")]
    first: String,

    /// Value passed to the second accessor call
    #[arg(long, default_value = "Version-2")]
    second: String,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs a stderr subscriber when `-v` is given. A bare run installs
/// nothing, so the process never consults the environment.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // Only fails if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = DriverConfig {
        first: cli.first,
        second: cli.second,
    };
    let stdout = std::io::stdout();
    match driver::run(&config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
