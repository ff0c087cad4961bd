use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tk",
    about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a to-do list that lives in your terminal"),
    version
)]
struct Cli {
    /// Read UI configuration from this file instead of
    /// ~/.config/tick/config.toml
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tick::tui::run(cli.config.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
