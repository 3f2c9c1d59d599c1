use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lifedash", version, about = "Lifedash CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and display the dashboard
    Show(commands::show::ShowArgs),
    /// Export computed data as CSV or JSON
    Export(commands::export::ExportArgs),
    /// Profile configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
