use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "blindclock-cli", version, about = "Poker blind timer appliance, in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the appliance interactively (arrow keys turn, Enter pushes)
    Run(commands::run::RunArgs),
    /// Headless accelerated session, printing the event log as JSON
    Simulate(commands::simulate::SimulateArgs),
    /// Preview the blind levels a game will walk through
    Schedule(commands::schedule::ScheduleArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Simulate(args) => commands::simulate::run(args),
        Commands::Schedule(args) => commands::schedule::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
