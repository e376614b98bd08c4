use blindclock_core::schedule::preview;
use clap::Args;

#[derive(Args)]
pub struct ScheduleArgs {
    /// Starting small blind
    #[arg(long, default_value_t = 25)]
    small_blind: u32,
    /// Number of levels to show
    #[arg(long, default_value_t = 10)]
    levels: u32,
    /// Print as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let levels = preview(args.small_blind, args.levels);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&levels)?);
        return Ok(());
    }

    println!("{:>5}  {:>11}  {:>9}", "round", "small blind", "big blind");
    for level in levels {
        println!(
            "{:>5}  {:>11}  {:>9}",
            level.round, level.small_blind, level.big_blind
        );
    }
    Ok(())
}
