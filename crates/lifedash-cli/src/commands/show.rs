use clap::Args;
use lifedash_core::Profile;

use super::common::InputArgs;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let profile = Profile::load_or_default();
    let request = args.input.to_request(&profile)?;
    let result = request.compute()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let unit = result.display_unit;
    println!("You are {:.1} years old.", result.age_years);
    println!("Estimated lifespan: {:.0} years", result.expected_age_years);
    println!();
    println!(
        "Estimated remaining life: {:.1} {}",
        result.remaining_in_unit, unit
    );
    println!();

    println!("Summary in {unit}:");
    println!(
        "{:<20} {:>14} {:>14} {:>9} {:>9}",
        "Activity",
        format!("Spent ({unit})"),
        format!("Left ({unit})"),
        "% Spent",
        "% Left"
    );
    for row in &result.summary {
        println!(
            "{:<20} {:>14.1} {:>14.1} {:>9.1} {:>9.1}",
            row.activity, row.spent, row.remaining, row.pct_spent, row.pct_remaining
        );
    }
    println!();

    println!("Free time per day: {:.1} hrs", result.free_hours_per_day);
    println!("Free days remaining: {:.0}", result.free_days_remaining());
    if result.is_over_committed {
        println!(
            "warning: daily activities sum to {:.1} hours, exceeding 24",
            result.total_committed_hours
        );
    } else if result.free_hours_per_day == 0.0 {
        println!("No dedicated free time per day. Consider reducing commitments.");
    }

    Ok(())
}
