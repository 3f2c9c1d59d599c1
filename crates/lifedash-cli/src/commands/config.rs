use clap::Subcommand;
use lifedash_core::Profile;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the whole profile
    Show,
    /// Print the profile file path
    Path,
    /// Get a value by dot-separated key
    Get { key: String },
    /// Set a value by dot-separated key
    Set { key: String, value: String },
    /// Add or update a custom category
    AddCategory { name: String, hours: f64 },
    /// Remove a custom category
    RemoveCategory { name: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let profile = Profile::load()?;
            print!("{}", toml::to_string_pretty(&profile)?);
        }
        ConfigAction::Path => {
            println!("{}", Profile::path()?.display());
        }
        ConfigAction::Get { key } => {
            let profile = Profile::load()?;
            match profile.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown profile key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut profile = Profile::load()?;
            profile.set(&key, &value)?;
        }
        ConfigAction::AddCategory { name, hours } => {
            let mut profile = Profile::load()?;
            profile.add_category(&name, hours)?;
        }
        ConfigAction::RemoveCategory { name } => {
            let mut profile = Profile::load()?;
            if !profile.remove_category(&name)? {
                return Err(format!("no custom category named '{name}'").into());
            }
        }
    }
    Ok(())
}
