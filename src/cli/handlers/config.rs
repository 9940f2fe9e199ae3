use crate::cli::{args::ConfigAction, config::user_config_path};
use g8cu::Settings;

pub fn handle(action: ConfigAction, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            print!("{}", settings.to_toml()?);
        }
        ConfigAction::Path => match user_config_path() {
            Some(path) => println!("{}", path.display()),
            None => return Err("no configuration directory on this platform".into()),
        },
    }
    Ok(())
}
