use crate::error::Result;
use crate::settings::{save_settings, settings_file_exists, settings_path, Settings};

pub fn run(force: bool) -> Result<()> {
    let path = settings_path();
    if settings_file_exists() && !force {
        println!("Settings already exist at {} (use --force to overwrite).", path.display());
        return Ok(());
    }
    let settings = Settings::default();
    save_settings(&settings)?;
    std::fs::create_dir_all(&settings.data_dir)?;

    println!("Wrote settings to {}", path.display());
    println!("Data directory: {}", settings.data_dir);
    println!("Set sink.url there and export {} to enable uploads.", settings.sink.key_env);
    Ok(())
}
