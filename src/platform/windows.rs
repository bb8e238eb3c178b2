// Passvault platform paths for Windows
// Config and data both live under %APPDATA%\Passvault

use std::env;
use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Passvault")
}

pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
