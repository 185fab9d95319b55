use camino::Utf8Path;
use spoofpanel_cfg::Config;
use std::{error::Error, fs};

fn main() -> Result<(), Box<dyn Error>> {
    let cfg = Config::default();

    let toml_path = Utf8Path::new("demos/config.toml");
    let toml = toml::to_string(&cfg)?;
    fs::create_dir_all("demos")?;
    fs::write(toml_path, toml)?;

    Ok(())
}
