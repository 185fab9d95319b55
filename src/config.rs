use color_eyre::Result;
use config::{Config, Environment};
use tap::Tap;
use tracing::debug;

#[tracing::instrument]
pub fn new_config() -> Result<spoofpanel_cfg::Config> {
    let s = Config::builder()
        .add_source(Environment::with_prefix("spoofpanel"))
        .build()?;

    let base: spoofpanel_cfg::Config = s.try_deserialize()?;
    Ok(base.tap_dbg(|base| debug!(?base)))
}
