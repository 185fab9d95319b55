#![allow(clippy::expect_used)]
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, str::FromStr};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub debug: bool,
    pub address: SocketAddr,
    pub upstream_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            address: SocketAddr::from_str("0.0.0.0:33020")
                .expect("Default value for config should never panic!"),
            upstream_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}
