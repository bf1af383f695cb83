use std::time::Duration;

use desa::DEFAULT_LATENCY;
use dioxus::prelude::warn;

#[derive(Clone)]
pub struct Config {
    pub login_delay: Duration,
    pub toast_duration: Duration,
}

const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

impl Config {
    pub fn from_env() -> Self {
        Self {
            login_delay: millis_from_env("DESA_LOGIN_DELAY_MS", DEFAULT_LATENCY),
            toast_duration: millis_from_env(
                "DESA_TOAST_DURATION_MS",
                Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            ),
        }
    }
}

fn millis_from_env(name: &str, default: Duration) -> Duration {
    parse_millis(std::env::var(name).ok().as_deref()).unwrap_or_else(|invalid| {
        if let Some(raw) = invalid {
            warn!("{} has invalid value '{}', using {:?}", name, raw, default);
        }
        default
    })
}

/// `Err(None)` when unset, `Err(Some(raw))` when not a number of milliseconds.
fn parse_millis(raw: Option<&str>) -> Result<Duration, Option<String>> {
    let raw = raw.ok_or(None)?;
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| Some(raw.to_string()))
}
