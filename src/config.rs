//! Start-up configuration for the viewer.
//!
//! Resolved once from the command line and the environment:
//!
//! | Source                | Meaning                              | Default  |
//! |-----------------------|--------------------------------------|----------|
//! | first argument        | feed URL                             | —        |
//! | `FEED_URL`            | feed URL when no argument is given   | —        |
//! | `FEED_TIMEOUT_SECS`   | per-request timeout in seconds       | `10`     |
//! | `FEED_LOG`            | file to write `tracing` output to    | disabled |
//!
//! `RUST_LOG` filters the log output as usual.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: Url,
    pub timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let args = utf8_args(std::env::args_os().skip(1))?;
        Self::from_sources(args.into_iter(), |key| std::env::var(key).ok())
    }

    /// Build configuration from explicit sources so tests need not touch the
    /// real process environment.
    pub fn from_sources(
        mut args: impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let raw_url = match args.next().or_else(|| env("FEED_URL")) {
            Some(url) => url,
            None => bail!("usage: essential-feed <URL> (or set FEED_URL)"),
        };
        let url = Url::parse(&raw_url).with_context(|| format!("invalid feed URL: {raw_url}"))?;

        let timeout = match env("FEED_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse()
                    .with_context(|| format!("FEED_TIMEOUT_SECS is not a number: {secs}"))?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        let log_file = env("FEED_LOG").filter(|p| !p.is_empty()).map(PathBuf::from);

        Ok(Self {
            url,
            timeout,
            log_file,
        })
    }
}

/// Convert raw arguments, rejecting any that are not valid UTF-8.
fn utf8_args(args: impl Iterator<Item = OsString>) -> Result<Vec<String>> {
    args.map(|arg| {
        arg.into_string()
            .map_err(|raw| anyhow!("argument is not valid UTF-8: {}", raw.to_string_lossy()))
    })
    .collect()
}
