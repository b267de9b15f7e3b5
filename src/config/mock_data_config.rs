//! Mock data configuration parsing from environment variables.
//!
//! `MOCK_DATA_SEED` makes the generated payloads reproducible across runs,
//! which front-end snapshot tests rely on. Unset means fresh entropy per
//! request.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, Default)]
pub struct MockDataEnvConfig {
    pub seed: Option<u64>,
}

impl MockDataEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup("MOCK_DATA_SEED")
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("Failed to parse MOCK_DATA_SEED: {}", raw))
            })
            .transpose()?;

        Ok(Self { seed })
    }
}
