//! The six tracked leaderboard metrics.
//!
//! Each metric maps to one `BIGINT` counter column on the `players` table
//! and one well-known Redis cache key holding the serialized ranked view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A ranked leaderboard metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Secrets,
    Eggs,
    Bubbles,
    Power,
    Robux,
    Playtime,
}

impl Metric {
    /// Every tracked metric, in refresh order.
    pub const ALL: [Metric; 6] = [
        Metric::Secrets,
        Metric::Eggs,
        Metric::Bubbles,
        Metric::Power,
        Metric::Robux,
        Metric::Playtime,
    ];

    /// The `players` column holding this metric's counter.
    pub const fn column(self) -> &'static str {
        match self {
            Metric::Secrets => "secrets",
            Metric::Eggs => "eggs",
            Metric::Bubbles => "bubbles",
            Metric::Power => "power",
            Metric::Robux => "robux",
            Metric::Playtime => "playtime",
        }
    }

    /// The Redis key under which this metric's ranked view is cached.
    pub const fn cache_key(self) -> &'static str {
        match self {
            Metric::Secrets => "secrets-lb",
            Metric::Eggs => "eggs-lb",
            Metric::Bubbles => "bubbles-lb",
            Metric::Power => "power-lb",
            Metric::Robux => "robux-lb",
            Metric::Playtime => "playtime-lb",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Metric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secrets" => Ok(Metric::Secrets),
            "eggs" => Ok(Metric::Eggs),
            "bubbles" => Ok(Metric::Bubbles),
            "power" => Ok(Metric::Power),
            "robux" => Ok(Metric::Robux),
            "playtime" => Ok(Metric::Playtime),
            other => Err(CoreError::Validation(format!(
                "Invalid leaderboard metric: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_metric_name() {
        for metric in Metric::ALL {
            let parsed: Metric = metric.column().parse().unwrap();
            assert_eq!(parsed, metric);
        }
    }

    #[test]
    fn rejects_unknown_metric() {
        assert!("candies".parse::<Metric>().is_err());
    }

    #[test]
    fn cache_keys_are_distinct() {
        let mut keys: Vec<_> = Metric::ALL.iter().map(|m| m.cache_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Metric::ALL.len());
    }
}
