use crate::{
    indicators::{DEFAULT_LENGTH_MA, DEFAULT_LENGTH_SIGNAL},
    Error,
};
use std::{env, path::PathBuf, str::FromStr};

pub const LENGTH_MA_KEY: &str = "IMPULSE_LENGTH_MA";
pub const LENGTH_SIGNAL_KEY: &str = "IMPULSE_LENGTH_SIGNAL";
pub const BARS_KEY: &str = "IMPULSE_BARS";
pub const DEFAULT_BARS: &str = "bars.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub length_ma: usize,
    pub length_signal: usize,
    pub bars: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length_ma: DEFAULT_LENGTH_MA,
            length_signal: DEFAULT_LENGTH_SIGNAL,
            bars: PathBuf::from(DEFAULT_BARS),
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Missing keys fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            length_ma: parse(&lookup, LENGTH_MA_KEY)?.unwrap_or(defaults.length_ma),
            length_signal: parse(&lookup, LENGTH_SIGNAL_KEY)?.unwrap_or(defaults.length_signal),
            bars: lookup(BARS_KEY).map(PathBuf::from).unwrap_or(defaults.bars),
        })
    }
}

fn parse<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, Error>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    lookup(key)
        .map(|value| {
            value.trim().parse().map_err(|err: T::Err| Error::Config {
                key,
                reason: format!("{:?}: {}", value, err.to_string()),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> = pairs
            .iter()
            .map(|&(key, value)| (key, value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.length_ma, 34);
        assert_eq!(config.length_signal, 9);
        assert_eq!(config.bars, PathBuf::from("bars.csv"));
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            (LENGTH_MA_KEY, "21"),
            (LENGTH_SIGNAL_KEY, " 5 "),
            (BARS_KEY, "data/btc.bin"),
        ]))
        .unwrap();
        assert_eq!(config.length_ma, 21);
        assert_eq!(config.length_signal, 5);
        assert_eq!(config.bars, PathBuf::from("data/btc.bin"));
    }

    #[test]
    fn malformed() {
        match Config::from_lookup(lookup(&[(LENGTH_MA_KEY, "-3")])) {
            Err(Error::Config { key, .. }) => assert_eq!(key, LENGTH_MA_KEY),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
