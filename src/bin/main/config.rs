use std::{env, path::PathBuf};

use env_logger::Env;
use log::warn;
use read_chunker_core::speed::ReadingSpeed;

const LOG_ENV: &str = "READ_CHUNKER_LOG";
const STORE_DIR_ENV: &str = "READ_CHUNKER_STORE_DIR";
const WPM_ENV: &str = "READ_CHUNKER_WPM";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_STORE_DIR: &str = "saved-texts";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct RunConfig {
    pub(super) store_dir: PathBuf,
    pub(super) speed: ReadingSpeed,
    pub(super) startup_file: Option<PathBuf>,
}

impl RunConfig {
    pub(super) fn from_env() -> Self {
        Self::from_parts(
            env::var(STORE_DIR_ENV).ok(),
            env::var(WPM_ENV).ok(),
            env::args_os().nth(1).map(PathBuf::from),
        )
    }

    fn from_parts(
        store_dir: Option<String>,
        wpm: Option<String>,
        startup_file: Option<PathBuf>,
    ) -> Self {
        Self {
            store_dir: PathBuf::from(store_dir.unwrap_or_else(|| DEFAULT_STORE_DIR.into())),
            speed: wpm.map_or_else(ReadingSpeed::default, |raw| parse_speed(&raw)),
            startup_file,
        }
    }
}

fn parse_speed(raw: &str) -> ReadingSpeed {
    let parsed = raw
        .trim()
        .parse::<u16>()
        .map_err(|_| ())
        .and_then(|wpm| ReadingSpeed::try_from(wpm).map_err(|_| ()));

    parsed.unwrap_or_else(|()| {
        let fallback = ReadingSpeed::default();
        warn!(
            "config: {}={:?} is not an offered speed; using {}",
            WPM_ENV, raw, fallback
        );
        fallback
    })
}

pub(super) fn init_logging() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_LOG_FILTER))
        .format_timestamp_millis()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let config = RunConfig::from_parts(None, None, None);
        assert_eq!(config.store_dir, PathBuf::from(DEFAULT_STORE_DIR));
        assert_eq!(config.speed, ReadingSpeed::Wpm200);
        assert_eq!(config.startup_file, None);
    }

    #[test]
    fn offered_speed_is_accepted() {
        let config = RunConfig::from_parts(Some("/tmp/texts".into()), Some(" 600 ".into()), None);
        assert_eq!(config.store_dir, PathBuf::from("/tmp/texts"));
        assert_eq!(config.speed, ReadingSpeed::Wpm600);
    }

    #[test]
    fn unsupported_speed_falls_back_to_default() {
        assert_eq!(parse_speed("450"), ReadingSpeed::Wpm200);
        assert_eq!(parse_speed("fast"), ReadingSpeed::Wpm200);
    }
}
