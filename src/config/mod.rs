use std::str::FromStr;
use std::time::Duration;

/// Longest session lifetime a cookie expiry can carry.
pub const MAX_SESSION_TTL_HOURS: u64 = (i64::MAX / 3600) as u64;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings, read from `COOKIT_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub submit_delay: Duration,
    pub session_ttl: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: num_cpus::get() * 2,
            submit_delay: Duration::from_millis(1000),
            session_ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(None),
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Ok(host) = std::env::var("COOKIT_HOST") {
            settings.host = host;
        }
        if let Some(port) = parse_var("COOKIT_PORT")? {
            settings.port = port;
        }
        if let Some(workers) = parse_var::<usize>("COOKIT_WORKERS")? {
            if workers == 0 {
                return Err(ConfigError::Invalid {
                    key: "COOKIT_WORKERS",
                    value: "0".to_string(),
                });
            }
            settings.workers = workers;
        }
        if let Some(ms) = parse_var("COOKIT_SUBMIT_DELAY_MS")? {
            settings.submit_delay = Duration::from_millis(ms);
        }
        if let Some(hours) = parse_var::<u64>("COOKIT_SESSION_TTL_HOURS")? {
            let secs = hours
                .checked_mul(60 * 60)
                .filter(|_| hours <= MAX_SESSION_TTL_HOURS)
                .ok_or_else(|| ConfigError::Invalid {
                    key: "COOKIT_SESSION_TTL_HOURS",
                    value: hours.to_string(),
                })?;
            settings.session_ttl = Duration::from_secs(secs);
        }

        Ok(settings)
    }

    pub fn session_ttl_hours(&self) -> i64 {
        i64::try_from(self.session_ttl.as_secs() / 3600).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 5] = [
        "COOKIT_HOST",
        "COOKIT_PORT",
        "COOKIT_WORKERS",
        "COOKIT_SUBMIT_DELAY_MS",
        "COOKIT_SESSION_TTL_HOURS",
    ];

    #[test]
    fn defaults_without_environment() {
        temp_env::with_vars_unset(VARS, || {
            let settings = Settings::from_env().unwrap();
            assert_eq!(settings, Settings::default());
            assert_eq!(settings.port, 8080);
            assert_eq!(settings.submit_delay, Duration::from_millis(1000));
            assert_eq!(settings.session_ttl_hours(), 24);
        });
    }

    #[test]
    fn reads_every_variable() {
        temp_env::with_vars(
            [
                ("COOKIT_HOST", Some("0.0.0.0")),
                ("COOKIT_PORT", Some("3000")),
                ("COOKIT_WORKERS", Some("3")),
                ("COOKIT_SUBMIT_DELAY_MS", Some(" 250 ")),
                ("COOKIT_SESSION_TTL_HOURS", Some("2")),
            ],
            || {
                let settings = Settings::from_env().unwrap();
                assert_eq!(settings.host, "0.0.0.0");
                assert_eq!(settings.port, 3000);
                assert_eq!(settings.workers, 3);
                assert_eq!(settings.submit_delay, Duration::from_millis(250));
                assert_eq!(settings.session_ttl_hours(), 2);
            },
        );
    }

    #[test]
    fn rejects_unparseable_values() {
        temp_env::with_vars(
            [
                ("COOKIT_HOST", None),
                ("COOKIT_PORT", Some("eighty")),
                ("COOKIT_WORKERS", None),
                ("COOKIT_SUBMIT_DELAY_MS", None),
                ("COOKIT_SESSION_TTL_HOURS", None),
            ],
            || {
                assert_eq!(
                    Settings::from_env(),
                    Err(ConfigError::Invalid {
                        key: "COOKIT_PORT",
                        value: "eighty".to_string(),
                    })
                );
            },
        );
    }

    #[test]
    fn rejects_zero_workers() {
        temp_env::with_vars(
            [
                ("COOKIT_HOST", None),
                ("COOKIT_PORT", None),
                ("COOKIT_WORKERS", Some("0")),
                ("COOKIT_SUBMIT_DELAY_MS", None),
                ("COOKIT_SESSION_TTL_HOURS", None),
            ],
            || {
                assert!(Settings::from_env().is_err());
            },
        );
    }

    #[rstest::rstest]
    #[case("3000000000000000")]
    #[case("18446744073709551615")]
    fn rejects_session_ttl_beyond_cookie_range(#[case] hours: &str) {
        temp_env::with_vars(
            [
                ("COOKIT_HOST", None),
                ("COOKIT_PORT", None),
                ("COOKIT_WORKERS", None),
                ("COOKIT_SUBMIT_DELAY_MS", None),
                ("COOKIT_SESSION_TTL_HOURS", Some(hours)),
            ],
            || {
                assert_eq!(
                    Settings::from_env(),
                    Err(ConfigError::Invalid {
                        key: "COOKIT_SESSION_TTL_HOURS",
                        value: hours.to_string(),
                    })
                );
            },
        );
    }

    #[test]
    fn accepts_the_longest_session_ttl() {
        let hours = MAX_SESSION_TTL_HOURS.to_string();
        temp_env::with_vars(
            [
                ("COOKIT_HOST", None),
                ("COOKIT_PORT", None),
                ("COOKIT_WORKERS", None),
                ("COOKIT_SUBMIT_DELAY_MS", None),
                ("COOKIT_SESSION_TTL_HOURS", Some(hours.as_str())),
            ],
            || {
                let settings = Settings::from_env().unwrap();
                assert_eq!(settings.session_ttl_hours(), i64::MAX / 3600);
                let _ = actix_web::cookie::time::Duration::hours(settings.session_ttl_hours());
            },
        );
    }
}
