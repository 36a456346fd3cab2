use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

const DEFAULT_DATA_PATH: &str = "data/state.json";
const DEFAULT_PORT: u16 = 8080;

/// Startup settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);

        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let ip = lookup("APP_BIND")
            .and_then(|value| value.trim().parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        Self {
            data_path,
            addr: SocketAddr::new(ip, port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]);
        assert_eq!(config.data_path, PathBuf::from("data/state.json"));
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("APP_DATA_PATH", "/tmp/tracker.json"),
            ("PORT", "9123"),
            ("APP_BIND", "127.0.0.1"),
        ]);
        assert_eq!(config.data_path, PathBuf::from("/tmp/tracker.json"));
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 9123)));
    }

    #[test]
    fn bad_port_falls_back() {
        let config = config(&[("PORT", "http")]);
        assert_eq!(config.addr.port(), 8080);
    }
}
