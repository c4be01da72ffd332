use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::config::config_error::ConfigError;
use crate::net::call_waiting_list::call_waiting_list_config::CallWaitingListConfig;

/// Settings of a correlation client, usually read from a TOML file.
///
/// Every field has a default, so an empty file is a valid config. Calls never
/// expire unless `call_expiry_after_millis` is set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub trace_level: String,
    pub initial_pending_capacity: usize,
    pub call_expiry_after_millis: Option<u64>,
    pub pause_expiry_checker_millis: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        return BridgeConfig {
            trace_level: "info".to_string(),
            initial_pending_capacity: 0,
            call_expiry_after_millis: None,
            pause_expiry_checker_millis: 2000,
        };
    }
}

impl BridgeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        return Ok(toml::from_str(content)?);
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        return Self::from_toml_str(&content);
    }

    pub fn call_waiting_list_config(&self) -> CallWaitingListConfig {
        let pause_expiry_checker = Duration::from_millis(self.pause_expiry_checker_millis);
        return match self.call_expiry_after_millis {
            Some(millis) => CallWaitingListConfig::new(Duration::from_millis(millis), pause_expiry_checker),
            None => CallWaitingListConfig::without_expiry(),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use crate::config::bridge_config::BridgeConfig;
    use crate::config::config_error::ConfigError;
    use crate::net::call_waiting_list::call_waiting_list_config::CallWaitingListConfig;

    #[test]
    fn empty_config_uses_defaults() {
        let config = BridgeConfig::from_toml_str("").unwrap();

        assert_eq!(BridgeConfig::default(), config);
        assert_eq!(CallWaitingListConfig::without_expiry(), config.call_waiting_list_config());
    }

    #[test]
    fn config_with_call_expiry() {
        let config = BridgeConfig::from_toml_str(r#"
            trace_level = "debug"
            initial_pending_capacity = 16
            call_expiry_after_millis = 30000
            pause_expiry_checker_millis = 500
        "#).unwrap();

        assert_eq!("debug", config.trace_level);
        assert_eq!(16, config.initial_pending_capacity);

        let call_waiting_list_config = config.call_waiting_list_config();
        assert_eq!(Some(Duration::from_secs(30)), call_waiting_list_config.get_call_expiry_after());
        assert_eq!(Duration::from_millis(500), call_waiting_list_config.get_pause_expiry_checker());
    }

    #[test]
    fn reject_malformed_config() {
        let result = BridgeConfig::from_toml_str("initial_pending_capacity = \"many\"");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trace_level = \"warn\"").unwrap();

        let config = BridgeConfig::load(file.path()).unwrap();
        assert_eq!("warn", config.trace_level);
        assert_eq!(None, config.call_expiry_after_millis);
    }

    #[test]
    fn fail_to_load_a_missing_file() {
        let result = BridgeConfig::load("/definitely/not/here/bridge.toml");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
