use serde::Deserialize;
use std::collections::HashMap;

use crate::codec::OpaqueId;
use crate::error::Error;

/// One named (alphabet, key, min_length) triple.
///
/// A profile is the complete decoding key: IDs issued under a profile can
/// only be decoded under the same profile.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileConfig {
    pub alphabet: String,
    pub key: String,
    pub min_length: usize,
}

impl ProfileConfig {
    /// Builds a codec from this profile, running full validation.
    pub fn build(&self) -> Result<OpaqueId, Error> {
        OpaqueId::new(&self.alphabet, &self.key, self.min_length)
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfilesConfig {
    pub profiles: HashMap<String, ProfileConfig>,
}

impl ProfilesConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../profiles.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in profiles
    /// 2. Override with ~/.config/opaque-id/profiles.toml if it exists
    /// 3. Override with ./profiles.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("opaque-id").join("profiles.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => {
                        config.merge(user_config);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("profiles.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => {
                    config.merge(local_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merge another config into this one, overriding existing profiles
    pub fn merge(&mut self, other: ProfilesConfig) {
        for (name, profile) in other.profiles {
            self.profiles.insert(name, profile);
        }
    }

    pub fn get_profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = ProfilesConfig::load_default().unwrap();
        assert!(config.profiles.contains_key("base58"));
    }

    #[test]
    fn test_default_profiles_build() {
        let config = ProfilesConfig::load_default().unwrap();
        for (name, profile) in &config.profiles {
            assert!(profile.build().is_ok(), "profile {} failed to build", name);
        }
    }

    #[test]
    fn test_base58_profile_shape() {
        let config = ProfilesConfig::load_default().unwrap();
        let base58 = config.get_profile("base58").unwrap();
        assert_eq!(base58.alphabet.chars().count(), 58);
        assert_eq!(base58.min_length, 5);
    }

    #[test]
    fn test_merge_configs() {
        let mut config1 = ProfilesConfig {
            profiles: HashMap::new(),
        };
        config1.profiles.insert(
            "test1".to_string(),
            ProfileConfig {
                alphabet: "ABCD".to_string(),
                key: "AQMAAg==".to_string(),
                min_length: 2,
            },
        );

        let mut config2 = ProfilesConfig {
            profiles: HashMap::new(),
        };
        config2.profiles.insert(
            "test1".to_string(),
            ProfileConfig {
                alphabet: "WXYZ".to_string(),
                key: "AQMAAg==".to_string(),
                min_length: 3,
            },
        );

        config1.merge(config2);

        assert_eq!(config1.profiles.len(), 1);
        assert_eq!(config1.get_profile("test1").unwrap().alphabet, "WXYZ");
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[profiles.custom]
alphabet = "0123456789"
key = "BAkGAgcAAQgFAw=="
min_length = 4
"#;
        let config = ProfilesConfig::from_toml(toml_content).unwrap();
        assert!(config.profiles.contains_key("custom"));
        assert_eq!(config.get_profile("custom").unwrap().min_length, 4);
    }
}
