use std::io::ErrorKind;
use std::sync::Mutex;

use crate::settings::GameSettings;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads and stores `GameSettings` as a YAML file. A missing file yields
/// the defaults; a present but invalid file is an error. Reads are cached
/// until the next successful write.
pub struct SettingsStore {
    file_path: String,
    cached: Mutex<Option<GameSettings>>,
}

impl SettingsStore {
    pub fn new(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            cached: Mutex::new(None),
        }
    }

    pub fn load(&self) -> Result<GameSettings, String> {
        let mut cached = self.cached.lock().unwrap();

        if let Some(settings) = cached.as_ref() {
            return Ok(*settings);
        }

        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(GameSettings::default());
            }
            Err(err) => return Err(format!("Failed to read settings file: {}", err)),
        };

        let settings: GameSettings = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize settings: {}", e))?;

        settings
            .validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;

        *cached = Some(settings);
        Ok(settings)
    }

    pub fn save(&self, settings: &GameSettings) -> Result<(), String> {
        settings
            .validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(settings)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        let mut cached = self.cached.lock().unwrap();
        *cached = Some(*settings);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BotType, Mark};

    fn temp_path(name: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("tictactoe-engine-{}-{}.yaml", name, std::process::id()));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let store = SettingsStore::new(&temp_path("missing"));
        assert_eq!(store.load().unwrap(), GameSettings::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = temp_path("round-trip");
        let store = SettingsStore::new(&path);

        let settings = GameSettings {
            human_mark: Mark::O,
            bot_mark: Mark::X,
            bot_type: BotType::Random,
            max_depth: 3,
        };
        store.save(&settings).unwrap();

        let fresh_store = SettingsStore::new(&path);
        assert_eq!(fresh_store.load().unwrap(), settings);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let path = temp_path("invalid");
        let store = SettingsStore::new(&path);

        let settings = GameSettings {
            human_mark: Mark::X,
            bot_mark: Mark::X,
            ..GameSettings::default()
        };
        assert!(store.save(&settings).is_err());
        assert!(!std::path::Path::new(&path).exists());
    }

    #[test]
    fn test_invalid_file_content_is_an_error() {
        let path = temp_path("garbage");
        std::fs::write(&path, "not: [valid").unwrap();

        let store = SettingsStore::new(&path);
        assert!(store.load().is_err());

        let _ = std::fs::remove_file(&path);
    }
}
