//! Game settings loaded from disk before the app is assembled.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/game.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawGameConfig {
    #[serde(default)]
    window: RawWindowSection,
    #[serde(default)]
    movement: RawMovementSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawWindowSection {
    title: String,
    width: u32,
    height: u32,
}

impl Default for RawWindowSection {
    fn default() -> Self {
        Self {
            title: "Courtyard".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMovementSection {
    step: i32,
}

impl Default for RawMovementSection {
    fn default() -> Self {
        Self { step: 5 }
    }
}

/// Window and movement parameters shared by the game's systems.
#[derive(Resource, Debug, Clone)]
pub struct WorldSettings {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub move_step: i32,
}

impl WorldSettings {
    /// Reads `config/game.toml`, falling back to defaults when the file is
    /// missing or malformed. This runs before the app (and its logger)
    /// exists, so failures go straight to stderr.
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawGameConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    eprintln!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawGameConfig::default().into()
                }
            },
            Err(err) => {
                eprintln!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawGameConfig::default().into()
            }
        }
    }
}

impl Default for WorldSettings {
    fn default() -> Self {
        RawGameConfig::default().into()
    }
}

impl From<RawGameConfig> for WorldSettings {
    fn from(value: RawGameConfig) -> Self {
        let window = value.window;
        let movement = value.movement;

        Self {
            window_title: window.title,
            window_width: window.width.max(1),
            window_height: window.height.max(1),
            move_step: movement.step.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_window() {
        let settings = WorldSettings::default();

        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 600);
        assert_eq!(settings.move_step, 5);
    }

    #[test]
    fn sections_override_independently() {
        let raw: RawGameConfig = toml::from_str("[movement]\nstep = 10\n").unwrap();
        let settings = WorldSettings::from(raw);

        assert_eq!(settings.move_step, 10);
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_title, "Courtyard");
    }

    #[test]
    fn degenerate_values_are_clamped() {
        let raw: RawGameConfig =
            toml::from_str("[window]\nwidth = 0\nheight = 0\n\n[movement]\nstep = -3\n").unwrap();
        let settings = WorldSettings::from(raw);

        assert_eq!(settings.window_width, 1);
        assert_eq!(settings.window_height, 1);
        assert_eq!(settings.move_step, 1);
    }
}
