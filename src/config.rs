//! Game configuration.
//!
//! Every tunable lives here with the value the game ships with. `from_env`
//! lets a tester override the interesting ones without a rebuild:
//!
//! - `STAR_COLLECTOR_ASSETS`: asset directory (default: "assets")
//! - `STAR_COLLECTOR_SENSITIVITY`: swipe distance (world units) of one gesture unit
//! - `STAR_COLLECTOR_DEADZONE`: gesture units needed before a swipe counts as a direction
//! - `STAR_COLLECTOR_TIE_BREAK`: "horizontal" or "vertical"
//! - `STAR_COLLECTOR_STEP_INTERVAL`: seconds per tile while sliding
//! - `STAR_COLLECTOR_MUTE`: "1" or "true" disables audio

use std::env;
use std::path::PathBuf;

use log::warn;

/// Axis that wins when a swipe is exactly diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" | "x" => Some(Axis::Horizontal),
            "vertical" | "v" | "y" => Some(Axis::Vertical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// World distance that maps to a normalized length of 1.
    pub sensitivity: f32,
    /// Normalized length below which a swipe is a tap.
    pub deadzone: f32,
    pub tie_break: Axis,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.04,
            deadzone: 1.0,
            tie_break: Axis::Horizontal,
        }
    }
}

impl GestureConfig {
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        if sensitivity > 0.0 && sensitivity.is_finite() {
            self.sensitivity = sensitivity;
        } else {
            warn!("Ignoring invalid gesture sensitivity {}", sensitivity);
        }
    }

    pub fn set_deadzone(&mut self, deadzone: f32) {
        if deadzone >= 0.0 && deadzone.is_finite() {
            self.deadzone = deadzone;
        } else {
            warn!("Ignoring invalid gesture deadzone {}", deadzone);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub gesture: GestureConfig,
    pub asset_dir: PathBuf,
    /// Half the width of a world tile.
    pub sprite_size: f32,
    /// Size of the directional input icons; the tap icon is twice this.
    pub button_size: f32,
    pub player_frames: usize,
    pub world_variants: usize,
    /// Background scroll in background widths per second.
    pub scroll_speed: f32,
    /// Seconds the player spends on each tile while sliding.
    pub step_interval: f32,
    /// Seconds input stays blocked after dying or finishing a level.
    pub input_delay: f32,
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            asset_dir: PathBuf::from("assets"),
            sprite_size: 0.025,
            button_size: 0.1,
            player_frames: 5,
            world_variants: 10,
            scroll_speed: 0.02,
            step_interval: 0.08,
            input_delay: 0.5,
            music_volume: 0.5,
            muted: false,
        }
    }
}

impl GameConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("STAR_COLLECTOR_ASSETS") {
            let dir = dir.trim();
            if !dir.is_empty() {
                config.asset_dir = PathBuf::from(dir);
            }
        }

        if let Some(sensitivity) = parse_var::<f32>("STAR_COLLECTOR_SENSITIVITY") {
            config.gesture.set_sensitivity(sensitivity);
        }
        if let Some(deadzone) = parse_var::<f32>("STAR_COLLECTOR_DEADZONE") {
            config.gesture.set_deadzone(deadzone);
        }
        if let Ok(axis) = env::var("STAR_COLLECTOR_TIE_BREAK") {
            match Axis::parse(&axis) {
                Some(axis) => config.gesture.tie_break = axis,
                None => warn!("Unknown STAR_COLLECTOR_TIE_BREAK value {:?}", axis),
            }
        }
        if let Some(interval) = parse_var::<f32>("STAR_COLLECTOR_STEP_INTERVAL") {
            if interval > 0.0 && interval.is_finite() {
                config.step_interval = interval;
            } else {
                warn!("Ignoring invalid step interval {}", interval);
            }
        }

        config.muted = env::var("STAR_COLLECTOR_MUTE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        config
    }

    /// Width of one world tile.
    pub fn tile_size(&self) -> f32 {
        self.sprite_size * 2.0
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_constants() {
        let config = GameConfig::default();
        assert_eq!(config.gesture.sensitivity, 0.04);
        assert_eq!(config.gesture.deadzone, 1.0);
        assert_eq!(config.gesture.tie_break, Axis::Horizontal);
        assert_eq!(config.player_frames, 5);
        assert_eq!(config.world_variants, 10);
        assert_eq!(config.scroll_speed, 0.02);
        assert_eq!(config.tile_size(), 0.05);
        assert_eq!(config.music_volume, 0.5);
    }

    #[test]
    fn axis_parse_is_case_insensitive() {
        assert_eq!(Axis::parse("Vertical"), Some(Axis::Vertical));
        assert_eq!(Axis::parse(" HORIZONTAL "), Some(Axis::Horizontal));
        assert_eq!(Axis::parse("diagonal"), None);
    }

    #[test]
    fn invalid_gesture_values_are_ignored() {
        let mut gesture = GestureConfig::default();
        gesture.set_sensitivity(0.0);
        gesture.set_sensitivity(f32::NAN);
        gesture.set_deadzone(-1.0);
        assert_eq!(gesture, GestureConfig::default());

        gesture.set_sensitivity(0.1);
        gesture.set_deadzone(2.0);
        assert_eq!(gesture.sensitivity, 0.1);
        assert_eq!(gesture.deadzone, 2.0);
    }

    // The only test that touches the environment.
    #[test]
    fn from_env_applies_valid_overrides_and_skips_bad_ones() {
        let vars = [
            ("STAR_COLLECTOR_ASSETS", " /opt/star-assets "),
            ("STAR_COLLECTOR_SENSITIVITY", "0.08"),
            ("STAR_COLLECTOR_DEADZONE", "-3"),
            ("STAR_COLLECTOR_TIE_BREAK", "vertical"),
            ("STAR_COLLECTOR_STEP_INTERVAL", "0"),
            ("STAR_COLLECTOR_MUTE", "TRUE"),
        ];
        for (name, value) in vars {
            env::set_var(name, value);
        }

        let config = GameConfig::from_env();
        assert_eq!(config.asset_dir, PathBuf::from("/opt/star-assets"));
        assert_eq!(config.gesture.sensitivity, 0.08);
        assert_eq!(config.gesture.deadzone, 1.0);
        assert_eq!(config.gesture.tie_break, Axis::Vertical);
        assert_eq!(config.step_interval, 0.08);
        assert!(config.muted);

        env::set_var("STAR_COLLECTOR_TIE_BREAK", "sideways");
        env::set_var("STAR_COLLECTOR_STEP_INTERVAL", "0.2");
        env::set_var("STAR_COLLECTOR_SENSITIVITY", "fast");
        env::set_var("STAR_COLLECTOR_MUTE", "0");
        let config = GameConfig::from_env();
        assert_eq!(config.gesture.tie_break, Axis::Horizontal);
        assert_eq!(config.step_interval, 0.2);
        assert_eq!(config.gesture.sensitivity, 0.04);
        assert!(!config.muted);

        for (name, _) in vars {
            env::remove_var(name);
        }
        assert_eq!(GameConfig::from_env(), GameConfig::default());
    }
}
