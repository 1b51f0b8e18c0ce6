use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::LevelError;

/// Which predicate decides that an actor has reached the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalRule {
    /// Any positive-area overlap with the goal counts.
    #[default]
    Overlap,
    /// The actor must be fully inside the goal.
    Contain,
}

/// What happens to recorded level results when a new campaign starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsPolicy {
    #[default]
    ClearOnNewCampaign,
    Append,
}

/// Tunable simulation constants. Units are world units and ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Horizontal speed while a direction is held.
    pub move_force: f32,
    /// Vertical velocity set by a jump. Negative is up.
    pub jump_force: f32,
    /// Per-tick vertical acceleration while airborne.
    pub gravity: f32,
    /// Cosmetic tilt per tick of horizontal input, in degrees.
    pub rotation_speed: f32,
    /// Number of consecutive ticks that boosted gravity may apply.
    pub fast_fall_limit: u32,
    /// Gravity multiplier during fast-fall.
    pub gravity_boost: f32,
    /// Width and height of both actors.
    pub actor_size: Vec2,
    pub goal_rule: GoalRule,
    pub results_policy: ResultsPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            move_force: 5.0,
            jump_force: -12.0,
            gravity: 0.6,
            rotation_speed: 5.0,
            fast_fall_limit: 20,
            gravity_boost: 2.0,
            actor_size: Vec2::new(40.0, 60.0),
            goal_rule: GoalRule::Overlap,
            results_policy: ResultsPolicy::ClearOnNewCampaign,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if !(self.fixed_dt > 0.0) {
            return Err(LevelError::InvalidConfig(format!("fixed_dt must be positive, got {}", self.fixed_dt)));
        }
        if !(self.actor_size.x > 0.0 && self.actor_size.y > 0.0) {
            return Err(LevelError::InvalidConfig(format!(
                "actor_size must be positive, got {:?}",
                self.actor_size
            )));
        }
        if self.gravity_boost < 1.0 {
            return Err(LevelError::InvalidConfig(format!(
                "gravity_boost must be at least 1, got {}",
                self.gravity_boost
            )));
        }
        Ok(())
    }
}
