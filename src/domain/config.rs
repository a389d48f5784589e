//! Scene configuration.
//!
//! Every field has a default matching the reference playground, so a host
//! may pass `{}` or override only what it needs:
//!
//! ```json
//! { "seed": 42, "pool": { "count": 20 }, "physics": { "gravity": [0, -3, 0] } }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// Orbit and spin of the kinematic twister bar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryParams {
    /// Spin about the vertical axis (rad/s)
    pub rotation_rate: f32,
    /// Angular speed around the orbit circle (rad/s)
    pub orbit_rate: f32,
    /// Orbit radius
    pub radius: f32,
    /// Constant height of the orbit plane
    pub height: f32,
}

impl Default for TrajectoryParams {
    fn default() -> Self {
        Self {
            rotation_rate: 3.0,
            orbit_rate: 0.5,
            radius: 2.0,
            height: -0.8,
        }
    }
}

/// Layout of the falling cube pool.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolParams {
    /// Number of cubes. Zero or negative yields an empty pool.
    pub count: i32,
    /// Half-width of the horizontal spawn square
    pub half_width: f32,
    /// Spawn height of the first cube
    pub base_height: f32,
    /// Extra height per cube index
    pub stagger: f32,
}

impl Default for PoolParams {
    fn default() -> Self {
        Self {
            count: 100,
            half_width: 4.0,
            base_height: 6.0,
            stagger: 0.2,
        }
    }
}

/// Click-to-jump impulse shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpulseParams {
    /// Upward velocity change per jump (impulse = strength * mass)
    pub jump_strength: f32,
    /// Fixed torque about the vertical axis
    pub torque_y: f32,
    /// Half-range of the random x/z torque
    pub torque_jitter: f32,
}

impl Default for ImpulseParams {
    fn default() -> Self {
        Self {
            jump_strength: 5.0,
            torque_y: 1.0,
            torque_jitter: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub gravity: Vec3,
    /// Fixed step length in seconds
    pub timestep: f32,
    /// Physics steps allowed per rendered frame before the backlog is dropped
    pub max_substeps: u32,
    pub solver_iterations: u32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.08, 0.0),
            timestep: 1.0 / 60.0,
            max_substeps: 4,
            solver_iterations: 8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for every random stream; `None` draws one from the host.
    pub seed: Option<u64>,
    /// URL of the collision hit sound
    pub hit_sound: Option<String>,
    pub trajectory: TrajectoryParams,
    pub pool: PoolParams,
    pub impulse: ImpulseParams,
    pub physics: PhysicsParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hit_sound: Some("/hit.mp3".to_string()),
            trajectory: TrajectoryParams::default(),
            pool: PoolParams::default(),
            impulse: ImpulseParams::default(),
            physics: PhysicsParams::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.trajectory;
        finite("trajectory.rotation_rate", t.rotation_rate)?;
        finite("trajectory.orbit_rate", t.orbit_rate)?;
        finite("trajectory.height", t.height)?;
        non_negative("trajectory.radius", t.radius)?;

        let p = &self.pool;
        non_negative("pool.half_width", p.half_width)?;
        finite("pool.base_height", p.base_height)?;
        finite("pool.stagger", p.stagger)?;

        let i = &self.impulse;
        finite("impulse.jump_strength", i.jump_strength)?;
        finite("impulse.torque_y", i.torque_y)?;
        non_negative("impulse.torque_jitter", i.torque_jitter)?;

        let ph = &self.physics;
        if !ph.gravity.is_finite() {
            return Err(ConfigError::NotFinite { field: "physics.gravity" });
        }
        positive("physics.timestep", ph.timestep)?;
        if ph.max_substeps == 0 {
            return Err(ConfigError::NotPositive { field: "physics.max_substeps", value: 0.0 });
        }
        if ph.solver_iterations == 0 {
            return Err(ConfigError::NotPositive { field: "physics.solver_iterations", value: 0.0 });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value: value as f64 });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value: value as f64 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_reference_scene() {
        let config = SceneConfig::from_json("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.pool.count, 100);
        assert_eq!(config.trajectory.radius, 2.0);
        assert_eq!(config.physics.gravity, Vec3::new(0.0, -9.08, 0.0));
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            SceneConfig::from_json(r#"{"seed": 9, "pool": {"count": 12}, "physics": {"gravity": [0, -3, 0]}}"#)
                .unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.pool.count, 12);
        assert_eq!(config.pool.half_width, 4.0);
        assert_eq!(config.physics.gravity, Vec3::new(0.0, -3.0, 0.0));
        assert_eq!(config.physics.timestep, 1.0 / 60.0);
    }

    #[test]
    fn negative_pool_count_is_accepted() {
        let config = SceneConfig::from_json(r#"{"pool": {"count": -5}}"#).unwrap();
        assert_eq!(config.pool.count, -5);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SceneConfig::from_json(r#"{"physics": {"timestep": 0}}"#),
            Err(ConfigError::NotPositive { field: "physics.timestep", .. })
        ));
        assert!(matches!(
            SceneConfig::from_json(r#"{"trajectory": {"radius": -1}}"#),
            Err(ConfigError::Negative { field: "trajectory.radius", .. })
        ));
        assert!(matches!(SceneConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let mut config = SceneConfig::default();
        config.seed = Some(3);
        config.hit_sound = None;
        let back = SceneConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
