//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. Built-in defaults
//! 2. `config/default.toml` (version controlled)
//! 3. `config/user.toml` (gitignored, user overrides)
//! 4. Environment variables (`CLOTH_SECTION__KEY`)

use clothnet_math::{Color, Vec2};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Frame rate and pause state
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Physics world configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Cloth net layout and appearance
    #[serde(default)]
    pub net: NetConfig,
    /// Optional double pendulums
    #[serde(default)]
    pub pendulum: PendulumConfig,
    /// Position trails
    #[serde(default)]
    pub trails: TrailConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Built-in defaults
    /// 2. `config/default.toml`
    /// 3. `config/user.toml`
    /// 4. Environment variables (`CLOTH_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // CLOTH_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("CLOTH_").split("__"));

        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if sim.min_fps == 0 {
            return Err(ConfigError::invalid("simulation.min_fps must be at least 1"));
        }
        if sim.min_fps > sim.max_fps {
            return Err(ConfigError::invalid(
                "simulation.min_fps must not exceed simulation.max_fps",
            ));
        }
        if self.trails.max_length == 0 {
            return Err(ConfigError::invalid("trails.max_length must be at least 1"));
        }
        if self.physics.iterations == 0 {
            return Err(ConfigError::invalid("physics.iterations must be at least 1"));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cloth Simulation".to_string(),
            width: 800,
            height: 800,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Frame rate and pause configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Frames (and physics steps) per second
    pub target_fps: u32,
    /// Lowest rate the decrease key can reach
    pub min_fps: u32,
    /// Highest rate the increase key can reach
    pub max_fps: u32,
    /// Start with the simulation paused
    pub start_paused: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            target_fps: 50,
            min_fps: 1,
            max_fps: 240,
            start_paused: false,
        }
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity [x, y] (y-up, so negative y pulls down)
    pub gravity: [f32; 2],
    /// Joint/contact relaxation rounds per step
    pub iterations: usize,
    /// Velocity multiplier per step (1.0 = no damping)
    pub damping: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -900.0],
            iterations: 10,
            damping: 1.0,
        }
    }
}

impl PhysicsConfig {
    /// Convert to the physics crate's world configuration
    pub fn to_physics_config(&self) -> clothnet_physics::PhysicsConfig {
        clothnet_physics::PhysicsConfig::new(Vec2::from(self.gravity))
            .with_iterations(self.iterations)
            .with_damping(self.damping)
    }
}

/// Cloth net configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// World position of the top-left anchor [x, y]
    pub origin: [f32; 2],
    /// Number of columns (one anchor per column)
    pub cols: usize,
    /// Number of rows, counting the anchored top row
    pub rows: usize,
    /// Distance between neighbouring grid points
    pub separation: f32,
    /// Radius of each point
    pub point_radius: f32,
    /// Point density (mass = density * area)
    pub density: f32,
    /// Restitution of each point
    pub elasticity: f32,
    /// Sliding resistance of each point against other points
    pub friction: f32,
    /// Palette index for point color
    pub color_index: usize,
    /// Impulse [x, y] applied to the bottom row by the disturb key
    pub disturb_impulse: [f32; 2],
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            origin: [300.0, 500.0],
            cols: 4,
            rows: 4,
            separation: 100.0,
            point_radius: 10.0,
            density: 1.0,
            elasticity: 1.0,
            friction: 0.0,
            color_index: 5,
            disturb_impulse: [60_000.0, 30_000.0],
        }
    }
}

/// Double pendulum configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumConfig {
    /// Spawn the pendulum alongside the net
    pub enabled: bool,
    /// First bob position [x, y]
    pub point1: [f32; 2],
    /// Second bob position [x, y]
    pub point2: [f32; 2],
    /// Static pivot position [x, y]
    pub anchor: [f32; 2],
    /// Palette index of the first bob (the second uses index + 4)
    pub color_index: usize,
    /// Draw the connectors
    pub show_connectors: bool,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            point1: [200.0, 500.0],
            point2: [300.0, 700.0],
            anchor: [400.0, 400.0],
            color_index: 1,
            show_connectors: true,
        }
    }
}

/// Trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Draw trails at startup
    pub enabled: bool,
    /// Positions kept per point
    pub max_length: usize,
    /// Radius of each trail dot
    pub radius: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_length: 120,
            radius: 5.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color while running [r, g, b, a]
    pub background_color: [f32; 4],
    /// Background color while paused [r, g, b, a]
    pub paused_color: [f32; 4],
    /// Connector line thickness in pixels
    pub line_width: f32,
    /// Radius of the dot drawn at a connector's far end
    pub link_dot_radius: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE.to_array(),
            paused_color: Color::GREY.to_array(),
            line_width: 1.0,
            link_dot_radius: 5.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Show the measured FPS in the window title
    pub show_fps: bool,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_fps: true,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: &str) -> Self {
        ConfigError {
            message: message.to_string(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "Cloth Simulation");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.simulation.target_fps, 50);
        assert_eq!(config.physics.gravity, [0.0, -900.0]);
        assert_eq!(config.net.cols, 4);
        assert_eq!(config.net.rows, 4);
        assert!(!config.pendulum.enabled);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("gravity"));
        assert!(toml.contains("separation"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("[net]\ncols = 6\nrows = 3\n").unwrap();
        assert_eq!(config.net.cols, 6);
        assert_eq!(config.net.rows, 3);
        assert_eq!(config.window.title, "Cloth Simulation");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: AppConfig = toml::from_str(
            "[window]\ntitle = \"Net\"\n\n[pendulum]\nenabled = true\n\n[trails]\nradius = 2.0\n",
        )
        .unwrap();
        assert_eq!(config.window.title, "Net");
        assert_eq!(config.window.width, 800);
        assert!(config.pendulum.enabled);
        assert_eq!(config.pendulum.anchor, [400.0, 400.0]);
        assert_eq!(config.trails.radius, 2.0);
        assert_eq!(config.trails.max_length, 120);
    }

    #[test]
    fn test_paused_color_is_grey() {
        let rendering = RenderingConfig::default();
        assert_eq!(Color::from(rendering.paused_color), Color::GREY);
        assert_eq!(Color::from(rendering.background_color), Color::WHITE);
    }

    #[test]
    fn test_to_physics_config() {
        let physics = PhysicsConfig {
            gravity: [0.0, -10.0],
            iterations: 4,
            damping: 0.9,
        }
        .to_physics_config();
        assert_eq!(physics.gravity, Vec2::new(0.0, -10.0));
        assert_eq!(physics.iterations, 4);
        assert_eq!(physics.damping, 0.9);
    }

    #[test]
    fn test_validate_rejects_zero_min_fps() {
        let mut config = AppConfig::default();
        config.simulation.min_fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_fps_range() {
        let mut config = AppConfig::default();
        config.simulation.min_fps = 100;
        config.simulation.max_fps = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_trails() {
        let mut config = AppConfig::default();
        config.trails.max_length = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("trails.max_length"));
    }
}
