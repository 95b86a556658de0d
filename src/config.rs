use crate::error::RigResult;
use crate::features::shake::{ShakeDirection, ShakeParams};
use crate::gfx::anim::Ease;
use crate::gfx::math::Color;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_rig")]
    pub rig: RigConfig,

    #[serde(default = "default_shake")]
    pub shake: ShakeConfig,

    #[serde(default = "default_fade")]
    pub fade: FadeConfig,

    #[serde(default = "default_viewport")]
    pub viewport: Size,

    #[serde(default = "default_fps_cap")]
    pub fps_cap: u32,

    /// Frames the demo runs before exiting.
    #[serde(default = "default_frames")]
    pub frames: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub trailing_distance: f32,
    pub align_with_target: bool,
    pub lean_back_ratio: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    pub direction: String,
    pub strength: f32,
    pub duration: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    pub duration: f32,
    pub color: String,
    pub ease: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rig: default_rig(),
            shake: default_shake(),
            fade: default_fade(),
            viewport: default_viewport(),
            fps_cap: default_fps_cap(),
            frames: default_frames(),
        }
    }
}

impl Default for RigConfig {
    fn default() -> Self {
        default_rig()
    }
}

impl Default for ShakeConfig {
    fn default() -> Self {
        default_shake()
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        default_fade()
    }
}

fn default_rig() -> RigConfig {
    RigConfig {
        trailing_distance: 0.1,
        align_with_target: false,
        lean_back_ratio: 0.05,
    }
}

fn default_shake() -> ShakeConfig {
    let params = ShakeParams::default();
    ShakeConfig {
        direction: "horizontal".to_string(),
        strength: params.strength,
        duration: params.duration,
        speed: params.speed,
    }
}

fn default_fade() -> FadeConfig {
    FadeConfig {
        duration: 1.0,
        color: "#000000".to_string(),
        ease: "linear".to_string(),
    }
}

fn default_viewport() -> Size {
    Size {
        width: 320,
        height: 180,
    }
}

fn default_fps_cap() -> u32 {
    60
}

fn default_frames() -> u32 {
    300
}

impl ShakeConfig {
    pub fn direction(&self) -> RigResult<ShakeDirection> {
        self.direction.parse()
    }

    pub fn params(&self) -> ShakeParams {
        ShakeParams::new(self.strength, self.duration, self.speed)
    }
}

impl FadeConfig {
    pub fn color(&self) -> Result<Color> {
        Color::from_hex(&self.color)
            .ok_or_else(|| anyhow::anyhow!("Invalid fade color {:?}", self.color))
    }

    pub fn ease(&self) -> RigResult<Ease> {
        self.ease.parse()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Self::load_from(&config_dir.join("cinerig").join("config.toml"))
    }

    /// Reads `path`, or returns the defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        let config_dir = config_dir.join("cinerig");
        std::fs::create_dir_all(&config_dir)?;

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(config_dir.join("config.toml"), contents)?;

        Ok(())
    }
}
