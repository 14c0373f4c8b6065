//! Driver settings
//!
//! Everything the frame driver needs that is not a simulation constant:
//! viewport, pacing, seed, output and scripted input. Loaded from an optional
//! JSON file, then overridden from the command line.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// What the driver prints per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One JSON draw list per line
    #[default]
    Json,
    /// One short human-readable line per frame
    Summary,
    /// Nothing per frame (log output only)
    Quiet,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Json => "json",
            OutputMode::Summary => "summary",
            OutputMode::Quiet => "quiet",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputMode::Json),
            "summary" => Some(OutputMode::Summary),
            "quiet" | "none" => Some(OutputMode::Quiet),
            _ => None,
        }
    }
}

/// A scripted input event, applied before the given frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptedEvent {
    Tap { frame: u64, x: f32, y: f32 },
    Clear { frame: u64 },
}

impl ScriptedEvent {
    pub fn frame(&self) -> u64 {
        match *self {
            ScriptedEvent::Tap { frame, .. } | ScriptedEvent::Clear { frame } => frame,
        }
    }
}

/// Driver settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    pub width: f32,
    pub height: f32,

    // === Pacing ===
    /// Frames per second
    pub frame_rate: u32,
    /// Length of one animation cycle; the driver repeats it until stopped
    pub cycle_seconds: f32,
    /// Frames to run (0 = until killed)
    pub frames: u64,
    /// Skip sleeping between frames
    pub fast: bool,

    // === Simulation ===
    /// Color seed (None = pick one from the system)
    pub seed: Option<u64>,
    /// Chance per frame of a random tap somewhere in the viewport
    pub random_tap_chance: f64,
    /// Input replayed at fixed frames
    pub script: Vec<ScriptedEvent>,

    // === Output ===
    pub output: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,

            frame_rate: 60,
            cycle_seconds: 60.0,
            frames: 0,
            fast: false,

            seed: None,
            random_tap_chance: 0.0,
            script: Vec::new(),

            output: OutputMode::Json,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Build settings from command-line args
    ///
    /// Starts from the file named by `--settings PATH` (or the defaults),
    /// then applies the remaining flags on top.
    pub fn from_args(args: &[String]) -> Result<Self, SettingsError> {
        let mut settings = match settings_path(args)? {
            Some(path) => Settings::load(&path)?,
            None => Settings::default(),
        };
        settings.apply_args(args)?;
        Ok(settings)
    }

    /// Apply command-line overrides
    ///
    /// Recognised: `--frames N`, `--seed N`, `--output MODE`, `--fast`,
    /// `--summary`. `--settings PATH` is read by `from_args`.
    pub fn apply_args(&mut self, args: &[String]) -> Result<(), SettingsError> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--frames" => self.frames = parse_value(arg, iter.next())?,
                "--seed" => self.seed = Some(parse_value(arg, iter.next())?),
                "--output" => {
                    let value = iter.next().ok_or_else(|| SettingsError::missing(arg))?;
                    self.output = OutputMode::from_str(value).ok_or_else(|| {
                        SettingsError::Invalid(format!("unknown output mode '{value}'"))
                    })?;
                }
                "--fast" => self.fast = true,
                "--summary" => self.output = OutputMode::Summary,
                "--settings" => {
                    iter.next().ok_or_else(|| SettingsError::missing(arg))?;
                }
                _ => log::warn!("Ignoring unknown argument '{arg}'"),
            }
        }
        self.validate()
    }

    /// Reject values the driver cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_rate == 0 {
            return Err(SettingsError::Invalid("frame_rate must be positive".into()));
        }
        if !(self.cycle_seconds > 0.0) {
            return Err(SettingsError::Invalid("cycle_seconds must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.random_tap_chance) {
            return Err(SettingsError::Invalid(
                "random_tap_chance must be within 0..=1".into(),
            ));
        }
        Ok(())
    }

    /// Frames in one animation cycle
    pub fn frames_per_cycle(&self) -> u64 {
        ((self.cycle_seconds * self.frame_rate as f32).round() as u64).max(1)
    }
}

/// Path given with `--settings`, if any
fn settings_path(args: &[String]) -> Result<Option<PathBuf>, SettingsError> {
    match args.iter().position(|a| a == "--settings") {
        Some(i) => args
            .get(i + 1)
            .map(|p| Some(PathBuf::from(p)))
            .ok_or_else(|| SettingsError::missing("--settings")),
        None => Ok(None),
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, SettingsError> {
    let value = value.ok_or_else(|| SettingsError::missing(flag))?;
    value
        .parse()
        .map_err(|_| SettingsError::Invalid(format!("bad value '{value}' for {flag}")))
}

/// Errors that can occur while building settings
#[derive(Debug)]
pub enum SettingsError {
    /// Failed to read the settings file
    Io(std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    Parse(serde_json::Error),
    /// A value is out of range or a flag is malformed
    Invalid(String),
}

impl SettingsError {
    fn missing(flag: &str) -> Self {
        SettingsError::Invalid(format!("{flag} needs a value"))
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Failed to read settings file: {}", e),
            SettingsError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            SettingsError::Invalid(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "width": 320.0, "frames": 10 }"#).unwrap();
        assert_eq!(settings.width, 320.0);
        assert_eq!(settings.height, 600.0);
        assert_eq!(settings.frames, 10);
        assert_eq!(settings.output, OutputMode::Json);
    }

    #[test]
    fn test_script_parses() {
        let json = r#"{ "script": [
            { "kind": "tap", "frame": 3, "x": 10.0, "y": 20.0 },
            { "kind": "clear", "frame": 9 }
        ] }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.script.len(), 2);
        assert_eq!(settings.script[0], ScriptedEvent::Tap { frame: 3, x: 10.0, y: 20.0 });
        assert_eq!(settings.script[1].frame(), 9);
    }

    #[test]
    fn test_args_override() {
        let mut settings = Settings::default();
        settings
            .apply_args(&args(&["--frames", "120", "--seed", "7", "--fast", "--output", "quiet"]))
            .unwrap();
        assert_eq!(settings.frames, 120);
        assert_eq!(settings.seed, Some(7));
        assert!(settings.fast);
        assert_eq!(settings.output, OutputMode::Quiet);
    }

    #[test]
    fn test_bad_args_rejected() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.apply_args(&args(&["--frames", "lots"])),
            Err(SettingsError::Invalid(_))
        ));
        assert!(settings.apply_args(&args(&["--seed"])).is_err());
        assert!(settings.apply_args(&args(&["--output", "svg"])).is_err());
    }

    #[test]
    fn test_settings_flag_needs_path() {
        assert!(matches!(
            Settings::from_args(&args(&["--fast", "--settings"])),
            Err(SettingsError::Invalid(_))
        ));
        let mut settings = Settings::default();
        assert!(matches!(
            settings.apply_args(&args(&["--frames", "3", "--settings"])),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_from_args_without_file() {
        let settings = Settings::from_args(&args(&["--frames", "5", "--summary"])).unwrap();
        assert_eq!(settings.frames, 5);
        assert_eq!(settings.output, OutputMode::Summary);
        assert_eq!(settings.width, 800.0);
    }

    #[test]
    fn test_validate() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());
        settings.frame_rate = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.random_tap_chance = 1.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_frames_per_cycle() {
        let settings = Settings::default();
        assert_eq!(settings.frames_per_cycle(), 3600);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
