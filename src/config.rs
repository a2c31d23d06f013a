//! Orrery configuration.
//!
//! Resolved through a chain, first hit wins:
//!
//! 1. `--config <path>`: explicit, must exist
//! 2. `ORRERY_CONFIG` env var: must exist
//! 3. `~/.orrery/config.toml`: optional
//! 4. built-in defaults
//!
//! Every key is optional; missing keys take their default.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};

use crate::extract::{PatternOverrides, ReportFieldExtractor};
use crate::horizons::EphemerisQuery;
use crate::model::BodyName;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ORRERY_CONFIG";

const DEFAULT_BODIES: [&str; 12] = [
    "Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
    "Moon", "Europa",
];

/// Orrery configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Bodies to process, in output order.
    pub bodies: Vec<String>,

    /// Where the dataset is written.
    pub output: PathBuf,

    pub lookup_url: String,
    pub ephemeris_url: String,

    /// Lookup category filter.
    pub group: String,

    /// First day of the observation window. The window spans this day and the next.
    pub epoch: Date,

    pub step_size: String,
    pub center: String,
    pub ephem_type: String,
    pub vec_table: String,

    /// Replacement field patterns, for when the report format changes.
    pub patterns: PatternOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bodies: DEFAULT_BODIES.iter().map(ToString::to_string).collect(),
            output: PathBuf::from("planetData").join("objects.json"),
            lookup_url: "https://ssd.jpl.nasa.gov/api/horizons_lookup.api".to_string(),
            ephemeris_url: "https://ssd.jpl.nasa.gov/api/horizons.api".to_string(),
            group: "mb".to_string(),
            epoch: date(2020, 1, 1),
            step_size: "1d".to_string(),
            center: "500@0".to_string(),
            ephem_type: "VECTORS".to_string(),
            vec_table: "2".to_string(),
            patterns: PatternOverrides::default(),
        }
    }
}

impl Config {
    /// Load config through the resolution chain.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let from_env = env::var(CONFIG_ENV).ok().filter(|s| !s.is_empty());
        Self::load_from(explicit, from_env.map(PathBuf::from), Self::path())
    }

    /// The resolution chain with its inputs spelled out.
    fn load_from(
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
        default_path: Option<PathBuf>,
    ) -> Result<Self, String> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        if let Some(path) = from_env {
            return Self::read(&path)
                .map_err(|e| format!("{e}\n(named by {CONFIG_ENV})"));
        }

        if let Some(path) = default_path {
            match fs::read_to_string(&path) {
                Ok(contents) => return Self::parse(&contents, &path),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
            }
        }

        Ok(Self::default())
    }

    fn read(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The default config file path: `~/.orrery/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".orrery").join("config.toml"))
    }

    /// The configured bodies. An empty list is an error.
    pub fn body_names(&self) -> Result<Vec<BodyName>, String> {
        if self.bodies.is_empty() {
            return Err("no bodies configured: set `bodies` or pass --body".to_string());
        }
        Ok(self.bodies.iter().map(|b| BodyName::new(b.as_str())).collect())
    }

    /// The observation settings shared by every ephemeris request.
    pub fn ephemeris_query(&self) -> Result<EphemerisQuery, String> {
        let stop = self
            .epoch
            .tomorrow()
            .map_err(|e| format!("epoch {} has no following day: {e}", self.epoch))?;

        Ok(EphemerisQuery {
            ephem_type: self.ephem_type.clone(),
            center: self.center.clone(),
            vec_table: self.vec_table.clone(),
            step_size: self.step_size.clone(),
            start: self.epoch,
            stop,
        })
    }

    /// The report extractor, with any configured pattern replacements.
    pub fn extractor(&self) -> Result<ReportFieldExtractor, String> {
        ReportFieldExtractor::with_overrides(&self.patterns).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn defaults_cover_the_standard_bodies() {
        let config = Config::default();
        assert_eq!(config.bodies.len(), 12);
        assert_eq!(config.bodies[0], "Sun");
        assert_eq!(config.bodies[11], "Europa");
        assert_eq!(config.output, PathBuf::from("planetData/objects.json"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse(
            "bodies = [\"Earth\", \"Moon\"]\nepoch = \"2024-02-28\"\n",
            Path::new("test.toml"),
        )
        .unwrap();

        assert_eq!(config.bodies, ["Earth", "Moon"]);
        assert_eq!(config.epoch, date(2024, 2, 28));
        assert_eq!(config.center, "500@0");
        assert_eq!(config.group, "mb");
    }

    #[test]
    fn pattern_overrides_use_kebab_case() {
        let config = Config::parse(
            "[patterns]\nstate-vector = '(?P<x>.)(?P<y>.)(?P<z>.)(?P<vx>.)(?P<vy>.)(?P<vz>.)'\n",
            Path::new("test.toml"),
        )
        .unwrap();

        assert!(config.patterns.state_vector.is_some());
        assert!(config.patterns.mass.is_none());
        assert!(config.extractor().is_ok());
    }

    #[test]
    fn invalid_file_names_its_path() {
        let err = Config::parse("bodies = 3", Path::new("/etc/orrery.toml")).unwrap_err();
        assert!(err.starts_with("invalid config at /etc/orrery.toml"));
    }

    #[test]
    fn window_is_epoch_and_the_following_day() {
        let config = Config {
            epoch: date(2024, 2, 28),
            ..Config::default()
        };
        let query = config.ephemeris_query().unwrap();
        assert_eq!(query.start, date(2024, 2, 28));
        assert_eq!(query.stop, date(2024, 2, 29));
        assert_eq!(query.ephem_type, "VECTORS");
        assert_eq!(query.vec_table, "2");
    }

    #[test]
    fn empty_body_list_is_rejected() {
        let config = Config {
            bodies: Vec::new(),
            ..Config::default()
        };
        assert!(config.body_names().is_err());
    }

    #[test]
    fn explicit_path_wins_and_must_exist() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("explicit.toml");
        let from_env = dir.path().join("env.toml");
        fs::write(&explicit, "group = \"sb\"").unwrap();
        fs::write(&from_env, "group = \"pln\"").unwrap();

        let config = Config::load_from(Some(&explicit), Some(from_env), None).unwrap();
        assert_eq!(config.group, "sb");

        let missing = dir.path().join("missing.toml");
        assert!(Config::load_from(Some(&missing), None, None).is_err());
    }

    #[test]
    fn env_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from(None, Some(dir.path().join("missing.toml")), None).unwrap_err();
        assert!(err.contains(CONFIG_ENV));
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(None, None, Some(dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn default_file_is_read_when_present() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output = \"out/bodies.json\"").unwrap();

        let config = Config::load_from(None, None, Some(path)).unwrap();
        assert_eq!(config.output, PathBuf::from("out/bodies.json"));
    }
}
