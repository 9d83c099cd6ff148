//! Configuration loader for the simulation kernel.
//!
//! * Looks for `kernel.toml` in the cwd unless overridden by the caller.
//! * Provides defaults so the file is optional.
//!
//! Same shape as the teacher's `Config::load`: a plain `Deserialize` struct
//! with `serde(default = ...)` fields, loaded with a silent fallback to
//! `Default` on any read or parse error, generalized from Bevy/audio
//! tunables to the kernel's own (grid size, rule tokens, vitality anchors,
//! seed).

use std::fs;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::neighborhood::Neighborhood;
use crate::rule::RuleSpec;
use crate::topology::Boundary;
use crate::vitality::VitalityTable;

#[derive(Debug, Deserialize, Clone)]
pub struct KernelConfig {
    /// Grid size in cells.
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Initial random seed (optional; `None` means "use OS entropy").
    #[serde(default)]
    pub seed: Option<u64>,

    /// Wire-stable rule tokens (spec §6).
    #[serde(default = "default_neighborhood_token")]
    pub neighborhood: String,
    #[serde(default = "default_boundary_token")]
    pub boundary: String,

    #[serde(default = "default_birth")]
    pub birth: Vec<u32>,
    #[serde(default = "default_survive")]
    pub survive: Vec<u32>,
    #[serde(default = "default_num_states")]
    pub num_states: u16,

    /// Vitality curve anchors; empty or single-anchor means vitality is
    /// disabled (flat-zero table).
    #[serde(default)]
    pub vitality_anchors: Vec<(f64, f64)>,

    /// Initial seed density for a random fill at startup.
    #[serde(default = "default_density")]
    pub density: f64,
}

fn default_cols() -> usize { 100 }
fn default_rows() -> usize { 100 }
fn default_neighborhood_token() -> String { "moore".to_string() }
fn default_boundary_token() -> String { "torus".to_string() }
fn default_birth() -> Vec<u32> { vec![3] }
fn default_survive() -> Vec<u32> { vec![2, 3] }
fn default_num_states() -> u16 { 2 }
fn default_density() -> f64 { 0.3 }

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            cols: default_cols(),
            rows: default_rows(),
            seed: None,
            neighborhood: default_neighborhood_token(),
            boundary: default_boundary_token(),
            birth: default_birth(),
            survive: default_survive(),
            num_states: default_num_states(),
            vitality_anchors: Vec::new(),
            density: default_density(),
        }
    }
}

impl KernelConfig {
    /// Load from a TOML file; fall back to defaults on any error.
    pub fn load(path: Option<&str>) -> Self {
        let p = path.unwrap_or("kernel.toml");
        match fs::read_to_string(p) {
            Ok(text) => {
                log::info!("loaded kernel config from {p}");
                toml::from_str(&text).unwrap_or_default()
            }
            Err(_) => {
                log::info!("no config file at {p}, using defaults");
                Self::default()
            }
        }
    }

    /// Build the `RuleSpec` this config describes, validating its tokens and
    /// numeric ranges (spec §7 configuration errors).
    pub fn rule_spec(&self) -> Result<RuleSpec, ConfigError> {
        let neighborhood = Neighborhood::parse(&self.neighborhood)
            .ok_or_else(|| ConfigError::UnknownNeighborhood(self.neighborhood.clone()))?;
        let boundary = Boundary::parse(&self.boundary)
            .ok_or_else(|| ConfigError::UnknownBoundary(self.boundary.clone()))?;
        let birth_mask = RuleSpec::mask_from_counts(&self.birth);
        let survive_mask = RuleSpec::mask_from_counts(&self.survive);
        RuleSpec::new(birth_mask, survive_mask, self.num_states, neighborhood, boundary)
    }

    /// Build and bake this config's vitality curve.
    pub fn vitality_table(&self) -> Result<VitalityTable, ConfigError> {
        VitalityTable::new(self.vitality_anchors.clone())
    }

    /// Validate `cols`/`rows` (spec §7 kind 1: grid dimensions <= 0 are a
    /// synchronous configuration error). Returns the validated `(width,
    /// height)` pair on success, so callers can feed it straight to
    /// `CaGrid::new`, which re-validates the same way at construction time.
    pub fn grid_dimensions(&self) -> Result<(usize, usize), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::InvalidDimensions { width: self.cols, height: self.rows });
        }
        Ok((self.cols, self.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_conway() {
        let cfg = KernelConfig::default();
        let rule = cfg.rule_spec().unwrap();
        assert_eq!(rule.num_states, 2);
        assert_eq!(rule.neighborhood, Neighborhood::Moore);
        assert_eq!(rule.boundary, Boundary::Torus);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = KernelConfig::load(Some("/nonexistent/path/kernel.toml"));
        assert_eq!(cfg.cols, 100);
        assert_eq!(cfg.rows, 100);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let mut cfg = KernelConfig::default();
        cfg.boundary = "not-a-boundary".to_string();
        assert!(matches!(cfg.rule_spec(), Err(ConfigError::UnknownBoundary(_))));
    }

    #[test]
    fn zero_grid_dimensions_are_rejected() {
        let mut cfg = KernelConfig::default();
        cfg.cols = 0;
        assert_eq!(
            cfg.grid_dimensions(),
            Err(ConfigError::InvalidDimensions { width: 0, height: cfg.rows })
        );
    }

    #[test]
    fn nonzero_grid_dimensions_pass_through() {
        let cfg = KernelConfig::default();
        assert_eq!(cfg.grid_dimensions(), Ok((cfg.cols, cfg.rows)));
    }

    #[test]
    fn parses_toml_text() {
        let text = r#"
            cols = 20
            rows = 10
            neighborhood = "hexagonal"
            boundary = "plane"
            birth = [2]
            survive = [3, 4]
            num_states = 4
        "#;
        let cfg: KernelConfig = toml::from_str(text).unwrap();
        assert_eq!(cfg.cols, 20);
        assert_eq!(cfg.rows, 10);
        let rule = cfg.rule_spec().unwrap();
        assert_eq!(rule.neighborhood, Neighborhood::Hexagonal);
        assert_eq!(rule.num_states, 4);
    }
}
