use crate::error::{MazeError, Result};
use crate::grids::wall_grid::DEFAULT_DIMS;
use std::env;

pub const COLUMNS_VAR: &str = "MAZE_COLUMNS";
pub const ROWS_VAR: &str = "MAZE_ROWS";
pub const SEED_VAR: &str = "MAZE_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub columns: usize,
    pub rows: usize,
    /// fixed seed for reproducible mazes, entropy when unset
    pub seed: Option<u64>,
}

impl MazeConfig {
    pub fn new() -> Self {
        Self::with_dims(DEFAULT_DIMS.0, DEFAULT_DIMS.1)
    }

    pub fn with_dims(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reads `MAZE_COLUMNS`, `MAZE_ROWS` and `MAZE_SEED`, falling back to the
    /// defaults for variables that are not set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(columns) = lookup(COLUMNS_VAR) {
            config.columns = parse_var(COLUMNS_VAR, &columns)?;
        }
        if let Some(rows) = lookup(ROWS_VAR) {
            config.rows = parse_var(ROWS_VAR, &rows)?;
        }
        if let Some(seed) = lookup(SEED_VAR) {
            config.seed = Some(parse_var(SEED_VAR, &seed)?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(MazeError::Config(format!(
                "columns and rows must be positive, got {}x{}",
                self.columns, self.rows
            )));
        }

        Ok(())
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| MazeError::Config(format!("{}={:?} is not a valid number", key, value)))
}

#[cfg(test)]
mod test_config {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_seven_by_ten() {
        let config = MazeConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, MazeConfig::with_dims(7, 10));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn reads_overrides() {
        let config = MazeConfig::from_lookup(lookup_in(&[
            (COLUMNS_VAR, "12"),
            (ROWS_VAR, " 4 "),
            (SEED_VAR, "99"),
        ]))
        .unwrap();

        assert_eq!(config, MazeConfig::with_dims(12, 4).with_seed(99));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            MazeConfig::from_lookup(lookup_in(&[(COLUMNS_VAR, "0")])),
            Err(MazeError::Config(_))
        ));
        assert!(matches!(
            MazeConfig::from_lookup(lookup_in(&[(ROWS_VAR, "-3")])),
            Err(MazeError::Config(_))
        ));
        assert!(matches!(
            MazeConfig::from_lookup(lookup_in(&[(SEED_VAR, "abc")])),
            Err(MazeError::Config(_))
        ));
    }
}
