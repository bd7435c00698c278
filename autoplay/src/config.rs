use serde::{Deserialize, Serialize};
use snake_common::config::{
    check_range, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

pub const CONFIG_FILE: &str = "snake_autoplay_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub grid: GridConfig,
    pub session: SessionConfig,
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.grid.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Validate for GridConfig {
    fn validate(&self) -> Result<(), String> {
        check_range("rows", self.rows, 4, 200)?;
        check_range("columns", self.columns, 4, 200)?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SessionConfig {
    pub games: u32,
    pub tick_interval_ms: u64,
    pub max_ticks: u64,
    /// Seed of the first game; later games use the following seeds.
    pub seed: Option<u64>,
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        check_range("games", self.games, 1, 100_000)?;
        check_range("tick_interval_ms", self.tick_interval_ms, 0, 5000)?;
        if self.max_ticks == 0 {
            return Err("max_ticks must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    pub prefix: Option<String>,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                rows: 20,
                columns: 20,
            },
            session: SessionConfig {
                games: 1,
                tick_interval_ms: 0,
                max_ticks: 100_000,
                seed: None,
            },
            log: LogConfig::default(),
        }
    }
}
