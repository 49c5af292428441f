//! Configuration management for calboard.
//!
//! Settings live in `config.json` inside the platform data directory
//! resolved by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\calboard\calboard\config.json`
//! - **macOS**: `~/Library/Application Support/calboard/calboard/config.json`
//! - **Linux**: `~/.local/share/calboard/calboard/config.json`
//!
//! Every module is optional. A missing file, or a missing module inside it,
//! means the built-in defaults apply.
//!
//! ```rust,no_run
//! use calboard::libs::config::Config;
//!
//! let config = Config::read()?;
//! let holidays = config.holidays_or_default();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::task::LabelColor;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_HOLIDAYS_API_URL: &str = "https://date.nager.at/api/v3/NextPublicHolidaysWorldwide";

/// A configurable module as listed by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Public holiday lookup settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HolidaysConfig {
    /// When false the grid is rendered without holidays and no request is made.
    pub enabled: bool,
    /// Endpoint returning a JSON array of `{date, name, ...}` entries.
    pub api_url: String,
}

/// Board behaviour settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct BoardConfig {
    /// Color given to labels created without an explicit color.
    #[serde(default)]
    pub default_label_color: LabelColor,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holidays: Option<HolidaysConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<BoardConfig>,
}

impl Default for HolidaysConfig {
    fn default() -> Self {
        HolidaysConfig {
            enabled: true,
            api_url: DEFAULT_HOLIDAYS_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn holidays_or_default(&self) -> HolidaysConfig {
        self.holidays.clone().unwrap_or_default()
    }

    pub fn board_or_default(&self) -> BoardConfig {
        self.board.clone().unwrap_or_default()
    }

    fn modules() -> Vec<ConfigModule> {
        vec![
            ConfigModule {
                key: "holidays".to_string(),
                name: "Holidays".to_string(),
            },
            ConfigModule {
                key: "board".to_string(),
                name: "Board".to_string(),
            },
        ]
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = Self::modules();
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "holidays" => {
                    let default = config.holidays_or_default();
                    msg_print!(Message::ConfigModuleHolidays);
                    config.holidays = Some(HolidaysConfig {
                        enabled: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptHolidaysEnabled.to_string())
                            .default(default.enabled)
                            .interact()?,
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptHolidaysApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                "board" => {
                    let default = config.board_or_default();
                    msg_print!(Message::ConfigModuleBoard);
                    let colors: Vec<&str> = LabelColor::ALL.iter().map(LabelColor::name).collect();
                    let current = LabelColor::ALL.iter().position(|color| *color == default.default_label_color).unwrap_or(0);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultLabelColor.to_string())
                        .items(&colors)
                        .default(current)
                        .interact()?;
                    config.board = Some(BoardConfig {
                        default_label_color: LabelColor::ALL[choice],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
