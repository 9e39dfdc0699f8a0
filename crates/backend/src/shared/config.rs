use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::PathBuf;

use crate::shared::sheets::a1;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sheets: SheetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory with the built dashboard, served as the router fallback
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: "dist".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub config_sheet_name: String,
    /// Date/range columns inside the config sheet
    pub config_range: String,
    /// Sheet used for config ranges that carry no sheet name
    pub kpi_sheet_name: String,
    pub input_plan_range: String,
    pub input_actual_range: String,
    pub api_base_url: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            config_sheet_name: "CONFIG_KPI".to_string(),
            config_range: "A:B".to_string(),
            kpi_sheet_name: "KPI".to_string(),
            input_plan_range: "KPI!B2:G6".to_string(),
            input_actual_range: "KPI!B8:G12".to_string(),
            api_base_url: "https://sheets.googleapis.com".to_string(),
        }
    }
}

impl SheetsConfig {
    /// Fully qualified range of the date → range table
    pub fn config_table_range(&self) -> String {
        a1::qualify(&self.config_range, &self.config_sheet_name)
    }

    /// Qualify a range read from the config table with the KPI sheet name
    pub fn kpi_range(&self, range: &str) -> String {
        a1::qualify(range, &self.kpi_sheet_name)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[sheets]
spreadsheet_id = ""
config_sheet_name = "CONFIG_KPI"
config_range = "A:B"
kpi_sheet_name = "KPI"
input_plan_range = "KPI!B2:G6"
input_actual_range = "KPI!B8:G12"
api_base_url = "https://sheets.googleapis.com"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. `KPI_CONFIG_PATH`
/// 2. Next to the executable (for production)
/// 3. Current working directory
/// 4. Falls back to embedded default config
///
/// Environment overrides are applied on top of whichever file was used.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match find_config_file() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str::<Config>(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str::<Config>(DEFAULT_CONFIG)?
        }
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(explicit) = std::env::var("KPI_CONFIG_PATH") {
        candidates.push(PathBuf::from(explicit));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }
    candidates.push(PathBuf::from("config.toml"));

    candidates.into_iter().find(|path| {
        let exists = path.exists();
        if !exists {
            tracing::debug!("config.toml not found at: {}", path.display());
        }
        exists
    })
}

/// Apply environment overrides; several aliases map to the same setting
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let first = |names: &[&str]| {
        names
            .iter()
            .filter_map(|name| lookup(*name))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
    };

    if let Some(id) = first(&["GOOGLE_SHEET_ID", "GOOGLE_SPREADSHEET_ID"]) {
        config.sheets.spreadsheet_id = id;
    }
    if let Some(name) = first(&["CONFIG_KPI_SHEET_NAME"]) {
        config.sheets.config_sheet_name = name;
    }
    if let Some(name) = first(&["KPI_SHEET_NAME"]) {
        config.sheets.kpi_sheet_name = name;
    }
    if let Some(port) = first(&["PORT"]) {
        match port.parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
        }
    }
}

/// Install the loaded configuration for the lifetime of the process.
/// Later calls are ignored.
pub fn install(config: Config) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already installed, ignoring reload");
    }
}

/// Current configuration (embedded defaults if nothing was installed)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
