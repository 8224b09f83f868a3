use serde::{Deserialize, Serialize};
use showdown_engine::cards::Suit;
use showdown_engine::equity::TiePolicy;
use std::fs;

pub const CONFIG_ENV: &str = "SHOWDOWN_CONFIG";
pub const OPPONENTS_ENV: &str = "SHOWDOWN_OPPONENTS";
pub const TIE_POLICY_ENV: &str = "SHOWDOWN_TIE_POLICY";
pub const TABLE_SUITS_ENV: &str = "SHOWDOWN_TABLE_SUITS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub opponents: usize,
    pub tie_policy: TiePolicy,
    pub table_suits: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub opponents: ValueSource,
    pub tie_policy: ValueSource,
    pub table_suits: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            opponents: ValueSource::Default,
            tie_policy: ValueSource::Default,
            table_suits: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            opponents: 1,
            tie_policy: TiePolicy::HalfCredit,
            table_suits: "CDHS".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolve the configuration: defaults, then the TOML file named by
/// `SHOWDOWN_CONFIG`, then `SHOWDOWN_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.opponents {
            cfg.opponents = v;
            sources.opponents = ValueSource::File;
        }
        if let Some(v) = f.tie_policy {
            cfg.tie_policy = v;
            sources.tie_policy = ValueSource::File;
        }
        if let Some(v) = f.table_suits {
            cfg.table_suits = v;
            sources.table_suits = ValueSource::File;
        }
    }

    if let Ok(opponents) = std::env::var(OPPONENTS_ENV)
        && !opponents.is_empty()
    {
        cfg.opponents = opponents
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid opponents".into()))?;
        sources.opponents = ValueSource::Env;
    }
    if let Ok(policy) = std::env::var(TIE_POLICY_ENV)
        && !policy.is_empty()
    {
        cfg.tie_policy = policy
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid tie_policy".into()))?;
        sources.tie_policy = ValueSource::Env;
    }
    if let Ok(suits) = std::env::var(TABLE_SUITS_ENV)
        && !suits.is_empty()
    {
        cfg.table_suits = suits;
        sources.table_suits = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    opponents: Option<usize>,
    #[serde(default)]
    tie_policy: Option<TiePolicy>,
    #[serde(default)]
    table_suits: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.opponents == 0 {
        return Err(ConfigError::Invalid("opponents must be >=1".into()));
    }
    parse_suits(&cfg.table_suits)
        .map_err(|e| ConfigError::Invalid(format!("table_suits {}", e)))?;
    Ok(())
}

/// Parse a suit list such as `"CH"` into distinct suits.
pub fn parse_suits(s: &str) -> Result<Vec<Suit>, String> {
    let mut suits = Vec::new();
    for ch in s.chars() {
        let suit = Suit::from_symbol(ch).ok_or_else(|| format!("has unknown suit '{}'", ch))?;
        if !suits.contains(&suit) {
            suits.push(suit);
        }
    }
    if suits.is_empty() {
        return Err("must name at least one suit".into());
    }
    Ok(suits)
}
