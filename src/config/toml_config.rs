use crate::domain::model::MortgageDefaults;
use crate::domain::ports::DefaultsProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    pub display: Option<DisplayConfig>,
}

/// 未填寫的欄位沿用內建預設值 (20% / 20 年 / 28%)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub down_payment_percent: Option<f64>,
    pub term_years: Option<f64>,
    pub annual_rate_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            defaults = ?config.mortgage_defaults(),
            "loaded mortgage configuration"
        );
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MORTGAGE_RATE})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 顯示金額時使用的貨幣符號
    pub fn currency(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.currency.as_deref())
            .unwrap_or("")
    }
}

impl DefaultsProvider for TomlConfig {
    fn mortgage_defaults(&self) -> MortgageDefaults {
        let builtin = MortgageDefaults::default();
        MortgageDefaults {
            down_payment_percent: self
                .defaults
                .down_payment_percent
                .unwrap_or(builtin.down_payment_percent),
            term_years: self.defaults.term_years.unwrap_or(builtin.term_years),
            annual_rate_percent: self
                .defaults
                .annual_rate_percent
                .unwrap_or(builtin.annual_rate_percent),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let defaults = self.mortgage_defaults();
        crate::utils::validation::validate_range(
            "defaults.down_payment_percent",
            defaults.down_payment_percent,
            0.0,
            100.0,
        )?;
        crate::utils::validation::validate_positive("defaults.term_years", defaults.term_years)?;
        crate::utils::validation::validate_non_negative(
            "defaults.annual_rate_percent",
            defaults.annual_rate_percent,
        )?;
        Ok(())
    }
}
