use crate::config::engine::EngineConfig;
use crate::core::engine::GestureEngine;
use crate::domain::model::TemplateId;
use crate::utils::error::{GestureError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 手勢設定檔：引擎參數 + 具名的手勢範本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub gestures: Vec<GestureDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureDefinition {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GestureError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GestureError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GESTURE_THRESHOLD})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GestureError::ConfigError {
            message: format!("env var pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        self.engine.validate()?;

        if self.gestures.is_empty() {
            return Err(GestureError::MissingConfigError {
                field: "gestures".to_string(),
            });
        }

        for (i, gesture) in self.gestures.iter().enumerate() {
            validation::validate_non_empty_string(&format!("gestures[{}].label", i), &gesture.label)?;
            if gesture.points.is_empty() {
                return Err(GestureError::ConfigValidationError {
                    field: format!("gestures[{}].points", i),
                    message: format!("gesture '{}' has no points", gesture.label),
                });
            }
            for [x, y] in &gesture.points {
                validation::validate_finite_point(*x, *y)?;
            }
        }

        validation::validate_unique_labels(
            "gestures.label",
            self.gestures.iter().map(|g| g.label.as_str()),
        )?;

        Ok(())
    }

    /// 取得手勢標籤（依定義順序）
    pub fn labels(&self) -> Vec<&str> {
        self.gestures.iter().map(|g| g.label.as_str()).collect()
    }

    /// 建立引擎並註冊所有手勢，回傳 id → 標籤的對照表
    pub fn build_engine(&self) -> Result<(GestureEngine, HashMap<TemplateId, String>)> {
        self.validate_config()?;

        let mut engine = GestureEngine::new(self.engine)?;
        let mut labels = HashMap::with_capacity(self.gestures.len());
        for gesture in &self.gestures {
            let id = engine.define(gesture.points.clone())?;
            labels.insert(id, gesture.label.clone());
        }

        tracing::info!("📐 Loaded {} gesture templates", labels.len());
        Ok((engine, labels))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
