//! アプリケーションの i18n 設定

use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "supportedLocales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Static i18n configuration, fixed for the lifetime of the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nConfig {
    /// Locales the application ships translations for.
    ///
    /// Insertion order is the display order for listings, not the
    /// resolution priority.
    pub supported_locales: Vec<String>,

    /// Locale used when neither the session nor the browser preferences
    /// yield a match. Must be one of `supported_locales`.
    pub default_locale: String,

    /// Directory holding one `{locale}.json` file per supported locale.
    /// Created at startup if absent.
    pub translations_dir: PathBuf,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            supported_locales: vec!["en".to_string(), "zh".to_string()],
            default_locale: "en".to_string(),
            translations_dir: PathBuf::from("translations"),
        }
    }
}

impl I18nConfig {
    /// # Errors
    /// - No supported locales
    /// - Empty locale code
    /// - Default locale not in the supported set
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.supported_locales.is_empty() {
            errors.push(ValidationError::new(
                "supportedLocales",
                "At least one locale is required. Example: [\"en\", \"zh\"]",
            ));
        }

        for (index, code) in self.supported_locales.iter().enumerate() {
            if code.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("supportedLocales[{index}]"),
                    "Locale codes cannot be empty",
                ));
            }
        }

        if self.default_locale.trim().is_empty() {
            errors.push(ValidationError::new(
                "defaultLocale",
                "The default locale cannot be empty. Example: \"en\"",
            ));
        } else if !self.supported_locales.is_empty()
            && !self.supported_locales.contains(&self.default_locale)
        {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!("'{}' must be one of the supported locales", self.default_locale),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// 設定ファイルから i18n 設定を読み込む
///
/// # Returns
/// - `Ok(Some(config))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない（デフォルト設定を使う）
/// - `Err(ConfigError)`: 読み込み・パース・バリデーションエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_from_file(path: &Path) -> Result<Option<I18nConfig>, ConfigError> {
    if !path.exists() {
        tracing::debug!("i18n configuration file not found: {:?}", path);
        return Ok(None);
    }

    tracing::debug!("Loading i18n configuration from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let config: I18nConfig = serde_json::from_str(&content)?;
    config.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(Some(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn validate_valid_config() {
        let config = I18nConfig::default();

        assert_that!(config.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_config() {
        let json = r#"{"defaultLocale": "zh"}"#;

        let config: I18nConfig = serde_json::from_str(json).unwrap();

        assert_that!(config.default_locale, eq("zh"));
        assert_that!(config.supported_locales, elements_are![eq("en"), eq("zh")]);
        assert_that!(config.translations_dir.to_string_lossy(), eq("translations"));
    }

    #[rstest]
    fn deserialize_empty_config() {
        let json = "{}";

        let config: I18nConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config, I18nConfig::default());
    }

    #[rstest]
    fn validate_invalid_supported_locales_empty() {
        let config = I18nConfig { supported_locales: vec![], ..I18nConfig::default() };

        let result = config.validate();

        assert_that!(
            result,
            err(contains(all![
                field!(ValidationError.field_path, eq("supportedLocales")),
                field!(ValidationError.message, contains_substring("At least one locale"))
            ]))
        );
    }

    #[rstest]
    fn validate_invalid_empty_locale_code() {
        let config = I18nConfig {
            supported_locales: vec!["en".to_string(), String::new()],
            ..I18nConfig::default()
        };

        let result = config.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("supportedLocales[1]")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_default_locale_not_supported() {
        let config = I18nConfig { default_locale: "fr".to_string(), ..I18nConfig::default() };

        let result = config.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("defaultLocale")),
                field!(ValidationError.message, contains_substring("supported locales"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let config = I18nConfig {
            supported_locales: vec![],
            default_locale: String::new(),
            ..I18nConfig::default()
        };

        let errors = config.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let message = format!("{config_error}");
        assert_that!(message, contains_substring("Configuration validation failed"));
        assert_that!(message, contains_substring("1. supportedLocales"));
        assert_that!(message, contains_substring("2. defaultLocale"));
    }

    /// `load_from_file`: 設定ファイルが存在する場合
    #[rstest]
    fn test_load_from_file_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("i18n.json");
        fs::write(&path, r#"{"defaultLocale": "zh"}"#).unwrap();

        let result = load_from_file(&path);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().default_locale, "zh");
    }

    /// `load_from_file`: 設定ファイルが存在しない場合
    #[rstest]
    fn test_load_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_file(&temp_dir.path().join("i18n.json"));

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    /// `load_from_file`: JSON パースエラー
    #[rstest]
    fn test_load_from_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("i18n.json");
        fs::write(&path, "invalid json").unwrap();

        let result = load_from_file(&path);

        assert!(result.is_err());
    }

    /// `load_from_file`: バリデーションエラー
    #[rstest]
    fn test_load_from_file_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("i18n.json");
        fs::write(&path, r#"{"defaultLocale": "fr"}"#).unwrap();

        let result = load_from_file(&path);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
    }
}
