//! 翻訳カタログの読み込みとキー解決
//!
//! ロケールごとの `{locale}.json` を起動時に一度だけ読み込み、
//! 以降は読み取り専用のツリーとして保持する。読み込みは常に成功し、
//! 壊れたソースは空のツリーに縮退する（警告ログのみ）。

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::config::I18nConfig;

/// One locale's nested key → value mapping.
pub type TranslationTree = serde_json::Map<String, Value>;

/// Errors while loading a single locale's source file.
///
/// Diagnostic only: the loader logs these and substitutes an empty tree,
/// it never propagates them past startup.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when the translation file cannot be read
    #[error("failed to read translation file: {0}")]
    Io(#[from] std::io::Error),
    /// Error when the translation file is not valid JSON
    #[error("failed to parse translation file: {0}")]
    Parse(#[from] serde_json::Error),
    /// Error when the document root is not a JSON object
    #[error("translation file root must be a JSON object")]
    NotAnObject,
}

/// Per-locale translation trees, built once at startup and read-only
/// afterward.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    trees: HashMap<String, TranslationTree>,
}

impl Catalog {
    /// Load one tree per supported locale from `{dir}/{locale}.json`.
    ///
    /// Never fails: a missing or malformed source degrades the affected
    /// locale to an empty tree with a warning, so the catalog always has an
    /// entry for every supported locale. The directory is created if absent
    /// so a fresh deployment starts with empty catalogs instead of
    /// per-locale load errors.
    #[must_use]
    pub fn load(config: &I18nConfig) -> Self {
        if let Err(e) = std::fs::create_dir_all(&config.translations_dir) {
            tracing::warn!(
                "Failed to create translations directory {:?}: {e}",
                config.translations_dir
            );
        }

        let mut trees = HashMap::new();
        for locale in &config.supported_locales {
            let path = config.translations_dir.join(format!("{locale}.json"));
            let tree = match load_tree(&path) {
                Ok(tree) => {
                    tracing::debug!("Loaded {} translation entries for '{locale}'", tree.len());
                    tree
                }
                Err(e) => {
                    tracing::warn!("Translation file for '{locale}' unusable ({path:?}): {e}");
                    TranslationTree::new()
                }
            };
            trees.insert(locale.clone(), tree);
        }

        Self { trees }
    }

    /// Catalog built directly from in-memory trees.
    #[must_use]
    pub fn from_trees(trees: HashMap<String, TranslationTree>) -> Self {
        Self { trees }
    }

    /// Whether the catalog has an entry (possibly empty) for `locale`.
    #[must_use]
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.trees.contains_key(locale)
    }

    /// Tree for `locale`, if the locale is part of the catalog.
    #[must_use]
    pub fn tree(&self, locale: &str) -> Option<&TranslationTree> {
        self.trees.get(locale)
    }

    /// Resolve a dotted key against `locale`'s tree.
    ///
    /// Walks the tree segment by segment. A missing segment, a non-object
    /// intermediate node, or an unknown locale is a miss (`None`), never an
    /// error. String leaves are returned as-is; non-string leaves and
    /// intermediate nodes reached by a short key are rendered as their JSON
    /// text (legacy coercion, see DESIGN.md).
    #[must_use]
    pub fn resolve(&self, locale: &str, key: &str) -> Option<String> {
        let tree = self.trees.get(locale)?;

        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = tree.get(first)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }

        Some(render_value(node))
    }
}

/// String form of a resolved node. Non-string values keep their JSON text.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn load_tree(path: &Path) -> Result<TranslationTree, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    let json: Value = serde_json::from_str(&content)?;
    match json {
        Value::Object(map) => Ok(map),
        _ => Err(CatalogError::NotAnObject),
    }
}
