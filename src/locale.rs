//! ロケールコードの正規化と解決結果の型
//!
//! ブラウザの言語設定を正規化した優先順リストとして扱い、
//! サポート対象ロケールとの照合を行う。

use serde::Serialize;

/// A locale shipped with the application, as listed in language pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleDescriptor {
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
}

/// Locales shipped with the application.
///
/// Static by design: the picker shows exactly the shipped locales,
/// independent of the configured catalog (see DESIGN.md).
pub const SHIPPED_LOCALES: &[LocaleDescriptor] = &[
    LocaleDescriptor { code: "en", name: "English", native: "English" },
    LocaleDescriptor { code: "zh", name: "Chinese (Simplified)", native: "简体中文" },
];

/// Where the active locale for a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    /// Explicit override stored in the session slot.
    SessionOverride,
    /// Matched against the browser's declared language preferences.
    BrowserPreference,
    /// Neither source matched; the configured default applies.
    Default,
}

/// Result of per-request locale resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub code: String,
    pub source: LocaleSource,
}

/// Extract the primary subtag of a locale tag (lowercased).
///
/// # Examples
/// ```
/// use webapp_i18n::locale::primary_subtag;
///
/// assert_eq!(primary_subtag("zh-CN"), "zh");
/// assert_eq!(primary_subtag("en_US"), "en");
/// assert_eq!(primary_subtag("EN"), "en");
/// ```
#[must_use]
pub fn primary_subtag(tag: &str) -> String {
    let lowered = tag.trim().to_lowercase();
    lowered.split(['-', '_']).next().unwrap_or_default().to_string()
}

/// Ordered browser language preferences, normalized by the integration
/// adapter before they reach the core.
///
/// The core only ever sees this one shape: an ordered list of locale tags,
/// highest priority first. Quality values are not honored; first-listed
/// order is the priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagePreferences {
    tags: Vec<String>,
}

impl LanguagePreferences {
    /// Preference list from already-normalized tags, highest priority first.
    #[must_use]
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    /// Parse an `Accept-Language` style header value.
    ///
    /// Entries are split on `,`, quality values (`;q=...`) are stripped and
    /// ignored, and empty or wildcard (`*`) entries are dropped.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let tags = header
            .split(',')
            .filter_map(|entry| entry.split(';').next())
            .map(str::trim)
            .filter(|tag| !tag.is_empty() && *tag != "*")
            .map(ToString::to_string)
            .collect();
        Self { tags }
    }

    /// Declared tags in priority order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// First preference whose primary subtag is a supported locale.
    ///
    /// Returns the supported code (e.g. `"zh"` for a declared `"zh-CN"`),
    /// or `None` when nothing matches.
    #[must_use]
    pub fn first_supported(&self, supported: &[String]) -> Option<String> {
        self.tags.iter().find_map(|tag| {
            let primary = primary_subtag(tag);
            supported.iter().find(|code| code.eq_ignore_ascii_case(&primary)).cloned()
        })
    }
}
