//! 翻訳サービス本体とリクエスト毎のコンテキスト

use std::fmt;

use crate::catalog::Catalog;
use crate::config::I18nConfig;
use crate::interpolate::interpolate;
use crate::locale::{
    LanguagePreferences,
    LocaleDescriptor,
    LocaleSource,
    ResolvedLocale,
    SHIPPED_LOCALES,
};
use crate::session::{
    LOCALE_SLOT,
    SessionStore,
};

/// Per-request inputs for locale resolution.
///
/// Built by the integration adapter at the start of each request and
/// discarded at the end. The session borrow is optional: outside a request
/// there is no session, and every operation treats that as an ordinary
/// non-match rather than an error.
pub struct RequestContext<'s> {
    session: Option<&'s mut dyn SessionStore>,
    preferences: LanguagePreferences,
}

impl fmt::Debug for RequestContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("session", &self.session.is_some())
            .field("preferences", &self.preferences)
            .finish()
    }
}

impl<'s> RequestContext<'s> {
    /// Context for a request, with an optional session and the normalized
    /// browser preferences produced by the adapter.
    #[must_use]
    pub fn new(
        session: Option<&'s mut dyn SessionStore>,
        preferences: LanguagePreferences,
    ) -> Self {
        Self { session, preferences }
    }

    /// Context with no session and no declared preferences, for use outside
    /// any request (e.g. background jobs). Everything resolves to the
    /// default locale.
    #[must_use]
    pub fn detached() -> RequestContext<'static> {
        RequestContext { session: None, preferences: LanguagePreferences::default() }
    }

    /// Declared browser preferences for this request.
    #[must_use]
    pub fn preferences(&self) -> &LanguagePreferences {
        &self.preferences
    }
}

/// The i18n helper embedded in the host application.
///
/// Owns the configuration and the read-only translation catalog. Built once
/// at startup; all per-request state lives in [`RequestContext`], so a
/// shared instance is safe for concurrently handled requests.
#[derive(Debug)]
pub struct TranslationService {
    config: I18nConfig,
    catalog: Catalog,
}

impl TranslationService {
    /// Build the service and load all catalogs.
    ///
    /// Loading is total: per-locale source failures degrade to empty trees
    /// and are reported through the log channel only.
    #[must_use]
    pub fn new(config: I18nConfig) -> Self {
        let catalog = Catalog::load(&config);
        Self { config, catalog }
    }

    /// Service over an already-built catalog (bypasses the filesystem).
    #[must_use]
    pub fn with_catalog(config: I18nConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    #[must_use]
    pub const fn config(&self) -> &I18nConfig {
        &self.config
    }

    /// The fixed list of locales shipped with the application, for language
    /// pickers. Independent of the configured catalog (see DESIGN.md).
    #[must_use]
    pub const fn available_locales(&self) -> &'static [LocaleDescriptor] {
        SHIPPED_LOCALES
    }

    /// Store a locale override in the request's session.
    ///
    /// Unsupported codes are ignored. Without an attached session the call
    /// does nothing (e.g. invoked outside a request).
    pub fn set_locale(&self, ctx: &mut RequestContext<'_>, code: &str) {
        if !self.is_supported(code) {
            tracing::debug!("Ignoring unsupported locale override: {code}");
            return;
        }

        match &mut ctx.session {
            Some(session) => session.insert(LOCALE_SLOT, code),
            None => {
                tracing::debug!("No session attached, locale override '{code}' not persisted");
            }
        }
    }

    /// Resolve the active locale for this request. First match wins:
    ///
    /// 1. The session's locale slot, if set — returned as-is, without
    ///    re-validation against the supported set (legacy pass-through).
    /// 2. The first browser preference whose primary subtag is a supported
    ///    locale.
    /// 3. The configured default locale.
    #[must_use]
    pub fn resolve_locale(&self, ctx: &RequestContext<'_>) -> ResolvedLocale {
        if let Some(session) = &ctx.session
            && let Some(code) = session.get(LOCALE_SLOT)
        {
            return ResolvedLocale { code, source: LocaleSource::SessionOverride };
        }

        if let Some(code) = ctx.preferences.first_supported(&self.config.supported_locales) {
            return ResolvedLocale { code, source: LocaleSource::BrowserPreference };
        }

        ResolvedLocale { code: self.config.default_locale.clone(), source: LocaleSource::Default }
    }

    /// Code-only form of [`Self::resolve_locale`].
    #[must_use]
    pub fn active_locale(&self, ctx: &RequestContext<'_>) -> String {
        self.resolve_locale(ctx).code
    }

    /// Translate `key` for the request's active locale.
    ///
    /// Fallback chain: active locale → default locale → the literal key.
    /// `{name}` placeholders are substituted from `args`. Total: always
    /// returns a displayable string, never an error.
    #[must_use]
    pub fn translate(&self, ctx: &RequestContext<'_>, key: &str, args: &[(&str, &str)]) -> String {
        let locale = self.resolve_locale(ctx);

        let text = self
            .catalog
            .resolve(&locale.code, key)
            .or_else(|| {
                if locale.code == self.config.default_locale {
                    None
                } else {
                    self.catalog.resolve(&self.config.default_locale, key)
                }
            })
            .unwrap_or_else(|| {
                tracing::debug!(
                    "No translation for '{key}' in '{}' or '{}'",
                    locale.code,
                    self.config.default_locale
                );
                key.to_string()
            });

        interpolate(&text, args)
    }

    fn is_supported(&self, code: &str) -> bool {
        self.config.supported_locales.iter().any(|c| c == code)
    }
}
