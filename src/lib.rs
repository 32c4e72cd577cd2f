//! webapp-i18n
//!
//! Web アプリケーション組み込み用の i18n ヘルパー
//!
//! - 起動時にロケール別の JSON 翻訳カタログを読み込む
//! - リクエスト毎にアクティブロケールを解決する
//!   （セッションのオーバーライド → ブラウザの言語設定 → デフォルト）
//! - ドット区切りキーを解決し、`{name}` 形式のパラメータを補間する
//!
//! 翻訳パスは常に表示可能な文字列を返す。失敗情報はログチャンネルにのみ
//! 流れ、呼び出し側にエラーが伝播することはない。
//!
//! # Quick start
//!
//! ```rust,ignore
//! use webapp_i18n::locale::LanguagePreferences;
//! use webapp_i18n::{I18nConfig, RequestContext, TranslationService};
//!
//! // At startup: load `translations/{en,zh}.json`.
//! let service = TranslationService::new(I18nConfig::default());
//!
//! // Per request: the adapter attaches the session and the parsed
//! // Accept-Language header.
//! let prefs = LanguagePreferences::parse("zh-CN,zh;q=0.9,en;q=0.8");
//! let mut ctx = RequestContext::new(Some(&mut session), prefs);
//!
//! let text = service.translate(&ctx, "navigation.dashboard", &[]);
//! ```

pub mod catalog;
pub mod config;
pub mod interpolate;
pub mod locale;
pub mod service;
pub mod session;

// よく使う型を再エクスポート
pub use config::I18nConfig;
pub use service::{
    RequestContext,
    TranslationService,
};
