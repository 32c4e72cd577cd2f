//! ホストフレームワークのセッションストアとの境界
//!
//! コアはセッションに対して単一の予約スロットしか読み書きしない。
//! リクエスト外ではセッション自体が存在しないため、不在は
//! エラーではなく「オーバーライドなし」として扱われる。

use std::collections::HashMap;

/// Reserved session slot holding the per-session locale override.
pub const LOCALE_SLOT: &str = "language";

/// Mapping-like per-requester store owned by the host framework.
///
/// Implementations wrap the host's session object. The host must guarantee
/// the store is only visible to requests belonging to that session; the
/// core performs no cross-request synchronization.
pub trait SessionStore {
    /// Value stored in `slot`, if any.
    fn get(&self, slot: &str) -> Option<String>;

    /// Store `value` into `slot`, replacing any previous value.
    fn insert(&mut self, slot: &str, value: &str);

    /// Whether `slot` currently holds a value.
    fn contains(&self, slot: &str) -> bool {
        self.get(slot).is_some()
    }
}

/// In-memory [`SessionStore`] for tests and simple adapters.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, slot: &str) -> Option<String> {
        self.values.get(slot).cloned()
    }

    fn insert(&mut self, slot: &str, value: &str) {
        self.values.insert(slot.to_string(), value.to_string());
    }
}
