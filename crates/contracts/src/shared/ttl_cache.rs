//! Timestamped cache entry for payloads persisted in browser storage
//!
//! Stale entries are still handed out so the page can render them while a
//! refetch runs. Writers simply overwrite; the last write wins.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedEntry<T> {
    pub stored_at: DateTime<Utc>,
    pub value: T,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<T> {
    Fresh(T),
    Stale(T),
    Missing,
}

impl<T> CacheLookup<T> {
    pub fn value(self) -> Option<T> {
        match self {
            CacheLookup::Fresh(v) | CacheLookup::Stale(v) => Some(v),
            CacheLookup::Missing => None,
        }
    }

    pub fn needs_refresh(&self) -> bool {
        !matches!(self, CacheLookup::Fresh(_))
    }
}

impl<T> CachedEntry<T> {
    pub fn new(value: T, stored_at: DateTime<Utc>) -> Self {
        Self { stored_at, value }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.stored_at) < ttl
    }

    pub fn lookup(self, now: DateTime<Utc>, ttl: Duration) -> CacheLookup<T> {
        if self.is_fresh(now, ttl) {
            CacheLookup::Fresh(self.value)
        } else {
            CacheLookup::Stale(self.value)
        }
    }
}

impl<T: for<'de> Deserialize<'de>> CachedEntry<T> {
    /// Decodes a stored entry; unreadable or missing text is `Missing`
    pub fn restore(stored: Option<&str>, now: DateTime<Utc>, ttl: Duration) -> CacheLookup<T> {
        match stored.and_then(|text| serde_json::from_str::<CachedEntry<T>>(text).ok()) {
            Some(entry) => entry.lookup(now, ttl),
            None => CacheLookup::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_760_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_fresh_then_stale() {
        let ttl = Duration::seconds(300);
        let entry = CachedEntry::new(42u32, at(0));
        assert_eq!(entry.clone().lookup(at(299), ttl), CacheLookup::Fresh(42));
        assert_eq!(entry.lookup(at(300), ttl), CacheLookup::Stale(42));
    }

    #[test]
    fn test_restore_from_storage_text() {
        let ttl = Duration::seconds(60);
        let text = serde_json::to_string(&CachedEntry::new(vec!["FANS".to_string()], at(0))).unwrap();

        let hit = CachedEntry::<Vec<String>>::restore(Some(&text), at(10), ttl);
        assert!(!hit.needs_refresh());
        assert_eq!(hit.value(), Some(vec!["FANS".to_string()]));

        let stale = CachedEntry::<Vec<String>>::restore(Some(&text), at(61), ttl);
        assert!(stale.needs_refresh());

        assert_eq!(CachedEntry::<u32>::restore(Some("{broken"), at(0), ttl), CacheLookup::Missing);
        assert_eq!(CachedEntry::<u32>::restore(None, at(0), ttl), CacheLookup::Missing);
    }
}
