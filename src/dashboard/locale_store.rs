//! Active-locale state with persistence and change notification.
//!
//! # Error Philosophy
//!
//! Storage failures never block a locale switch. Load errors fall back to the
//! default locale; save errors are logged at warn and the in-memory value
//! stays switched.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, unbounded};
use parking_lot::{Mutex, RwLock};

use crate::core::errors::{LqoError, Result};
use crate::i18n::{Locale, TranslationTable};

/// Storage key holding the locale code.
pub const LOCALE_KEY: &str = "locale";

// ──────────────────── key-value storage ────────────────────

/// Minimal string key-value persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.lock().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk, rewritten atomically on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(LqoError::io(&self.path, err)),
        };
        serde_json::from_str(&raw).map_err(|err| LqoError::Serialization {
            context: "state file",
            details: err.to_string(),
        })
    }

    /// Atomic save: serialize → temp file → fsync → rename.
    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| LqoError::io(parent, err))?;
        }

        let json = serde_json::to_string_pretty(entries)?;

        // Same directory keeps the rename on one filesystem.
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path).map_err(|err| LqoError::io(&tmp_path, err))?;
            file.write_all(json.as_bytes())
                .and_then(|()| file.sync_all())
                .map_err(|err| LqoError::io(&tmp_path, err))?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|err| LqoError::io(&self.path, err))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_all().unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "state file unreadable, rewriting");
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }
}

// ──────────────────── locale store ────────────────────

/// Shared active-locale state.
pub struct LocaleStore {
    current: RwLock<Locale>,
    storage: Box<dyn KeyValueStore>,
    subscribers: Mutex<Vec<Sender<Locale>>>,
    // Serializes `set_locale` end to end.
    set_lock: Mutex<()>,
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("current", &*self.current.read())
            .field("subscribers", &self.subscribers.lock().len())
            .finish_non_exhaustive()
    }
}

impl LocaleStore {
    /// Restore the persisted locale. Absent, unsupported, or unreadable values
    /// yield the default without error.
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let initial = match storage.get(LOCALE_KEY) {
            Ok(Some(code)) => Locale::from_code(&code).unwrap_or_else(|| {
                tracing::debug!(%code, "discarding unsupported persisted locale");
                Locale::default()
            }),
            Ok(None) => Locale::default(),
            Err(err) => {
                tracing::warn!(error = %err, "locale storage unreadable, using default");
                Locale::default()
            }
        };

        Self {
            current: RwLock::new(initial),
            storage,
            subscribers: Mutex::new(Vec::new()),
            set_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn current(&self) -> Locale {
        *self.current.read()
    }

    #[must_use]
    pub fn translations(&self) -> &'static TranslationTable {
        self.current().table()
    }

    /// Switch locale, notify subscribers, then persist.
    ///
    /// Returns whether the value reached storage. The in-memory switch happens
    /// either way. Concurrent calls are applied one at a time.
    pub fn set_locale(&self, locale: Locale) -> bool {
        let _serial = self.set_lock.lock();
        *self.current.write() = locale;

        // Drop subscribers whose receiver is gone.
        self.subscribers
            .lock()
            .retain(|tx| tx.send(locale).is_ok());

        match self.storage.set(LOCALE_KEY, locale.code()) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(locale = %locale, error = %err, "failed to persist locale");
                false
            }
        }
    }

    /// Channel receiving every subsequent locale change.
    pub fn subscribe(&self) -> Receiver<Locale> {
        let (tx, rx) = unbounded();
        self.subscribers.lock().push(tx);
        rx
    }
}

// ──────────────────── view context ────────────────────

/// Root-scoped context handed to every view.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    locale: Option<Arc<LocaleStore>>,
}

impl ViewContext {
    #[must_use]
    pub fn new(locale: Arc<LocaleStore>) -> Self {
        Self {
            locale: Some(locale),
        }
    }

    /// Context with no provisioned state. Every accessor fails.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn locale_store(&self) -> Result<&Arc<LocaleStore>> {
        self.locale
            .as_ref()
            .ok_or(LqoError::ContextMissing {
                what: "locale store",
            })
    }

    pub fn translations(&self) -> Result<&'static TranslationTable> {
        Ok(self.locale_store()?.translations())
    }
}
