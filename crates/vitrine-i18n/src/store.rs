#![forbid(unsafe_code)]

//! Process-wide observable language state.
//!
//! # Design
//!
//! One [`LanguageStore`] lives at the application root; clones of the
//! handle are passed to whatever renders text or hosts a
//! language-switcher control. [`set_language`](LanguageStore::set_language)
//! is the only mutator: it normalizes its input (any input is accepted,
//! never rejected), assigns, and synchronously notifies every
//! subscriber. Writes are atomic single-value assignments on a
//! single-threaded event loop, so last-write-wins needs no locking.

use tracing::info;
use vitrine_core::{Subscription, Value};

use crate::locale::Lang;

/// Shared handle to the active display language.
///
/// Cloning shares the same underlying state and subscriber list.
#[derive(Debug, Clone)]
pub struct LanguageStore {
    lang: Value<Lang>,
}

impl LanguageStore {
    /// Store starting in English.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial(Lang::En)
    }

    /// Store starting in the given language.
    #[must_use]
    pub fn with_initial(lang: Lang) -> Self {
        Self {
            lang: Value::new(lang),
        }
    }

    /// The current display language.
    #[must_use]
    pub fn current(&self) -> Lang {
        self.lang.get()
    }

    /// Switch language from an arbitrary tag. The tag is normalized,
    /// never rejected; subscribers are notified synchronously when the
    /// normalized value differs from the current one.
    pub fn set_language(&self, tag: &str) {
        let lang = Lang::normalize(tag);
        if lang != self.lang.get() {
            info!(tag, lang = %lang, "language changed");
        }
        self.lang.set(lang);
    }

    /// Subscribe to language changes. Dropping the guard unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&Lang) + 'static) -> Subscription {
        self.lang.subscribe(callback)
    }

    /// Version counter for dirty-checking; bumps once per actual change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.lang.version()
    }
}

impl Default for LanguageStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
