//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup. Interned strings are leaked and never
//! deallocated, so lookups can hand out `&'static str` without lifetime
//! plumbing; an interner is expected to live for the whole pipeline that
//! created it.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::Name;

/// Interner storage behind the lock.
struct Storage {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

/// String interner for identifiers.
///
/// # Thread Safety
/// Uses an `RwLock` for concurrent read/write access. Wrap in
/// [`SharedInterner`] to share across threads.
pub struct StringInterner {
    inner: RwLock<Storage>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned at index 0,
    /// so [`Name::EMPTY`] is always valid.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        StringInterner {
            inner: RwLock::new(Storage {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Intern a string, returning its [`Name`].
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32` capacity (over 4 billion
    /// distinct strings).
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: already interned.
        {
            let guard = self.inner.read();
            if let Some(&idx) = guard.map.get(s) {
                return Name::from_raw(idx);
            }
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring the write lock.
        if let Some(&idx) = guard.map.get(s) {
            return Name::from_raw(idx);
        }

        // Leak the string to get a 'static lifetime.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let idx = u32::try_from(guard.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded u32 capacity"));
        guard.strings.push(leaked);
        guard.map.insert(leaked, idx);
        Name::from_raw(idx)
    }

    /// Look up the string for a [`Name`].
    ///
    /// Interned strings are leaked, so the returned reference outlives the
    /// read guard this takes internally.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.inner.read();
        guard.strings[name.index()]
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Check if the interner holds only the pre-interned empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned string names.
///
/// This trait exists to avoid tight coupling: downstream crates accept any
/// `StringLookup` implementor instead of depending on `StringInterner`
/// directly.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Shared interner for thread-safe interning across pipeline phases.
///
/// Newtype over `Arc<StringInterner>`, so all thread-safe sharing goes
/// through one type.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl StringLookup for SharedInterner {
    fn lookup(&self, name: Name) -> &str {
        self.0.lookup(name)
    }
}
