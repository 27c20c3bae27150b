// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Prefix storage for generic types.
//!
//! A `static` declared inside a generic `impl` is shared by every
//! instantiation of the type, so a generic type's prefix holder cannot use a
//! plain `OnceLock`. [`PrefixSlots`] keeps one prefix per instantiation,
//! keyed by [`core::any::type_name`]. Lifetimes are erased from type names,
//! so `Slot<'a, u32>` and `Slot<'b, u32>` share a slot.
//!
//! Stored prefixes are leaked once per instantiation to hand out
//! `&'static str`.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError}
};

/// Per-instantiation prefix cache.
///
/// # Example
///
/// ```rust
/// use consolable_core::PrefixSlots;
///
/// static SLOTS: PrefixSlots = PrefixSlots::new();
///
/// let a = SLOTS.get_or_init("Tagged<u8>", || Some("[u8]".to_string()));
/// let b = SLOTS.get_or_init("Tagged<u16>", || None);
/// assert_eq!(a, Some("[u8]"));
/// assert_eq!(b, None);
/// ```
#[derive(Debug, Default)]
pub struct PrefixSlots {
    slots: Mutex<BTreeMap<&'static str, Option<&'static str>>>
}

impl PrefixSlots {
    /// Create an empty cache, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            slots: Mutex::new(BTreeMap::new())
        }
    }

    /// Prefix stored under `key`, running `init` on first access.
    ///
    /// `init` runs without the lock held, so it may log through the same
    /// type. If two threads race on the first access, the first stored value
    /// wins.
    pub fn get_or_init(
        &self,
        key: &'static str,
        init: impl FnOnce() -> Option<String>
    ) -> Option<&'static str> {
        if let Some(prefix) = self.lock().get(key) {
            return *prefix;
        }

        let prefix = init().map(leak);
        *self.lock().entry(key).or_insert(prefix)
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<&'static str, Option<&'static str>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn leak(prefix: String) -> &'static str {
    Box::leak(prefix.into_boxed_str())
}
