// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Default subsystem resolution.
//!
//! When `#[consolable]` is used without `subsystem = ...`, the generated
//! logger asks this module for the identifier of the running application.
//!
//! # Resolution Order
//!
//! | Step | Source | Example |
//! |------|--------|---------|
//! | 1 | File stem of [`std::env::current_exe`] | `"my-server"` |
//! | 2 | [`FALLBACK_APPLICATION_IDENTIFIER`] | `"app"` |

use std::{path::Path, sync::OnceLock};

/// Identifier used when the running executable cannot be determined.
pub const FALLBACK_APPLICATION_IDENTIFIER: &str = "app";

/// Identifier of the running application.
///
/// Computed once per process from the executable's file stem and cached.
/// Falls back to [`FALLBACK_APPLICATION_IDENTIFIER`] when the executable path
/// is unavailable or not valid UTF-8.
///
/// # Example
///
/// ```rust
/// let id = consolable_core::application_identifier();
/// assert!(!id.is_empty());
/// ```
pub fn application_identifier() -> &'static str {
    static IDENTIFIER: OnceLock<String> = OnceLock::new();

    IDENTIFIER.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .as_deref()
            .and_then(identifier_from_path)
            .unwrap_or_else(|| FALLBACK_APPLICATION_IDENTIFIER.to_string())
    })
}

/// Extract a non-empty UTF-8 file stem from an executable path.
fn identifier_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}
