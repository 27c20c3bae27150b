// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-type logging handle.
//!
//! [`Logger`] is the value returned by the generated `__consolable_logger()`
//! accessor. It carries a `subsystem` and a `category` and forwards messages
//! to [`tracing`] as structured events, so any subscriber can filter or
//! format on those two fields.
//!
//! # Event Shape
//!
//! ```text
//! INFO consolable_core::logger: 👋 appeared subsystem=my-app category=my_app::MainView
//!      └──────── target ───────┘ └ message ┘ └────────────── fields ───────────────┘
//! ```
//!
//! The generated `log` and `static_log` members emit the same shape from the
//! annotated type's module, so their target is that module
//! (`my_app::views: 👋 appeared ...`) and file and line point at the type.

use std::fmt;

/// Logging handle parameterized by subsystem and category.
///
/// Construction copies two strings and touches no global state, so the
/// generated accessor builds a fresh handle on every call.
///
/// # Example
///
/// ```rust
/// use consolable_core::Logger;
///
/// let logger = Logger::new("com.example.app", "Network");
/// assert_eq!(logger.subsystem(), "com.example.app");
/// assert_eq!(logger.category(), "Network");
///
/// logger.info("request started");
/// logger.error("request failed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Logger {
    subsystem: String,
    category:  String
}

impl Logger {
    /// Create a logger for the given subsystem and category.
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            category:  category.into()
        }
    }

    /// Subsystem this logger writes under.
    #[must_use]
    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    /// Category this logger writes under.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Emit `message` at info level.
    pub fn info(&self, message: &str) {
        tracing::info!(
            subsystem = %self.subsystem,
            category = %self.category,
            "{message}"
        );
    }

    /// Emit `message` at error level.
    pub fn error(&self, message: &str) {
        tracing::error!(
            subsystem = %self.subsystem,
            category = %self.category,
            "{message}"
        );
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.subsystem, self.category)
    }
}
