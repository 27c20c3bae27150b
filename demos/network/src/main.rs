// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Network Example with consolable
//!
//! Demonstrates:
//! - `#[consolable("...")]` prefix only, default subsystem and category
//! - labeled `subsystem` and `category`
//! - instance `log` and associated `static_log`
//!
//! Run with `RUST_LOG=info cargo run -p demo-network`.

use consolable::consolable;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Annotated Types
// ============================================================================

/// Screen-like type using only a prefix.
#[consolable("👇")]
struct MainView {
    title: String
}

impl MainView {
    fn appear(&self) {
        self.log(format!("appeared: {}", self.title), false);
    }
}

/// Helper with every argument supplied.
#[consolable("[Network]", subsystem = "com.example.app", category = "Helpers.Network")]
struct NetworkHelper {
    endpoint: &'static str
}

impl NetworkHelper {
    fn fetch(&self, fail: bool) {
        self.log(format!("Starting request to {}", self.endpoint), false);
        if fail {
            self.log("Request failed", true);
        }
    }

    fn reset_pool() {
        Self::static_log("Connection pool reset", false);
    }
}

/// Connection state machine; the category defaults to the type path.
#[consolable("[State]")]
#[derive(Debug, Clone, Copy)]
enum Connection {
    Idle,
    Open
}

impl Connection {
    fn transition(self, next: Self) -> Self {
        self.log(format!("{self:?} -> {next:?}"), false);
        next
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    MainView {
        title: "Home".to_string()
    }
    .appear();

    let helper = NetworkHelper {
        endpoint: "https://example.com/api"
    };
    helper.fetch(false);
    helper.fetch(true);
    NetworkHelper::reset_pool();

    let state = Connection::Idle.transition(Connection::Open);
    state.transition(Connection::Idle);
}
