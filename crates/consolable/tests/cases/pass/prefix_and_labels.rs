// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use consolable::consolable;

const SUBSYSTEM: &str = "com.example.app";

fn category() -> String {
    format!("{}::net", module_path!())
}

/// Every argument supplied, with non-literal expressions.
#[consolable("[Network]", subsystem = SUBSYSTEM, category = category())]
pub struct NetworkHelper {
    retries: u8
}

/// Labels in reverse order, prefix built from a macro.
#[consolable(concat!("[", "Auth", "]"), category = "Auth", subsystem = String::from("auth"))]
struct AuthHelper;

impl NetworkHelper {
    fn fetch(&self) {
        self.log("Starting request", false);
        self.log(format!("Request failed after {} retries", self.retries), true);
    }
}

fn main() {
    NetworkHelper {
        retries: 3
    }
    .fetch();
    AuthHelper::static_log("token refreshed", false);
}
