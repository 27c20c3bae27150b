// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use consolable::consolable;

/// Type with defaults only.
#[consolable]
struct Plain;

fn main() {
    Plain.log("hello", false);
    Plain::static_log(String::from("hello"), true);
    let _: Option<&'static str> = Plain::__consolable_prefix();
    let _: String = Plain::__consolable_category();
    let _: consolable::Logger = Plain::__consolable_logger();
}
