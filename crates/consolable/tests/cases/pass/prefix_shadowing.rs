// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use consolable::consolable;

/// A user constant whose name matches nothing the macro generates.
const PREFIX: &str = "[Shadow]";

#[consolable(PREFIX)]
struct Shadowed;

fn main() {
    assert_eq!(Shadowed::__consolable_prefixed("x"), "[Shadow] x");
}
