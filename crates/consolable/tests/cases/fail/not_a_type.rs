// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use consolable::consolable;

#[consolable("[Helper]")]
fn helper() {}

fn main() {
    helper();
}
