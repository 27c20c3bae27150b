// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use consolable::consolable;

#[consolable("[Net]", "[Extra]")]
struct NetworkHelper;

fn main() {
    let _ = NetworkHelper;
}
