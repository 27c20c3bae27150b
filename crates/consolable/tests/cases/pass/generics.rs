// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::fmt::Debug;

use consolable::consolable;

/// Generic enum with a lifetime and a where clause.
#[consolable("[Slot]")]
#[derive(Debug)]
enum Slot<'a, T: Debug>
where
    T: Clone
{
    Empty,
    Full(&'a T)
}

impl<'a, T: Debug + Clone> Slot<'a, T> {
    fn describe(&self) {
        self.log(format!("{self:?}"), false);
    }
}

/// Tuple struct with a const generic.
#[consolable(category = "Buffer")]
struct Buffer<const N: usize>([u8; N]);

fn main() {
    let value = 7_u32;
    Slot::Full(&value).describe();
    Slot::<u32>::Empty.describe();
    Buffer([0_u8; 4]).log("allocated", false);
    Buffer::<8>::static_log("static", true);
}
