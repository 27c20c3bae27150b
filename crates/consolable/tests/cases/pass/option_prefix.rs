// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use consolable::consolable;

#[consolable(option_env!("CONSOLABLE_UNSET_PREFIX"))]
struct FromEnv;

#[consolable(Some(String::from("[Owned]")))]
struct Owned;

#[consolable(None::<&str>)]
struct Nothing;

#[consolable(7)]
struct Numbered;

fn main() {
    assert_eq!(FromEnv::__consolable_prefixed("x"), "x");
    assert_eq!(Owned::__consolable_prefixed("x"), "[Owned] x");
    assert_eq!(Nothing::__consolable_prefix(), None);
    assert_eq!(Numbered::__consolable_prefixed("x"), "7 x");
}
