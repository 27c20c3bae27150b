// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Message prefixing.
//!
//! Every generated `__consolable_prefixed` helper delegates here, so the
//! prefix rule lives in exactly one place.
//!
//! # Accepted Prefix Expressions
//!
//! The generated prefix holder converts the attribute's prefix expression
//! with [`IntoPrefix`]:
//!
//! | Expression type | Stored prefix |
//! |-----------------|---------------|
//! | `&T` where `T: Display` (`&str`, `&String`, ...) | `Some(value.to_string())` |
//! | `String`, `Cow<'_, str>` | `Some(value)` |
//! | `char`, `bool`, integers, floats | `Some(value.to_string())` |
//! | `Option<P>` where `P: IntoPrefix` | `None`, or the inner prefix |
//!
//! A bare `None` needs a type: `#[consolable(None::<&str>)]`.

use std::{borrow::Cow, fmt};

/// Conversion of a prefix expression into an optional owned prefix.
///
/// # Example
///
/// ```rust
/// use consolable_core::IntoPrefix;
///
/// assert_eq!("👋".into_prefix(), Some("👋".to_string()));
/// assert_eq!(Some(String::from("[Net]")).into_prefix(), Some("[Net]".to_string()));
/// assert_eq!(option_env!("CONSOLABLE_DOC_UNSET").into_prefix(), None);
/// ```
pub trait IntoPrefix {
    /// Convert into the stored prefix; `None` means "no prefix".
    fn into_prefix(self) -> Option<String>;
}

impl<T: fmt::Display + ?Sized> IntoPrefix for &T {
    fn into_prefix(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoPrefix for String {
    fn into_prefix(self) -> Option<String> {
        Some(self)
    }
}

impl IntoPrefix for Cow<'_, str> {
    fn into_prefix(self) -> Option<String> {
        Some(self.into_owned())
    }
}

macro_rules! display_prefix {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoPrefix for $ty {
                fn into_prefix(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_prefix!(
    char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

impl<P: IntoPrefix> IntoPrefix for Option<P> {
    fn into_prefix(self) -> Option<String> {
        self.and_then(IntoPrefix::into_prefix)
    }
}

/// Prepend `prefix` and a single space to `message`.
///
/// An absent or empty prefix leaves the message untouched and borrowed.
///
/// # Example
///
/// ```rust
/// use consolable_core::prefixed;
///
/// assert_eq!(prefixed(Some("👋"), "hi"), "👋 hi");
/// assert_eq!(prefixed(Some(""), "hi"), "hi");
/// assert_eq!(prefixed(None, "hi"), "hi");
/// ```
#[must_use]
pub fn prefixed<'a>(prefix: Option<&str>, message: &'a str) -> Cow<'a, str> {
    match prefix {
        Some(p) if !p.is_empty() => Cow::Owned(format!("{p} {message}")),
        _ => Cow::Borrowed(message)
    }
}
