// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod application;
mod logger;
pub mod prelude;
mod prefix;
mod slots;

pub use application::{FALLBACK_APPLICATION_IDENTIFIER, application_identifier};
pub use logger::Logger;
pub use prefix::{IntoPrefix, prefixed};
pub use slots::PrefixSlots;
