// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

// Generated code refers to `::consolable::{Logger, IntoPrefix, PrefixSlots, prefixed,
// application_identifier}`.
pub use consolable_core::*;
pub use consolable_impl::consolable;
// Log events are emitted from the annotated type's module through this path.
#[doc(hidden)]
pub use tracing as __tracing;
