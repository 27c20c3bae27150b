// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[consolable]                                   // no prefix, default subsystem and category
//! #[consolable("👋")]                              // prefix only
//! #[consolable(subsystem = "com.x.y")]            // labeled arguments in any order
//! #[consolable("[Net]", subsystem = "com.x.y", category = "Net")]
//! ```
//!
//! | Argument | Default |
//! |----------|---------|
//! | prefix (first, unlabeled) | none |
//! | `subsystem = expr` | `::consolable::application_identifier()` |
//! | `category = expr` | `::core::any::type_name::<Self>()` |

mod consolable;

use proc_macro::TokenStream;

/// Inject a per-type logger and log helpers into a struct, enum or union.
///
/// # Example
///
/// ```rust,ignore
/// use consolable::consolable;
///
/// #[consolable("[Network]", subsystem = "com.example.app", category = "Helpers.Network")]
/// pub struct NetworkHelper;
///
/// impl NetworkHelper {
///     pub fn fetch(&self) {
///         self.log("Starting request", false);  // info
///         self.log("Request failed", true);     // error
///         Self::static_log("Pool drained", false);
///     }
/// }
/// ```
///
/// # Generated Members
///
/// All members are private to the module declaring the type.
///
/// | Member | Purpose |
/// |--------|---------|
/// | `fn log(&self, message: impl AsRef<str>, is_error: bool)` | Prefix and log at info or error |
/// | `fn static_log(message: impl AsRef<str>, is_error: bool)` | Same, without a receiver |
/// | `fn __consolable_logger() -> Logger` | Fresh logger for this type |
/// | `fn __consolable_category() -> String` | Category expression |
/// | `fn __consolable_prefixed(&str) -> String` | Applies the prefix |
/// | `fn __consolable_prefix() -> Option<&'static str>` | Prefix, evaluated once per type or generic instantiation |
///
/// # Errors
///
/// Compile errors are raised for:
///
/// - items other than structs, enums and unions
/// - labels other than `subsystem` and `category`
/// - unlabeled arguments after the first one
#[proc_macro_attribute]
pub fn consolable(args: TokenStream, item: TokenStream) -> TokenStream {
    consolable::expand(args.into(), item.into()).into()
}
