// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute argument and annotated item parsing.
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── invocation.rs — Argument, Invocation (raw attribute arguments)
//! ├── config.rs     — LogConfig, resolve() and ignored-argument reporting
//! └── target.rs     — AnnotatedEntity (the struct/enum/union receiving members)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::consolable::parse::{AnnotatedEntity, Invocation, resolve};
//!
//! let invocation: Invocation = syn::parse2(args)?;
//! let resolved = resolve(&invocation);
//! let entity = AnnotatedEntity::from_item(&item)?;
//! ```

mod config;
mod invocation;
mod target;

pub use config::{IgnoredArgument, KNOWN_LABELS, LogConfig, resolve};
pub use invocation::Invocation;
pub use target::AnnotatedEntity;
