// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Argument resolution.
//!
//! Turns an [`Invocation`] into a [`LogConfig`], filling in defaults for
//! everything the attribute leaves out. Resolution never fails; arguments
//! it cannot place are returned alongside the config as
//! [`IgnoredArgument`]s and it is up to the caller to report them.
//!
//! # Supported Arguments
//!
//! | Argument | Position | Default | Description |
//! |----------|----------|---------|-------------|
//! | prefix | 0, unlabeled | none | Prepended to every message |
//! | `subsystem` | any, labeled | `::consolable::application_identifier()` | Logger subsystem |
//! | `category` | any, labeled | `::core::any::type_name::<Self>()` | Logger category |
//!
//! Expressions are forwarded as tokens and never evaluated here. A repeated
//! label overrides the earlier one.

use syn::{Expr, Ident, parse_quote};

use super::invocation::{Argument, Invocation};

/// Label selecting the logger subsystem.
pub const SUBSYSTEM: &str = "subsystem";

/// Label selecting the logger category.
pub const CATEGORY: &str = "category";

/// Every label the resolver understands.
pub const KNOWN_LABELS: [&str; 2] = [SUBSYSTEM, CATEGORY];

/// Default subsystem expression.
///
/// Evaluated in the annotated type's crate each time a logger is built.
pub fn default_subsystem() -> Expr {
    parse_quote!(::consolable::application_identifier())
}

/// Default category expression: the fully-qualified name of `Self`.
pub fn default_category() -> Expr {
    parse_quote!(::core::any::type_name::<Self>())
}

/// Resolved logging configuration of one annotation site.
///
/// `subsystem` and `category` are always present; a missing `prefix`
/// means messages are logged unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Prefix expression, if one was given.
    pub prefix:    Option<Expr>,
    /// Subsystem expression.
    pub subsystem: Expr,
    /// Category expression.
    pub category:  Expr
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            prefix:    None,
            subsystem: default_subsystem(),
            category:  default_category()
        }
    }
}

/// An argument the resolver dropped.
#[derive(Debug, Clone)]
pub enum IgnoredArgument {
    /// Named argument with a label other than `subsystem` or `category`.
    UnknownLabel {
        /// The unrecognized label.
        label: Ident
    },

    /// Unlabeled argument after position 0.
    ExtraPositional {
        /// Position in the argument list.
        index: usize,
        /// The dropped expression.
        expr:  Expr
    }
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Resolved configuration.
    pub config:  LogConfig,
    /// Arguments that did not contribute to `config`, in source order.
    pub ignored: Vec<IgnoredArgument>
}

/// Resolve an invocation into a configuration.
///
/// # Rules
///
/// | Argument | Effect |
/// |----------|--------|
/// | `subsystem = S` | `config.subsystem = S` |
/// | `category = C` | `config.category = C` |
/// | unlabeled at index 0 | `config.prefix = Some(expr)` |
/// | unlabeled at index > 0 | ignored |
/// | any other label | ignored |
///
/// Indices count every argument, labeled or not, so in
/// `(subsystem = S, "p")` the string is at index 1 and is ignored.
pub fn resolve(invocation: &Invocation) -> Resolved {
    let mut config = LogConfig::default();
    let mut ignored = Vec::new();

    for (index, argument) in invocation.arguments.iter().enumerate() {
        match argument {
            Argument::Named {
                label,
                value
            } => {
                if label == SUBSYSTEM {
                    config.subsystem = value.clone();
                } else if label == CATEGORY {
                    config.category = value.clone();
                } else {
                    ignored.push(IgnoredArgument::UnknownLabel {
                        label: label.clone()
                    });
                }
            }
            Argument::Positional(expr) if index == 0 => {
                config.prefix = Some(expr.clone());
            }
            Argument::Positional(expr) => {
                ignored.push(IgnoredArgument::ExtraPositional {
                    index,
                    expr: expr.clone()
                });
            }
        }
    }

    Resolved {
        config,
        ignored
    }
}
