// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Compile errors for arguments the resolver dropped.
//!
//! The resolver itself is permissive. At the macro boundary a dropped
//! argument is almost always a typo (`subsytem = ...`) or a misplaced prefix,
//! so every one of them is reported, all at once, with its own span.
//!
//! ```text
//! error: Unknown field: `subsytem`. Did you mean `subsystem`?
//!  --> src/net.rs:3:21
//!   |
//! 3 | #[consolable("[Net]", subsytem = "com.x.y")]
//!   |                       ^^^^^^^^
//! ```

use super::parse::{IgnoredArgument, KNOWN_LABELS};

/// Turn ignored arguments into a single accumulated error.
///
/// Returns `Ok(())` when nothing was ignored.
pub fn check_ignored(ignored: &[IgnoredArgument]) -> darling::Result<()> {
    let mut errors = darling::Error::accumulator();
    for argument in ignored {
        errors.push(to_error(argument));
    }
    errors.finish()
}

fn to_error(argument: &IgnoredArgument) -> darling::Error {
    match argument {
        IgnoredArgument::UnknownLabel {
            label
        } => darling::Error::unknown_field_with_alts(&label.to_string(), KNOWN_LABELS.iter())
            .with_span(label),
        IgnoredArgument::ExtraPositional {
            index,
            expr
        } => darling::Error::custom(format!(
            "unexpected unlabeled argument at position {index}; only the first argument \
             may be an unlabeled prefix, use `subsystem = ...` or `category = ...`"
        ))
        .with_span(expr)
    }
}
