// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Raw `#[consolable(...)]` argument list.
//!
//! Arguments are parsed as a comma-separated list of expressions. An
//! assignment whose left side is a bare identifier is a named argument;
//! anything else, including `a == b` and `a.b = c`, is positional.
//!
//! ```text
//! #[consolable("👋", subsystem = "com.x.y", category = CATEGORY)]
//!              ────  ─────────────────────  ───────────────────
//!           Positional        Named                Named
//! ```

use syn::{
    Expr, Ident, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated
};

/// A single attribute argument.
#[derive(Debug, Clone)]
pub enum Argument {
    /// Unlabeled expression.
    Positional(Expr),

    /// `label = value`.
    Named {
        /// Argument label, e.g. `subsystem`.
        label: Ident,
        /// Source expression, forwarded without evaluation.
        value: Expr
    }
}

impl From<Expr> for Argument {
    fn from(expr: Expr) -> Self {
        match expr {
            Expr::Assign(assign) => match assignment_label(&assign.left) {
                Some(label) => Self::Named {
                    label,
                    value: *assign.right
                },
                None => Self::Positional(Expr::Assign(assign))
            },
            other => Self::Positional(other)
        }
    }
}

/// Bare identifier on the left of an assignment, if that is all it is.
fn assignment_label(left: &Expr) -> Option<Ident> {
    match left {
        Expr::Path(path) if path.qself.is_none() && path.attrs.is_empty() => {
            path.path.get_ident().cloned()
        }
        _ => None
    }
}

/// Ordered argument list of one annotation site.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Arguments in source order.
    pub arguments: Vec<Argument>
}

impl Parse for Invocation {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let exprs = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        Ok(Self {
            arguments: exprs.into_iter().map(Argument::from).collect()
        })
    }
}
