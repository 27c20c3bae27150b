// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The item `#[consolable]` is attached to.
//!
//! Only items that can own an inherent `impl` block accept members:
//!
//! | Item | Accepted |
//! |------|----------|
//! | `struct` (named, tuple, unit) | Yes |
//! | `enum` | Yes |
//! | `union` | Yes |
//! | anything else | No, compile error |

use syn::{Generics, Ident, Item};

/// Identity of the annotated type.
#[derive(Debug, Clone)]
pub struct AnnotatedEntity {
    /// Type name.
    pub ident:    Ident,
    /// Generic parameters and where clause, reused for the generated `impl`.
    pub generics: Generics
}

impl AnnotatedEntity {
    /// Extract the annotated type from a parsed item.
    ///
    /// # Errors
    ///
    /// Returns an error spanned on the item's name (or the whole item when it
    /// has none) when it is not a struct, enum or union.
    pub fn from_item(item: &Item) -> darling::Result<Self> {
        let (ident, generics) = match item {
            Item::Struct(item) => (&item.ident, &item.generics),
            Item::Enum(item) => (&item.ident, &item.generics),
            Item::Union(item) => (&item.ident, &item.generics),
            other => {
                let error = darling::Error::custom(
                    "#[consolable] can only be applied to structs, enums and unions"
                );
                return Err(match item_name(other) {
                    Some(name) => error.with_span(name),
                    None => error.with_span(other)
                });
            }
        };

        Ok(Self {
            ident:    ident.clone(),
            generics: generics.clone()
        })
    }
}

fn item_name(item: &Item) -> Option<&Ident> {
    match item {
        Item::Fn(item) => Some(&item.sig.ident),
        Item::Trait(item) => Some(&item.ident),
        Item::TraitAlias(item) => Some(&item.ident),
        Item::Mod(item) => Some(&item.ident),
        Item::Const(item) => Some(&item.ident),
        Item::Static(item) => Some(&item.ident),
        Item::Type(item) => Some(&item.ident),
        Item::ExternCrate(item) => Some(&item.ident),
        _ => None
    }
}
