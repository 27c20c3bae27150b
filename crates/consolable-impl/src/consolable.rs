// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[consolable]` attribute implementation.
//!
//! # Architecture
//!
//! ```text
//! consolable.rs (orchestrator)
//! │
//! ├── parse/          → Invocation, LogConfig, AnnotatedEntity
//! │   ├── invocation.rs → raw attribute arguments
//! │   ├── config.rs     → resolve() with defaults
//! │   └── target.rs     → struct / enum / union identity
//! │
//! ├── diagnostics.rs  → compile errors for dropped arguments
//! └── fragments.rs    → the six generated members
//! ```
//!
//! # Generated Code
//!
//! For
//!
//! ```rust,ignore
//! #[consolable("[Net]", subsystem = "com.example.app")]
//! pub struct NetworkHelper;
//! ```
//!
//! the macro re-emits the struct unchanged and appends:
//!
//! ```rust,ignore
//! #[allow(dead_code)]
//! impl NetworkHelper {
//!     fn __consolable_prefix() -> Option<&'static str> { /* "[Net]", once */ }
//!     fn __consolable_category() -> String { type_name::<Self>().to_string() }
//!     fn __consolable_logger() -> ::consolable::Logger { /* "com.example.app" */ }
//!     fn __consolable_prefixed(message: &str) -> String { /* "[Net] {message}" */ }
//!     fn log(&self, message: impl AsRef<str>, is_error: bool) { /* ... */ }
//!     fn static_log(message: impl AsRef<str>, is_error: bool) { /* ... */ }
//! }
//! ```

mod diagnostics;
mod fragments;
pub mod parse;

use proc_macro2::TokenStream;
use quote::quote;
use syn::Item;

use self::{
    fragments::PrefixScope,
    parse::{AnnotatedEntity, Invocation, LogConfig, resolve}
};

/// Expand `#[consolable(args)] item`.
///
/// The annotated item is always re-emitted so that a bad attribute does not
/// cascade into "cannot find type" errors. Members are added only when every
/// check passes.
pub fn expand(args: TokenStream, item: TokenStream) -> TokenStream {
    let item: Item = match syn::parse2(item.clone()) {
        Ok(item) => item,
        Err(err) => {
            let error = err.to_compile_error();
            return quote! { #error #item };
        }
    };

    match generate(args, &item) {
        Ok(members) => quote! {
            #item
            #members
        },
        Err(err) => {
            let errors = err.write_errors();
            quote! {
                #item
                #errors
            }
        }
    }
}

fn generate(args: TokenStream, item: &Item) -> darling::Result<TokenStream> {
    let mut errors = darling::Error::accumulator();

    let invocation = errors.handle(syn::parse2::<Invocation>(args).map_err(darling::Error::from));
    let entity = errors.handle(AnnotatedEntity::from_item(item));

    let resolved = invocation.map(|invocation| resolve(&invocation));
    if let Some(resolved) = &resolved {
        errors.handle(diagnostics::check_ignored(&resolved.ignored));
    }

    let members = match (resolved, entity) {
        (Some(resolved), Some(entity)) => impl_block(&entity, &resolved.config),
        _ => TokenStream::new()
    };

    errors.finish_with(members)
}

fn impl_block(entity: &AnnotatedEntity, config: &LogConfig) -> TokenStream {
    let ident = &entity.ident;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();
    let fragments = fragments::emit(config, PrefixScope::of(&entity.generics));

    quote! {
        #[allow(dead_code)]
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#fragments)*
        }
    }
}

#[cfg(test)]
mod tests;
