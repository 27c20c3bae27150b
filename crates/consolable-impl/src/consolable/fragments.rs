// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Member templates.
//!
//! [`emit`] renders a [`LogConfig`] into the six members injected into the
//! annotated type, always all six and always in this order:
//!
//! | # | Kind | Generated member |
//! |---|------|------------------|
//! | 1 | [`PrefixHolder`](FragmentKind::PrefixHolder) | `fn __consolable_prefix() -> Option<&'static str>` |
//! | 2 | [`CategoryAccessor`](FragmentKind::CategoryAccessor) | `fn __consolable_category() -> String` |
//! | 3 | [`LoggerAccessor`](FragmentKind::LoggerAccessor) | `fn __consolable_logger() -> ::consolable::Logger` |
//! | 4 | [`PrefixFormatter`](FragmentKind::PrefixFormatter) | `fn __consolable_prefixed(&str) -> String` |
//! | 5 | [`InstanceLog`](FragmentKind::InstanceLog) | `fn log(&self, impl AsRef<str>, bool)` |
//! | 6 | [`StaticLog`](FragmentKind::StaticLog) | `fn static_log(impl AsRef<str>, bool)` |
//!
//! # Evaluation
//!
//! Configured expressions are spliced as tokens. The prefix is evaluated at
//! most once per type, on first use, and converted with
//! `::consolable::IntoPrefix`. Types with type or const parameters keep one
//! prefix per instantiation (see [`PrefixScope`]). The category is evaluated
//! on every accessor call, and the subsystem every time a logger is built.
//!
//! # Log Events
//!
//! The log methods invoke `tracing` macros through `::consolable::__tracing`
//! inside the annotated type's own `impl`, so each event's target, file and
//! line belong to the module declaring the type.

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Generics, Ident};

use super::parse::LogConfig;

/// Identity of a generated member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Lazily initialized optional prefix.
    PrefixHolder,
    /// Category expression accessor.
    CategoryAccessor,
    /// Logger constructor.
    LoggerAccessor,
    /// Applies the prefix to a message.
    PrefixFormatter,
    /// `log` method taking `&self`.
    InstanceLog,
    /// `static_log` associated function.
    StaticLog
}

impl FragmentKind {
    /// Every kind, in emission order.
    pub const ALL: [Self; 6] = [
        Self::PrefixHolder,
        Self::CategoryAccessor,
        Self::LoggerAccessor,
        Self::PrefixFormatter,
        Self::InstanceLog,
        Self::StaticLog
    ];

    /// Name of the generated member.
    pub const fn member_name(self) -> &'static str {
        match self {
            Self::PrefixHolder => "__consolable_prefix",
            Self::CategoryAccessor => "__consolable_category",
            Self::LoggerAccessor => "__consolable_logger",
            Self::PrefixFormatter => "__consolable_prefixed",
            Self::InstanceLog => "log",
            Self::StaticLog => "static_log"
        }
    }

    fn ident(self) -> Ident {
        format_ident!("{}", self.member_name())
    }
}

/// Where the prefix holder keeps its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixScope {
    /// One `OnceLock` for the whole type.
    Type,
    /// One slot per instantiation, keyed by `type_name::<Self>()`.
    ///
    /// Needed for type and const parameters: a `static` inside a generic
    /// `impl` is shared by every instantiation.
    Instantiation
}

impl PrefixScope {
    /// Scope required by a type with these generics.
    ///
    /// Lifetime parameters alone do not change the stored prefix.
    pub fn of(generics: &Generics) -> Self {
        if generics.type_params().next().is_some() || generics.const_params().next().is_some() {
            Self::Instantiation
        } else {
            Self::Type
        }
    }
}

/// One generated member.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Which member this is.
    pub kind:   FragmentKind,
    /// Rendered member definition.
    pub tokens: TokenStream
}

impl ToTokens for Fragment {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.tokens.to_tokens(tokens);
    }
}

/// Render all members for `config`, in [`FragmentKind::ALL`] order.
pub fn emit(config: &LogConfig, scope: PrefixScope) -> [Fragment; 6] {
    FragmentKind::ALL.map(|kind| Fragment {
        kind,
        tokens: render(kind, config, scope)
    })
}

fn render(kind: FragmentKind, config: &LogConfig, scope: PrefixScope) -> TokenStream {
    let name = kind.ident();
    let prefix = FragmentKind::PrefixHolder.ident();
    let category = FragmentKind::CategoryAccessor.ident();
    let logger = FragmentKind::LoggerAccessor.ident();
    let prefixed = FragmentKind::PrefixFormatter.ident();

    match kind {
        FragmentKind::PrefixHolder => {
            let body = match (&config.prefix, scope) {
                (None, _) => quote! { ::core::option::Option::None },
                (Some(expr), PrefixScope::Type) => quote! {
                    static __CONSOLABLE_PREFIX: ::std::sync::OnceLock<
                        ::core::option::Option<::std::string::String>
                    > = ::std::sync::OnceLock::new();
                    __CONSOLABLE_PREFIX
                        .get_or_init(|| ::consolable::IntoPrefix::into_prefix(#expr))
                        .as_deref()
                },
                (Some(expr), PrefixScope::Instantiation) => quote! {
                    static __CONSOLABLE_PREFIX: ::consolable::PrefixSlots =
                        ::consolable::PrefixSlots::new();
                    __CONSOLABLE_PREFIX.get_or_init(::core::any::type_name::<Self>(), || {
                        ::consolable::IntoPrefix::into_prefix(#expr)
                    })
                }
            };
            quote! {
                fn #name() -> ::core::option::Option<&'static ::core::primitive::str> {
                    #body
                }
            }
        }
        FragmentKind::CategoryAccessor => {
            let expr = &config.category;
            quote! {
                fn #name() -> ::std::string::String {
                    ::std::string::ToString::to_string(&(#expr))
                }
            }
        }
        FragmentKind::LoggerAccessor => {
            let subsystem = &config.subsystem;
            quote! {
                fn #name() -> ::consolable::Logger {
                    ::consolable::Logger::new(
                        ::std::string::ToString::to_string(&(#subsystem)),
                        Self::#category()
                    )
                }
            }
        }
        FragmentKind::PrefixFormatter => quote! {
            fn #name(message: &::core::primitive::str) -> ::std::string::String {
                ::consolable::prefixed(Self::#prefix(), message).into_owned()
            }
        },
        FragmentKind::InstanceLog => quote! {
            fn #name(
                &self,
                message: impl ::core::convert::AsRef<::core::primitive::str>,
                is_error: ::core::primitive::bool
            ) {
                let full = Self::#prefixed(message.as_ref());
                let logger = Self::#logger();
                if is_error {
                    ::consolable::__tracing::error!(
                        subsystem = %logger.subsystem(),
                        category = %logger.category(),
                        "{}",
                        full
                    );
                } else {
                    ::consolable::__tracing::info!(
                        subsystem = %logger.subsystem(),
                        category = %logger.category(),
                        "{}",
                        full
                    );
                }
            }
        },
        FragmentKind::StaticLog => quote! {
            fn #name(
                message: impl ::core::convert::AsRef<::core::primitive::str>,
                is_error: ::core::primitive::bool
            ) {
                let full = Self::#prefixed(message.as_ref());
                let logger = Self::#logger();
                if is_error {
                    ::consolable::__tracing::error!(
                        subsystem = %logger.subsystem(),
                        category = %logger.category(),
                        "{}",
                        full
                    );
                } else {
                    ::consolable::__tracing::info!(
                        subsystem = %logger.subsystem(),
                        category = %logger.category(),
                        "{}",
                        full
                    );
                }
            }
        }
    }
}
