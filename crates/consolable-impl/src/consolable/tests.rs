// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Expansion tests.
//!
//! | Category | Coverage |
//! |----------|----------|
//! | Shapes | struct, enum, union, generics |
//! | Arguments | prefix, subsystem, category |
//! | Rejections | unsupported items, dropped arguments, syntax errors |

use proc_macro2::TokenStream;
use quote::quote;

use super::expand;

fn expand_str(args: TokenStream, item: TokenStream) -> String {
    expand(args, item).to_string()
}

#[test]
fn item_is_re_emitted_before_members() {
    let output = expand_str(quote!(), quote!(struct Greeter;));
    let item = output.find("struct Greeter").unwrap();
    let block = output.find("impl Greeter").unwrap();
    assert!(item < block, "{output}");
}

#[test]
fn all_members_are_generated() {
    let output = expand_str(quote!("👋"), quote!(struct Greeter;));
    for name in [
        "fn __consolable_prefix",
        "fn __consolable_category",
        "fn __consolable_logger",
        "fn __consolable_prefixed",
        "fn log",
        "fn static_log"
    ] {
        assert!(output.contains(name), "missing {name}: {output}");
    }
    assert!(output.contains("allow (dead_code)"), "{output}");
    assert!(!output.contains("compile_error"), "{output}");
}

#[test]
fn members_are_private() {
    let output = expand_str(quote!(), quote!(pub struct Greeter;));
    assert!(!output.contains("pub fn"), "{output}");
}

#[test]
fn labeled_arguments_reach_the_logger() {
    let output = expand_str(
        quote!(subsystem = "com.x.y", category = "Net"),
        quote!(struct NetworkHelper;)
    );
    assert!(output.contains("\"com.x.y\""), "{output}");
    assert!(output.contains("\"Net\""), "{output}");
    assert!(!output.contains("application_identifier"), "{output}");
    assert!(!output.contains("type_name"), "{output}");
}

#[test]
fn generics_are_forwarded() {
    let output = expand_str(
        quote!(),
        quote! {
            enum Slot<'a, T: Clone> where T: Default {
                Empty,
                Full(&'a T)
            }
        }
    );
    assert!(
        output.contains("impl < 'a , T : Clone > Slot < 'a , T > where T : Default"),
        "{output}"
    );
}

#[test]
fn type_parameters_get_per_instantiation_prefix() {
    let output = expand_str(quote!("[Tag]"), quote!(struct Tagged<T>(T);));
    assert!(output.contains("PrefixSlots"), "{output}");
    assert!(!output.contains("OnceLock"), "{output}");
}

#[test]
fn lifetime_parameters_share_one_prefix() {
    let output = expand_str(quote!("[Ref]"), quote!(struct View<'a>(&'a str);));
    assert!(output.contains("OnceLock"), "{output}");
    assert!(!output.contains("PrefixSlots"), "{output}");
}

#[test]
fn union_is_supported() {
    let output = expand_str(quote!(), quote!(union Bits { int: u32, float: f32 }));
    assert!(output.contains("impl Bits"), "{output}");
}

#[test]
fn function_is_rejected_and_re_emitted() {
    let output = expand_str(quote!("p"), quote!(fn helper() {}));
    assert!(output.contains("compile_error"), "{output}");
    assert!(output.contains("fn helper"), "{output}");
    assert!(!output.contains("__consolable_logger"), "{output}");
}

#[test]
fn unknown_label_emits_no_members() {
    let output = expand_str(quote!(subsytem = "S"), quote!(struct Greeter;));
    assert!(output.contains("compile_error"), "{output}");
    assert!(output.contains("struct Greeter"), "{output}");
    assert!(!output.contains("impl Greeter"), "{output}");
}

#[test]
fn extra_positional_emits_no_members() {
    let output = expand_str(quote!("a", "b"), quote!(struct Greeter;));
    assert!(output.contains("compile_error"), "{output}");
    assert!(!output.contains("impl Greeter"), "{output}");
}

#[test]
fn argument_syntax_error_is_reported() {
    let output = expand_str(quote!("a" "b"), quote!(struct Greeter;));
    assert!(output.contains("compile_error"), "{output}");
    assert!(output.contains("struct Greeter"), "{output}");
}

#[test]
fn errors_are_accumulated() {
    let output = expand_str(quote!(level = 1, "a", "b"), quote!(trait Nope {}));
    assert_eq!(output.matches("compile_error").count(), 4, "{output}");
}

#[test]
fn expansion_is_deterministic() {
    let args = quote!("[Net]", category = "Net");
    let item = quote!(struct NetworkHelper { retries: u8 });
    assert_eq!(
        expand_str(args.clone(), item.clone()),
        expand_str(args, item)
    );
}
