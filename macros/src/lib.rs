//! Derive macros for Tasklane
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums (commands/events)
//!
//! # Example
//!
//! ```ignore
//! use tasklane_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     #[command]
//!     AddTodo { text: String },
//!
//!     #[event]
//!     TodoAdded { id: u64, text: String },
//! }
//!
//! // Generated methods:
//! assert!(TodoAction::AddTodo { text: "test".into() }.is_command());
//! assert!(TodoAction::TodoAdded { id: 1, text: "test".into() }.is_event());
//! assert_eq!(TodoAction::TodoAdded { id: 1, text: "test".into() }.event_type(), "TodoAdded.v1");
//! assert_eq!(TodoAction::AddTodo { text: "test".into() }.name(), "AddTodo");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Variant};

/// How a variant was tagged
#[derive(Clone, Copy, PartialEq, Eq)]
enum Role {
    Command,
    Event,
    Untagged,
}

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_command()` - Returns true if this variant is a command
/// - `is_event()` - Returns true if this variant is an event
/// - `event_type()` - Returns `"<Variant>.v1"` for events, `"unknown"` otherwise
/// - `name()` - Returns the variant name, for logging
///
/// # Attributes
///
/// - `#[command]` - Mark a variant as a command
/// - `#[event]` - Mark a variant as an event
///
/// Untagged variants are neither commands nor events.
///
/// # Errors
///
/// Produces a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[command]` and `#[event]` attributes
#[proc_macro_derive(Action, attributes(command, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_action(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_action(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(Action)] can only be used on enums",
        ));
    };

    let mut command_arms = Vec::new();
    let mut event_arms = Vec::new();
    let mut event_type_arms = Vec::new();
    let mut name_arms = Vec::new();

    for variant in &data_enum.variants {
        let pattern = variant_pattern(variant);
        let variant_name = variant.ident.to_string();

        match role_of(variant)? {
            Role::Command => command_arms.push(quote! { #pattern => true, }),
            Role::Event => {
                let type_name = format!("{variant_name}.v1");
                event_arms.push(quote! { #pattern => true, });
                event_type_arms.push(quote! { #pattern => #type_name, });
            },
            Role::Untagged => {},
        }

        name_arms.push(quote! { #pattern => #variant_name, });
    }

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Returns true if this action is a command
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_command(&self) -> bool {
                match self {
                    #(#command_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action is an event
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_event(&self) -> bool {
                match self {
                    #(#event_arms)*
                    _ => false,
                }
            }

            /// Returns the event type name for serialization
            ///
            /// Only events have type names. Other variants return "unknown".
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn event_type(&self) -> &'static str {
                match self {
                    #(#event_type_arms)*
                    _ => "unknown",
                }
            }

            /// Returns the variant name
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    })
}

fn role_of(variant: &Variant) -> syn::Result<Role> {
    let is_command = has_attribute(&variant.attrs, "command");
    let is_event = has_attribute(&variant.attrs, "event");

    match (is_command, is_event) {
        (true, true) => Err(syn::Error::new_spanned(
            variant,
            "Variant cannot be both #[command] and #[event]",
        )),
        (true, false) => Ok(Role::Command),
        (false, true) => Ok(Role::Event),
        (false, false) => Ok(Role::Untagged),
    }
}

/// Match pattern that ignores the variant's fields
fn variant_pattern(variant: &Variant) -> TokenStream2 {
    let ident = &variant.ident;
    match &variant.fields {
        Fields::Named(_) => quote! { Self::#ident { .. } },
        Fields::Unnamed(_) => quote! { Self::#ident(..) },
        Fields::Unit => quote! { Self::#ident },
    }
}

fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
