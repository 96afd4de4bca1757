//! Procedural macros for quizdesk

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    data: darling::ast::Data<ActionVariant, ()>,

    /// Infer categories from variant name prefixes
    #[darling(default)]
    infer_categories: bool,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,
    fields: darling::ast::Fields<()>,

    /// Explicit category override
    #[darling(default)]
    category: Option<String>,

    /// Exclude from category inference
    #[darling(default)]
    skip_category: bool,
}

// Verbs that end an action name. Everything before them is the category.
const ACTION_VERBS: &[&str] = &[
    "Fetch", "Send", "Create", "Load", "Fail", "Resize", "Toggle", "Clear", "Start", "Open",
    "Close", "Submit", "Cancel", "Update", "Set", "Reset",
];

fn split_pascal_case(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for ch in s.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

fn to_snake_case(parts: &[String]) -> String {
    parts
        .iter()
        .map(|p| p.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Infer a category from a variant name.
///
/// `RandomFetch` and `RandomDidLoad` both land in `random`; a name with no
/// recognizable verb, or one that starts with a verb, is uncategorized.
fn infer_category(name: &str) -> Option<String> {
    let parts = split_pascal_case(name);
    if parts.len() < 2 || ACTION_VERBS.contains(&parts[0].as_str()) {
        return None;
    }

    let prefix_end = parts
        .iter()
        .skip(1)
        .position(|p| p == "Did" || ACTION_VERBS.contains(&p.as_str()))
        .map(|i| i + 1)?;

    Some(to_snake_case(&parts[..prefix_end]))
}

/// Derive macro for the Action trait
///
/// Generates `name()`, returning the variant name, and `category()`, built
/// from explicit `#[action(category = "...")]` attributes and, with
/// `#[action(infer_categories)]`, from variant name prefixes.
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// #[action(infer_categories)]
/// enum Action {
///     RandomFetch,
///     RandomDidLoad(String),
///     #[action(category = "app")]
///     Quit,
/// }
///
/// assert_eq!(Action::RandomFetch.name(), "RandomFetch");
/// assert_eq!(Action::RandomFetch.category(), Some("random"));
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let name_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let variant_str = variant_name.to_string();

        match &v.fields.style {
            darling::ast::Style::Unit => quote! {
                #name::#variant_name => #variant_str
            },
            darling::ast::Style::Tuple => quote! {
                #name::#variant_name(..) => #variant_str
            },
            darling::ast::Style::Struct => quote! {
                #name::#variant_name { .. } => #variant_str
            },
        }
    });

    let category_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let category = if v.skip_category {
            None
        } else if let Some(explicit) = &v.category {
            Some(explicit.clone())
        } else if opts.infer_categories {
            infer_category(&variant_name.to_string())
        } else {
            None
        };

        let cat_expr = match category {
            Some(c) => quote! { ::core::option::Option::Some(#c) },
            None => quote! { ::core::option::Option::None },
        };
        quote! { #name::#variant_name { .. } => #cat_expr }
    });

    let expanded = quote! {
        impl ::quizdesk_core::Action for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }

            fn category(&self) -> ::core::option::Option<&'static str> {
                match self {
                    #(#category_arms),*
                }
            }
        }
    };

    expanded.into()
}
