//! # Dispatch Emitter
//!
//! Builds one generated dispatch type per role: a struct plus an inherent
//! impl holding one forwarding function per tagged method. Token streams are
//! assembled with `quote` and pretty-printed with `prettyplease`, so
//! identical inputs always serialize to byte-identical source.
//!
//! Forwarding names concatenate the enclosing type's simple name and the
//! method name (`Widget_onTap`), which keeps methods from different types
//! from colliding inside one dispatch type.

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;
use tracing::debug;

use crate::config::{GeneratorConfig, RoleSpec};
use crate::error::{GenerateError, Result};
use crate::resolver::ResolvedConstructor;
use crate::scanner::TaggedMethod;

/// One generated source file, ready for the output writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Package the type is declared in (`::`-separated).
    pub package: String,

    /// Type name; also the file base name.
    pub type_name: String,

    /// Serialized source text.
    pub source: String,
}

const HEADER: &str =
    "// Auto-generated flux dispatch surface\n// DO NOT EDIT - Changes will be overwritten\n\n";

/// Emit the dispatch type for one role.
///
/// `resolved` must contain an entry for every tagged method's enclosing type;
/// the pipeline populates it before calling here. Functions are emitted in
/// the order `methods` arrives in (scanner encounter order).
pub fn emit(
    role: &RoleSpec,
    methods: &[TaggedMethod],
    resolved: &HashMap<String, ResolvedConstructor>,
    config: &GeneratorConfig,
) -> Result<GeneratedFile> {
    let type_ident = parse_ident(&role.generated_type_name)?;
    let argument_path = parse_path(&role.argument_type)?;

    let mut functions: Vec<TokenStream> = Vec::new();
    let mut needs_providers = false;

    for method in methods {
        let ctor = resolved.get(&method.enclosing_qualified).ok_or_else(|| {
            GenerateError::UnresolvedType {
                qualified_name: method.enclosing_qualified.clone(),
            }
        })?;

        needs_providers |= ctor.has_params();
        functions.push(forwarding_function(method, ctor, &argument_path)?);
    }

    let declaration = if needs_providers {
        let provider_path = parse_path(&config.provider_type)?;
        quote! {
            #[derive(Default)]
            pub struct #type_ident {
                providers: #provider_path,
            }
        }
    } else {
        quote! {
            #[derive(Default)]
            pub struct #type_ident;
        }
    };

    let tokens = quote! {
        #declaration

        #[allow(non_snake_case)]
        impl #type_ident {
            #(#functions)*
        }
    };

    debug!(
        type_name = %role.generated_type_name,
        functions = methods.len(),
        providers = needs_providers,
        "emitted dispatch type"
    );

    Ok(GeneratedFile {
        package: config.package.clone(),
        type_name: role.generated_type_name.clone(),
        source: format!("{}{}", HEADER, render(tokens)),
    })
}

/// Build one forwarding function: construct the enclosing type through its
/// resolved constructor, then invoke the tagged method, synthesizing a role
/// argument iff the method declares a parameter.
fn forwarding_function(
    method: &TaggedMethod,
    ctor: &ResolvedConstructor,
    argument_path: &syn::Path,
) -> Result<TokenStream> {
    let fn_ident = parse_ident(&format!("{}_{}", method.enclosing_simple, method.name))?;
    let enclosing = parse_path(&method.enclosing_qualified)?;
    let ctor_ident = parse_ident(&ctor.name)?;
    let method_ident = parse_ident(&method.name)?;

    let ctor_args = ctor
        .params
        .iter()
        .map(|param| {
            let ty = parse_type(param)?;
            Ok(quote! { self.providers.resolve::<#ty>() })
        })
        .collect::<Result<Vec<_>>>()?;

    let call_argument = if method.params.is_empty() {
        quote! {}
    } else {
        quote! { #argument_path::default() }
    };

    Ok(quote! {
        pub fn #fn_ident(&self) {
            #enclosing::#ctor_ident(#(#ctor_args),*).#method_ident(#call_argument);
        }
    })
}

/// Pretty-print a token stream; fall back to raw token text if it does not
/// parse as a file (still deterministic, never panics on host input).
fn render(tokens: TokenStream) -> String {
    match syn::parse2::<syn::File>(tokens.clone()) {
        Ok(file) => prettyplease::unparse(&file),
        Err(_) => tokens.to_string(),
    }
}

fn parse_ident(name: &str) -> Result<syn::Ident> {
    syn::parse_str::<syn::Ident>(name).map_err(|_| GenerateError::InvalidIdentifier {
        name: name.to_string(),
    })
}

fn parse_path(path: &str) -> Result<syn::Path> {
    syn::parse_str::<syn::Path>(path).map_err(|_| GenerateError::InvalidTypePath {
        path: path.to_string(),
    })
}

fn parse_type(ty: &str) -> Result<syn::Type> {
    syn::parse_str::<syn::Type>(ty).map_err(|_| GenerateError::InvalidTypePath {
        path: ty.to_string(),
    })
}
