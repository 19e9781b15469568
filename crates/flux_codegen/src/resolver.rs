//! # Constructor Resolver
//!
//! Selects the single constructor eligible for synthetic instantiation of an
//! enclosing type, or fails the round.
//!
//! Resolution is a pure function of the type's declared constructors, so
//! callers are free to memoize per distinct type; resolving twice always
//! yields the same answer.

use crate::error::{GenerateError, Result};
use crate::symbols::{TypeDecl, Visibility};

/// The constructor chosen for an enclosing type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConstructor {
    pub name: String,

    /// Ordered parameter types, used verbatim by the emitter.
    pub params: Vec<String>,

    pub visibility: Visibility,
}

impl ResolvedConstructor {
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

/// Select the constructor used to instantiate `decl`.
///
/// Rule, applied in order:
/// 1. Exactly one parameterized constructor (any others are no-argument)
///    selects the parameterized one.
/// 2. Exactly one constructor of any shape selects it.
/// 3. Anything else is ambiguous.
///
/// A type with zero constructors or a private selection fails instead; all
/// three failures abort the whole round.
pub fn resolve(decl: &TypeDecl) -> Result<ResolvedConstructor> {
    if decl.constructors.is_empty() {
        return Err(GenerateError::NoConstructor {
            qualified_name: decl.qualified_name.clone(),
        });
    }

    let mut parameterized = decl.constructors.iter().filter(|c| !c.params.is_empty());

    let selected = match (parameterized.next(), parameterized.next()) {
        (Some(only), None) => only,
        (None, _) if decl.constructors.len() == 1 => &decl.constructors[0],
        _ => {
            return Err(GenerateError::AmbiguousConstructor {
                qualified_name: decl.qualified_name.clone(),
            })
        }
    };

    if selected.visibility == Visibility::Private {
        return Err(GenerateError::PrivateConstructor {
            qualified_name: decl.qualified_name.clone(),
        });
    }

    Ok(ResolvedConstructor {
        name: selected.name.clone(),
        params: selected.params.clone(),
        visibility: selected.visibility,
    })
}
