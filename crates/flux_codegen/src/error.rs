use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("no constructors found on {qualified_name}")]
    NoConstructor { qualified_name: String },

    #[error("constructor on {qualified_name} is private")]
    PrivateConstructor { qualified_name: String },

    #[error("multiple constructors found on {qualified_name}; align the type with the flux construction convention")]
    AmbiguousConstructor { qualified_name: String },

    #[error("cannot parse type path: {path}")]
    InvalidTypePath { path: String },

    #[error("invalid identifier in symbol table: {name}")]
    InvalidIdentifier { name: String },

    #[error("enclosing type {qualified_name} is missing from the resolution set")]
    UnresolvedType { qualified_name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
