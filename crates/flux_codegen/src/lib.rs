//! # flux_codegen
//!
//! Compile-time source generator for the flux runtime.
//!
//! Once per compilation round the host build tool hands over a symbol table
//! snapshot. The pipeline scans it for methods tagged with one of the three
//! role markers (Action, Reaction, FailureReaction), validates each enclosing
//! type's construction path, and emits one generated dispatch type per role
//! containing a forwarding function per tagged method.
//!
//! ## Pipeline
//!
//! 1. **Scan** ([`scanner`]): collect tagged methods per role, in encounter
//!    order
//! 2. **Resolve** ([`resolver`]): pick the single eligible constructor of
//!    each enclosing type, or abort the round
//! 3. **Emit** ([`emitter`]): build one dispatch type per role as formatted
//!    Rust source
//! 4. **Write** ([`writer`]): persist under the generated-sources root,
//!    package paths mirrored as directories
//!
//! The core is pure: [`generate`] maps a [`SymbolTable`] and a
//! [`GeneratorConfig`] to generated files without touching the filesystem.
//! [`process_round`] is the thin host adapter adding the announced-marker
//! gate, the write phase, and the claimed-round exit signal.

pub mod config;
pub mod emitter;
pub mod error;
pub mod legacy;
pub mod pipeline;
pub mod resolver;
pub mod scanner;
pub mod symbols;
pub mod writer;

pub use config::{normalize_output_root, GeneratorConfig, RoleKind, RoleSpec};
pub use emitter::GeneratedFile;
pub use error::{GenerateError, Result};
pub use pipeline::{generate, process_round};
pub use scanner::TaggedMethod;
pub use symbols::{ConstructorDecl, MethodDecl, SymbolTable, TypeDecl, Visibility};
