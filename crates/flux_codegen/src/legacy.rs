//! # Legacy Template Emitter
//!
//! The superseded per-declaration generator, kept for reference as an
//! alternate emitter strategy behind the same scanner/resolver contract.
//! The canonical pipeline never calls into it.
//!
//! ## Old strategy (this module)
//!
//! - One file per tagged declaration, named `Generated<TypeName>.rs`
//! - Written into the tagged declaration's own package
//! - Raw string templating, underscore-prefixed forwarding names
//! - Ignores the resolved constructor's parameters entirely
//!
//! ## Current strategy (`emitter`)
//!
//! - One dispatch type per role in the framework package
//! - Token-stream emission with pretty-printed, deterministic output
//! - `<TypeName>_<method>` forwarding names, provider-resolved arguments

use crate::config::RoleSpec;
use crate::emitter::GeneratedFile;
use crate::scanner::TaggedMethod;

/// Emit the old-style per-declaration file for one tagged method.
#[deprecated(note = "use the token-stream emitter in `emitter` instead")]
pub fn emit_declaration_file(role: &RoleSpec, method: &TaggedMethod) -> GeneratedFile {
    let source = format!(
        r#"pub struct Generated{simple};

impl Generated{simple} {{
    pub fn _{name}(&self) {{
        {qualified}::new().{name}({argument}::default());
    }}
}}
"#,
        simple = method.enclosing_simple,
        name = method.name,
        qualified = method.enclosing_qualified,
        argument = role.argument_type,
    );

    GeneratedFile {
        package: method.package.clone(),
        type_name: format!("Generated{}", method.enclosing_simple),
        source,
    }
}
