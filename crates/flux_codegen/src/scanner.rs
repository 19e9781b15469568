//! # Declaration Scanner
//!
//! Walks the round's symbol table and collects every method carrying a given
//! role's marker. Pure read; an empty result simply skips the role.

use tracing::debug;

use crate::config::RoleSpec;
use crate::symbols::SymbolTable;

/// A method carrying a role marker, flattened into the record the emitter
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedMethod {
    /// Fully-qualified name of the enclosing type.
    pub enclosing_qualified: String,

    /// Simple name of the enclosing type.
    pub enclosing_simple: String,

    /// Package of the enclosing type.
    pub package: String,

    /// Method simple name.
    pub name: String,

    /// Ordered declared parameter types of the method.
    pub params: Vec<String>,
}

/// Collect every method tagged with `role`'s marker, in encounter order:
/// declarations in table order, methods in declaration order. Encounter
/// order is what keeps repeated runs on unchanged input byte-identical.
pub fn scan(role: &RoleSpec, table: &SymbolTable) -> Vec<TaggedMethod> {
    let mut tagged = Vec::new();

    for decl in &table.declarations {
        for method in &decl.methods {
            if method.markers.iter().any(|marker| marker == &role.marker) {
                tagged.push(TaggedMethod {
                    enclosing_qualified: decl.qualified_name.clone(),
                    enclosing_simple: decl.simple_name().to_string(),
                    package: decl.package.clone(),
                    name: method.name.clone(),
                    params: method.params.clone(),
                });
            }
        }
    }

    debug!(
        marker = %role.marker,
        count = tagged.len(),
        "scanned symbol table"
    );
    tagged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::symbols::{MethodDecl, TypeDecl};

    fn method(name: &str, markers: &[&str]) -> MethodDecl {
        MethodDecl {
            name: name.to_string(),
            params: Vec::new(),
            markers: markers.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn decl(qualified: &str, package: &str, methods: Vec<MethodDecl>) -> TypeDecl {
        TypeDecl {
            qualified_name: qualified.to_string(),
            package: package.to_string(),
            constructors: Vec::new(),
            methods,
        }
    }

    #[test]
    fn test_scan_filters_by_marker() {
        let table = SymbolTable {
            declarations: vec![decl(
                "app::ui::Widget",
                "app::ui",
                vec![
                    method("onTap", &["flux::action"]),
                    method("onRefresh", &["flux::reaction"]),
                    method("helper", &[]),
                ],
            )],
        };

        let config = GeneratorConfig::standard();
        let actions = scan(&config.roles[0], &table);

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name, "onTap");
        assert_eq!(actions[0].enclosing_simple, "Widget");
        assert_eq!(actions[0].package, "app::ui");
    }

    #[test]
    fn test_scan_preserves_encounter_order() {
        let table = SymbolTable {
            declarations: vec![
                decl(
                    "app::b::Second",
                    "app::b",
                    vec![method("two", &["flux::action"])],
                ),
                decl(
                    "app::a::First",
                    "app::a",
                    vec![
                        method("three", &["flux::action"]),
                        method("four", &["flux::action"]),
                    ],
                ),
            ],
        };

        let config = GeneratorConfig::standard();
        let names: Vec<_> = scan(&config.roles[0], &table)
            .into_iter()
            .map(|m| m.name)
            .collect();

        assert_eq!(names, vec!["two", "three", "four"]);
    }

    #[test]
    fn test_scan_unmatched_marker_is_empty() {
        let table = SymbolTable {
            declarations: vec![decl(
                "app::ui::Widget",
                "app::ui",
                vec![method("onTap", &["flux::action"])],
            )],
        };

        let config = GeneratorConfig::standard();
        assert!(scan(&config.roles[2], &table).is_empty());
    }
}
