//! # Symbol Table Snapshot
//!
//! Plain-data model of the declarations visible in one compilation round.
//!
//! The host build tool serializes this snapshot once per round; the pipeline
//! only ever reads it. Declaration order is meaningful: forwarding functions
//! are emitted in the order their methods appear here.

use serde::{Deserialize, Serialize};

/// Everything the host announced for one compilation round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolTable {
    pub declarations: Vec<TypeDecl>,
}

impl SymbolTable {
    /// Look up a declaration by its fully-qualified name.
    pub fn declaration(&self, qualified_name: &str) -> Option<&TypeDecl> {
        self.declarations
            .iter()
            .find(|decl| decl.qualified_name == qualified_name)
    }
}

/// One declared type: its construction paths and its methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Fully-qualified name, e.g. `app::ui::Widget`.
    pub qualified_name: String,

    /// Module path the type lives in, e.g. `app::ui`.
    pub package: String,

    #[serde(default)]
    pub constructors: Vec<ConstructorDecl>,

    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

impl TypeDecl {
    /// Last segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit("::")
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

/// A declared construction path (an associated constructor function).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorDecl {
    /// Constructor name; `new` by convention.
    #[serde(default = "default_constructor_name")]
    pub name: String,

    /// Ordered parameter type list, fully qualified.
    #[serde(default)]
    pub params: Vec<String>,

    #[serde(default)]
    pub visibility: Visibility,
}

fn default_constructor_name() -> String {
    "new".to_string()
}

/// A declared method and the role markers attached to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,

    /// Ordered parameter type list, fully qualified.
    #[serde(default)]
    pub params: Vec<String>,

    /// Fully-qualified marker identities attached to this method.
    #[serde(default)]
    pub markers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Crate,
    Private,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name_strips_package() {
        let decl = TypeDecl {
            qualified_name: "app::ui::Widget".to_string(),
            package: "app::ui".to_string(),
            constructors: Vec::new(),
            methods: Vec::new(),
        };
        assert_eq!(decl.simple_name(), "Widget");
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let json = r#"{
            "declarations": [{
                "qualified_name": "app::ui::Widget",
                "package": "app::ui",
                "constructors": [{"params": []}],
                "methods": [{"name": "onTap", "markers": ["flux::action"]}]
            }]
        }"#;

        let table: SymbolTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.declarations.len(), 1);

        let decl = table.declaration("app::ui::Widget").unwrap();
        assert_eq!(decl.constructors[0].name, "new");
        assert_eq!(decl.constructors[0].visibility, Visibility::Public);
        assert_eq!(decl.methods[0].markers, vec!["flux::action".to_string()]);
    }
}
