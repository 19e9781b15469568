//! # Generator Configuration
//!
//! The role set and output conventions, carried as an explicit value rather
//! than process-wide constants so alternate role sets can be exercised in
//! isolation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Module path the generated dispatch types are declared in.
pub const DISPATCH_PACKAGE: &str = "flux::dispatch";

/// Registry the generated code pulls constructor arguments from.
pub const PROVIDER_TYPE: &str = "flux::provide::ProviderRegistry";

/// Path segment the host hands us inside its staging tree.
const STAGING_SEGMENT: &str = "staging";

/// Path segment the real generated-sources root uses instead.
const GENERATED_SEGMENT: &str = "generated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleKind {
    Action,
    Reaction,
    FailureReaction,
}

/// Everything the pipeline needs to know about one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSpec {
    pub kind: RoleKind,

    /// Fully-qualified identity of the marker attribute, e.g. `flux::action`.
    pub marker: String,

    /// Name of the dispatch type generated for this role.
    pub generated_type_name: String,

    /// Fully-qualified type synthesized as the call argument when a tagged
    /// method declares a parameter.
    pub argument_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Package every generated dispatch type is declared in.
    pub package: String,

    /// Provider registry type referenced by generated constructor arguments.
    pub provider_type: String,

    /// Ordered role set; one generated type per role observed in a round.
    pub roles: Vec<RoleSpec>,
}

impl GeneratorConfig {
    /// The standard flux role set: Action, Reaction, FailureReaction.
    pub fn standard() -> Self {
        Self {
            package: DISPATCH_PACKAGE.to_string(),
            provider_type: PROVIDER_TYPE.to_string(),
            roles: vec![
                RoleSpec {
                    kind: RoleKind::Action,
                    marker: "flux::action".to_string(),
                    generated_type_name: "ActionMethods".to_string(),
                    argument_type: "flux::ActionEvent".to_string(),
                },
                RoleSpec {
                    kind: RoleKind::Reaction,
                    marker: "flux::reaction".to_string(),
                    generated_type_name: "ReactionMethods".to_string(),
                    argument_type: "flux::ReactionEvent".to_string(),
                },
                RoleSpec {
                    kind: RoleKind::FailureReaction,
                    marker: "flux::failure_reaction".to_string(),
                    generated_type_name: "FailureReactionMethods".to_string(),
                    argument_type: "flux::FailureEvent".to_string(),
                },
            ],
        }
    }

    /// Marker identities this generator claims, in role order.
    pub fn supported_markers(&self) -> Vec<String> {
        self.roles.iter().map(|role| role.marker.clone()).collect()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rewrite the host-supplied output root into the real generated-sources
/// root: the host announces its staging directory, generated sources land in
/// the sibling `generated` tree.
pub fn normalize_output_root(root: &Path) -> PathBuf {
    root.iter()
        .map(|segment| {
            if segment == STAGING_SEGMENT {
                OsStr::new(GENERATED_SEGMENT)
            } else {
                segment
            }
        })
        .collect()
}
