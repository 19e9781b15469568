//! # Generation Pipeline
//!
//! The pure core and the thin host adapter around it.
//!
//! `generate` runs scan -> resolve -> emit with no filesystem access, so a
//! resolution failure aborts before anything could be persisted; generation
//! is all-or-nothing for the round. `process_round` adds the host-facing
//! bookkeeping: the announced-marker gate, the write phase, and the boolean
//! exit signal telling the host whether this round was claimed.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::emitter::{self, GeneratedFile};
use crate::error::{GenerateError, Result};
use crate::resolver::{self, ResolvedConstructor};
use crate::scanner;
use crate::symbols::SymbolTable;
use crate::writer;

/// Run one round of generation over the symbol table. Returns every
/// generated file, in role order; roles with no tagged methods produce no
/// file. Pure: nothing is written.
pub fn generate(table: &SymbolTable, config: &GeneratorConfig) -> Result<Vec<GeneratedFile>> {
    let mut resolved: HashMap<String, ResolvedConstructor> = HashMap::new();
    let mut files = Vec::new();

    for role in &config.roles {
        let tagged = scanner::scan(role, table);
        if tagged.is_empty() {
            debug!(type_name = %role.generated_type_name, "no tagged methods, skipping role");
            continue;
        }

        // Resolve each distinct enclosing type once; resolution is a pure
        // function of the type, so the memo can be shared across roles.
        for method in &tagged {
            if !resolved.contains_key(&method.enclosing_qualified) {
                let decl = table.declaration(&method.enclosing_qualified).ok_or_else(|| {
                    GenerateError::UnresolvedType {
                        qualified_name: method.enclosing_qualified.clone(),
                    }
                })?;
                resolved.insert(method.enclosing_qualified.clone(), resolver::resolve(decl)?);
            }
        }

        files.push(emitter::emit(role, &tagged, &resolved, config)?);
    }

    Ok(files)
}

/// Host adapter for one compilation round.
///
/// Returns `Ok(false)` without touching the filesystem when none of the
/// configured markers appear in the round's announced set; otherwise
/// generates, writes every file under `output_root`, and returns `Ok(true)`
/// so the host does not re-dispatch the same round.
pub fn process_round(
    table: &SymbolTable,
    announced_markers: &[String],
    config: &GeneratorConfig,
    output_root: &Path,
) -> Result<bool> {
    let claimed = config
        .roles
        .iter()
        .any(|role| announced_markers.iter().any(|m| m == &role.marker));
    if !claimed {
        debug!("no supported markers announced for this round");
        return Ok(false);
    }

    let files = generate(table, config)?;
    for file in &files {
        let path = writer::write(file, output_root)?;
        info!(path = %path.display(), "wrote generated dispatch type");
    }

    info!(files = files.len(), "compilation round complete");
    Ok(true)
}
