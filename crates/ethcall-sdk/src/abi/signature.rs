//! Canonical signatures and the per-kind signature index

use serde::Serialize;
use std::collections::BTreeMap;

use super::types::{AbiEntry, AbiParam, EntryKind, StateMutability};

/// Name used when an entry has none. Applied to every kind, not just
/// constructors, so an anonymous event also signs as `constructor(...)`.
pub const DEFAULT_ENTRY_NAME: &str = "constructor";

/// Build `name(type1,type2,...)` for an entry
pub fn canonical_signature(entry: &AbiEntry) -> String {
    let name = if entry.name.is_empty() {
        DEFAULT_ENTRY_NAME
    } else {
        entry.name.as_str()
    };
    let types: Vec<&str> = entry.inputs.iter().map(|p| p.ty.as_str()).collect();
    format!("{}({})", name, types.join(","))
}

/// Indexed signature of one interface entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureEntry {
    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub signature: String,
    /// Declared mutability
    pub state_mutability: Option<StateMutability>,
    /// Ordered inputs
    pub inputs: Vec<AbiParam>,
}

/// Signatures grouped by entry kind, in interface order
#[derive(Debug, Clone, Default)]
pub struct SignatureIndex {
    by_kind: BTreeMap<EntryKind, Vec<SignatureEntry>>,
}

impl SignatureIndex {
    /// Build the index for a list of entries
    pub fn build(entries: &[AbiEntry]) -> Self {
        let mut by_kind: BTreeMap<EntryKind, Vec<SignatureEntry>> = BTreeMap::new();
        for entry in entries {
            by_kind.entry(entry.kind).or_default().push(SignatureEntry {
                signature: canonical_signature(entry),
                state_mutability: entry.state_mutability,
                inputs: entry.inputs.clone(),
            });
        }
        Self { by_kind }
    }

    /// Signatures of one kind, `None` if the interface has none
    pub fn get(&self, kind: EntryKind) -> Option<&[SignatureEntry]> {
        self.by_kind.get(&kind).map(Vec::as_slice)
    }

    /// Function signatures, `None` if the interface has none
    pub fn functions(&self) -> Option<&[SignatureEntry]> {
        self.get(EntryKind::Function)
    }

    /// Check if no entry was indexed
    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }

    /// Functions whose signature starts with `query`.
    ///
    /// With `exact_boundary` the query is matched as `query(`, which pins the
    /// function name but still accepts any parameter list: `transfer` then
    /// matches `transfer(address,uint256)` but not `transferFrom(...)`.
    pub fn matching(&self, query: &str, exact_boundary: bool) -> Vec<&SignatureEntry> {
        let needle = if exact_boundary {
            format!("{query}(")
        } else {
            query.to_string()
        };
        self.functions()
            .unwrap_or_default()
            .iter()
            .filter(|f| f.signature.starts_with(&needle))
            .collect()
    }
}
