//! Contract interface: signature lookup, selector resolution, call encoding

use ethcall_primitives::{str_to_hex, HEX_PREFIX};
use std::collections::BTreeMap;
use std::fmt;

use crate::abi::{
    encode_function_call, selector_from_hash, AbiEntry, AbiParam, AbiValue, EntryKind,
    SignatureEntry, SignatureIndex,
};
use crate::hasher::{HashProvider, LocalHasher};
use crate::SdkError;

/// Selector and inputs of one matched function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFunction {
    /// "0x" + 8 hex digits
    pub selector: String,
    /// Ordered inputs
    pub inputs: Vec<AbiParam>,
}

struct LoadedInterface {
    entries: Vec<AbiEntry>,
    index: SignatureIndex,
}

/// A loaded contract interface bound to a hash provider
pub struct ContractAbi {
    address: Option<String>,
    interface: Option<LoadedInterface>,
    hasher: Box<dyn HashProvider>,
}

impl ContractAbi {
    /// Create an empty contract helper using `hasher` for selectors
    pub fn new(hasher: impl HashProvider + 'static) -> Self {
        Self {
            address: None,
            interface: None,
            hasher: Box::new(hasher),
        }
    }

    /// Create an empty contract helper that hashes in-process
    pub fn new_local() -> Self {
        Self::new(LocalHasher)
    }

    /// Create a contract helper and load `json` into it
    pub fn from_json(json: &str, hasher: impl HashProvider + 'static) -> Result<Self, SdkError> {
        let mut contract = Self::new(hasher);
        contract.load_interface(json)?;
        Ok(contract)
    }

    /// Attach the deployed contract address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the deployed contract address
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
    }

    /// Get the contract address
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Parse an interface JSON array and rebuild the signature index.
    ///
    /// Replaces any previously loaded interface. On error the previous
    /// interface is kept.
    pub fn load_interface(&mut self, json: &str) -> Result<(), SdkError> {
        let entries: Vec<AbiEntry> =
            serde_json::from_str(json).map_err(|e| SdkError::Parse(e.to_string()))?;
        let index = SignatureIndex::build(&entries);

        tracing::debug!(
            "Loaded contract interface: {} entries, {} functions",
            entries.len(),
            index.functions().map_or(0, <[SignatureEntry]>::len)
        );

        self.interface = Some(LoadedInterface { entries, index });
        Ok(())
    }

    /// Check if an interface has been loaded
    pub fn is_loaded(&self) -> bool {
        self.interface.is_some()
    }

    /// Raw entries of the loaded interface
    pub fn entries(&self) -> &[AbiEntry] {
        self.interface
            .as_ref()
            .map(|i| i.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Function signatures, `None` when nothing is loaded or there are none
    pub fn list_functions(&self) -> Option<&[SignatureEntry]> {
        self.signatures(EntryKind::Function)
    }

    /// Signatures of any entry kind
    pub fn signatures(&self, kind: EntryKind) -> Option<&[SignatureEntry]> {
        self.interface.as_ref()?.index.get(kind)
    }

    /// Functions whose signature starts with `query` (or `query(` with
    /// `exact_boundary`). No hashing involved.
    pub fn matching_functions(&self, query: &str, exact_boundary: bool) -> Vec<&SignatureEntry> {
        self.interface
            .as_ref()
            .map(|i| i.index.matching(query, exact_boundary))
            .unwrap_or_default()
    }

    /// Selector of a canonical signature, via the hash provider
    pub async fn selector(&self, signature: &str) -> Result<String, SdkError> {
        let data = format!("{HEX_PREFIX}{}", str_to_hex(signature.as_bytes()));
        let hash = self.hasher.keccak256(&data).await?;
        selector_from_hash(&hash)
    }

    /// Resolve the selector of every function matching `query`.
    ///
    /// The hash provider is called once per match; the first failure aborts
    /// the whole resolution.
    pub async fn resolve_selectors(
        &self,
        query: &str,
        exact_boundary: bool,
    ) -> Result<BTreeMap<String, ResolvedFunction>, SdkError> {
        let matches = self.matching_functions(query, exact_boundary);
        tracing::debug!("Resolving selectors for {:?}: {} matches", query, matches.len());

        if matches.is_empty() {
            return Err(SdkError::NoMatch(query.to_string()));
        }

        let mut resolved = BTreeMap::new();
        for function in matches {
            let selector = self.selector(&function.signature).await?;
            resolved.insert(
                function.signature.clone(),
                ResolvedFunction {
                    selector,
                    inputs: function.inputs.clone(),
                },
            );
        }
        Ok(resolved)
    }

    /// Encode calldata for every function whose signature starts with `query`.
    ///
    /// The same positional `args` are used for each match. Overloads whose
    /// input count differs from `args.len()` cannot take the call and are
    /// skipped; if none is left the call fails with `InvalidInput`.
    pub async fn encode_call(
        &self,
        query: &str,
        args: &[AbiValue],
    ) -> Result<BTreeMap<String, String>, SdkError> {
        let matches = self.matching_functions(query, false);
        if matches.is_empty() {
            return Err(SdkError::NoMatch(query.to_string()));
        }

        let candidates: Vec<&SignatureEntry> = matches
            .iter()
            .copied()
            .filter(|f| f.inputs.len() == args.len())
            .collect();

        if candidates.is_empty() {
            let signatures: Vec<&str> = matches.iter().map(|f| f.signature.as_str()).collect();
            return Err(SdkError::InvalidInput(format!(
                "{} arguments fit none of {}",
                args.len(),
                signatures.join(", ")
            )));
        }

        let mut calls = BTreeMap::new();
        for function in candidates {
            let selector = self.selector(&function.signature).await?;
            let data = encode_function_call(&selector, &function.inputs, args)?;
            tracing::debug!("Encoded {} ({} hex chars)", function.signature, data.len());
            calls.insert(function.signature.clone(), data);
        }
        Ok(calls)
    }
}

impl Default for ContractAbi {
    fn default() -> Self {
        Self::new_local()
    }
}

impl fmt::Debug for ContractAbi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractAbi")
            .field("address", &self.address)
            .field("entries", &self.entries().len())
            .finish_non_exhaustive()
    }
}
