//! Declaration records produced by the line extractor

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// One member of a field-bearing aggregate, taken positionally as two tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub field_type: String,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// A named aggregate type and its field list
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub fields: Vec<Field>,
    /// File the declaration was found in
    pub file: PathBuf,
    /// 1-based line of the introduction line
    pub line: usize,
}

impl TypeDeclaration {
    /// Names of the fields in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// A named function
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub file: PathBuf,
    pub line: usize,
}

/// Occurrence counts of tracked keywords
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordCounts {
    counts: BTreeMap<String, usize>,
}

impl KeywordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `keyword`
    pub fn record(&mut self, keyword: &str) {
        *self.counts.entry(keyword.to_string()).or_insert(0) += 1;
    }

    /// Add every count from `other` into this one
    pub fn merge(&mut self, other: &KeywordCounts) {
        for (keyword, count) in &other.counts {
            *self.counts.entry(keyword.clone()).or_insert(0) += count;
        }
    }

    pub fn get(&self, keyword: &str) -> usize {
        self.counts.get(keyword).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// File-local result of one extraction task
///
/// Each worker owns its `FileScan` outright; nothing in it is shared until the
/// coordinator merges it after every worker has joined.
#[derive(Debug)]
pub struct FileScan {
    pub path: PathBuf,
    pub types: Vec<TypeDeclaration>,
    pub functions: Vec<FunctionDeclaration>,
    pub keywords: KeywordCounts,
    /// Records that were repaired or discarded while extracting
    pub warnings: Vec<ScanError>,
}

impl FileScan {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            types: Vec::new(),
            functions: Vec::new(),
            keywords: KeywordCounts::new(),
            warnings: Vec::new(),
        }
    }

    pub fn declaration_count(&self) -> usize {
        self.types.len() + self.functions.len()
    }
}
