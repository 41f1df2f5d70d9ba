/// Core data structures for layout comparison
///
/// This module defines the records read from each platform's signature file
/// and the per-type comparison entries built from them.
use indexmap::IndexMap;
use std::collections::HashSet;

/// Platform facts emitted by the signature extraction tool.
///
/// These values are informational only and never take part in comparison.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlatformInfo {
    pub arch_prefix: String,     // "[64-le]"
    pub pointer_size: u32,       // sizeof(void*)
    pub sizeof_long: u32,        // sizeof(long)
    pub sizeof_wchar_t: u32,     // sizeof(wchar_t)
    pub sizeof_long_double: u32, // sizeof(long double)
    pub max_align: u32,          // alignof(max_align_t)
}

/// One type's layout facts on one platform
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TypeRecord {
    pub name: String,
    pub size: u64,
    pub align: u64,
    pub layout_signature: String,
    pub definition_signature: String,
}

/// On-disk shape of a signature file. Every key is required.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SignatureFile {
    pub platform: PlatformInfo,
    pub types: Vec<TypeRecord>,
}

/// A validated platform record, ready for comparison
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlatformRecord {
    /// Human-readable label, e.g. "64-le (sig_x86_64)"
    pub label: String,
    pub info: PlatformInfo,
    /// Types in the order the extraction tool emitted them
    pub types: Vec<TypeRecord>,
}

impl PlatformRecord {
    pub fn new(label: impl Into<String>, info: PlatformInfo, types: Vec<TypeRecord>) -> Self {
        Self { label: label.into(), info, types }
    }
}

/// Whether a type can be shared by raw memory copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Identical layout signature on every platform it was seen on
    Portable,
    /// Layout signatures differ between at least two platforms
    NeedsSerialization,
}

/// Everything known about one type name across all compared platforms.
///
/// Maps only cover the platforms the type appeared on. Match flags are
/// computed from the maps on demand and never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparisonEntry {
    pub name: String,
    pub layout_sigs: IndexMap<String, String>,
    pub definition_sigs: IndexMap<String, String>,
    pub sizes: IndexMap<String, u64>,
    pub aligns: IndexMap<String, u64>,
}

impl ComparisonEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Record one platform's values, replacing any earlier values for that label
    pub fn record(&mut self, label: &str, ty: &TypeRecord) {
        self.layout_sigs.insert(label.to_string(), ty.layout_signature.clone());
        self.definition_sigs.insert(label.to_string(), ty.definition_signature.clone());
        self.sizes.insert(label.to_string(), ty.size);
        self.aligns.insert(label.to_string(), ty.align);
    }

    /// True iff exactly one distinct layout signature was seen
    pub fn layout_match(&self) -> bool {
        distinct_count(self.layout_sigs.values()) == 1
    }

    /// True iff exactly one distinct definition signature was seen
    pub fn definition_match(&self) -> bool {
        distinct_count(self.definition_sigs.values()) == 1
    }

    /// Portability depends on layout alone, never on the logical definition
    pub fn verdict(&self) -> Verdict {
        if self.layout_match() { Verdict::Portable } else { Verdict::NeedsSerialization }
    }

    /// Distinct sizes in first-seen order
    pub fn distinct_sizes(&self) -> Vec<u64> {
        let mut seen = HashSet::new();
        self.sizes.values().copied().filter(|s| seen.insert(*s)).collect()
    }

    /// Labels of the platforms this type appeared on
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.layout_sigs.keys().map(|k| k.as_str())
    }
}

fn distinct_count<'a, T, I>(values: I) -> usize
where
    T: Eq + std::hash::Hash + 'a,
    I: Iterator<Item = &'a T>,
{
    values.collect::<HashSet<_>>().len()
}

impl serde::Serialize for ComparisonEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("ComparisonEntry", 8)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("layout_match", &self.layout_match())?;
        s.serialize_field("definition_match", &self.definition_match())?;
        s.serialize_field("verdict", &self.verdict())?;
        s.serialize_field("layout_sigs", &self.layout_sigs)?;
        s.serialize_field("definition_sigs", &self.definition_sigs)?;
        s.serialize_field("sizes", &self.sizes)?;
        s.serialize_field("aligns", &self.aligns)?;
        s.end()
    }
}

/// Comparison entries keyed by type name, in first-seen order
pub type ComparisonTable = IndexMap<String, ComparisonEntry>;
