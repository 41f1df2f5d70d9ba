/// Shared fixtures for unit tests
use crate::types::{PlatformInfo, PlatformRecord, TypeRecord};

pub fn info_64() -> PlatformInfo {
    PlatformInfo {
        arch_prefix: "[64-le]".to_string(),
        pointer_size: 8,
        sizeof_long: 8,
        sizeof_wchar_t: 4,
        sizeof_long_double: 16,
        max_align: 16,
    }
}

pub fn info_32() -> PlatformInfo {
    PlatformInfo {
        arch_prefix: "[32-le]".to_string(),
        pointer_size: 4,
        sizeof_long: 4,
        sizeof_wchar_t: 2,
        sizeof_long_double: 8,
        max_align: 8,
    }
}

pub fn ty(name: &str, size: u64, layout: &str, definition: &str) -> TypeRecord {
    TypeRecord {
        name: name.to_string(),
        size,
        align: size.min(8).max(1),
        layout_signature: layout.to_string(),
        definition_signature: definition.to_string(),
    }
}

pub fn platform(label: &str, types: Vec<TypeRecord>) -> PlatformRecord {
    PlatformRecord::new(label, info_64(), types)
}
