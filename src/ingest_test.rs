/// Tests for signature file ingestion
///
/// Malformed input must fail loudly; nothing is defaulted.

#[cfg(test)]
mod tests {
    use crate::ingest::*;
    use crate::test_support::info_64;
    use std::path::{Path, PathBuf};

    const VALID: &str = r#"{
        "platform": {
            "arch_prefix": "[64-le]",
            "pointer_size": 8,
            "sizeof_long": 8,
            "sizeof_wchar_t": 4,
            "sizeof_long_double": 16,
            "max_align": 16
        },
        "types": [
            { "name": "Point", "size": 8, "align": 4,
              "layout_signature": "[64-le]record[s:8,a:4]{@0:i32,@4:i32}",
              "definition_signature": "record{x:i32,y:i32}" },
            { "name": "Handle", "size": 8, "align": 8,
              "layout_signature": "[64-le]record[s:8,a:8]{@0:ptr}",
              "definition_signature": "record{h:ptr}" }
        ]
    }"#;

    fn with_type(entry: &str) -> String {
        format!(
            r#"{{"platform": {{"arch_prefix": "[64-le]", "pointer_size": 8, "sizeof_long": 8,
                "sizeof_wchar_t": 4, "sizeof_long_double": 16, "max_align": 16}},
                "types": [{}]}}"#,
            entry
        )
    }

    #[test]
    fn test_parse_valid_file() {
        let file = parse_signature_file(VALID).unwrap();
        assert_eq!(file.platform.pointer_size, 8);
        assert_eq!(file.types.len(), 2);
        assert_eq!(file.types[0].name, "Point");
        assert_eq!(file.types[1].definition_signature, "record{h:ptr}");
    }

    #[test]
    fn test_missing_layout_signature_is_fatal() {
        let text = with_type(r#"{"name": "T", "size": 4, "align": 4, "definition_signature": "d"}"#);
        let err = parse_signature_file(&text).unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
        assert!(err.to_string().contains("layout_signature"));
    }

    #[test]
    fn test_mistyped_size_is_fatal() {
        let text = with_type(
            r#"{"name": "T", "size": "four", "align": 4, "layout_signature": "l", "definition_signature": "d"}"#,
        );
        assert!(matches!(parse_signature_file(&text), Err(IngestError::Json(_))));
    }

    #[test]
    fn test_missing_platform_field_is_fatal() {
        let text = r#"{"platform": {"arch_prefix": "[64-le]"}, "types": []}"#;
        assert!(matches!(parse_signature_file(text), Err(IngestError::Json(_))));
    }

    #[test]
    fn test_zero_size_rejected() {
        let text =
            with_type(r#"{"name": "T", "size": 0, "align": 4, "layout_signature": "l", "definition_signature": "d"}"#);
        assert!(matches!(parse_signature_file(&text), Err(IngestError::InvalidType { .. })));
    }

    #[test]
    fn test_duplicate_type_name_rejected() {
        let entry = r#"{"name": "T", "size": 4, "align": 4, "layout_signature": "l", "definition_signature": "d"}"#;
        let text = with_type(&format!("{},{}", entry, entry));
        match parse_signature_file(&text) {
            Err(IngestError::DuplicateType(name)) => assert_eq!(name, "T"),
            other => panic!("expected duplicate type error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_types_is_valid() {
        let text = r#"{"platform": {"arch_prefix": "[32-le]", "pointer_size": 4, "sizeof_long": 4,
            "sizeof_wchar_t": 2, "sizeof_long_double": 8, "max_align": 8}, "types": []}"#;
        let file = parse_signature_file(text).unwrap();
        assert!(file.types.is_empty());
    }

    #[test]
    fn test_platform_label_strips_brackets_and_adds_stem() {
        let label = platform_label(&info_64(), Path::new("/tmp/out/sig_x86_64.json"));
        assert_eq!(label, "64-le (sig_x86_64)");
    }

    #[test]
    fn test_platform_label_strips_brackets_from_both_ends() {
        let mut info = info_64();
        info.arch_prefix = "][64-le[]".to_string();
        assert_eq!(platform_label(&info, Path::new("sig.json")), "64-le (sig)");
    }

    #[test]
    fn test_same_stem_in_different_directories_gets_qualified_labels() {
        let dir = tempfile::tempdir().unwrap();
        let linux = dir.path().join("linux").join("signatures.json");
        let mac = dir.path().join("mac").join("signatures.json");
        let other = dir.path().join("other.json");
        for path in [&linux, &mac, &other] {
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, VALID).unwrap();
        }

        let platforms = load_platforms(&[linux, mac, other]).unwrap();
        let labels: Vec<&str> = platforms.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["64-le (linux/signatures)", "64-le (mac/signatures)", "64-le (other)"]);
    }

    #[test]
    fn test_unresolvable_label_collision_is_fatal() {
        let mut platforms = vec![
            crate::test_support::platform("64-le (sig)", vec![]),
            crate::test_support::platform("64-le (sig)", vec![]),
        ];
        let paths = vec![PathBuf::from("out/sig.json"), PathBuf::from("build/out/sig.json")];

        match ensure_unique_labels(&mut platforms, &paths) {
            Err(IngestError::DuplicateLabel(label)) => assert_eq!(label, "64-le (out/sig)"),
            other => panic!("expected duplicate label error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_platform_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linux_x64.json");
        std::fs::write(&path, VALID).unwrap();

        let record = load_platform(&path).unwrap();
        assert_eq!(record.label, "64-le (linux_x64)");
        assert_eq!(record.types.len(), 2);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_platform(Path::new("/nonexistent/sig.json")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/sig.json"));
    }

    #[test]
    fn test_load_platforms_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, VALID).unwrap();
        std::fs::write(&bad, "{ not json").unwrap();

        let paths: Vec<PathBuf> = vec![good, bad];
        let err = load_platforms(&paths).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }
}
