/*!
 * Tests for chain profiles and their JSON persistence
 */

use subfilter::{ChainProfile, FilterRegistry, ProfileError, ProfileSet};

use crate::common;

/// Test that every builtin profile resolves fully against the defaults
#[test]
fn test_builtin_shouldResolveFullyAgainstDefaultRegistry() {
    let registry = FilterRegistry::with_defaults();
    let profiles = ProfileSet::builtin();

    assert_eq!(profiles.names(), vec!["default", "minimal", "markup", "variables"]);

    for profile in &profiles.profiles {
        let chain = registry.filters_for_names(&profile.filters);
        assert_eq!(
            chain.len(),
            profile.filters.len(),
            "profile '{}' names a filter the registry lacks",
            profile.name
        );
    }
}

/// Test that the default profile covers the whole vocabulary in order
#[test]
fn test_builtinDefault_shouldMatchRegistryOrder() {
    let registry = FilterRegistry::with_defaults();
    let profiles = ProfileSet::builtin();

    let default = profiles.get("default").unwrap();
    assert_eq!(default.filters, registry.all_names());
}

/// Test JSON round trip including the optional description
#[test]
fn test_fromJson_afterSerialize_shouldRoundTrip() {
    let mut profiles = ProfileSet::new();
    profiles.add(
        ChainProfile::new("api_docs", &["control_chars", "entities", "single_curly"])
            .with_description("Docs with brace variables"),
    );
    profiles.add(ChainProfile::new("bare", &["control_chars"]));

    let json = serde_json::to_string(&profiles).unwrap();
    let restored = ProfileSet::from_json(&json).unwrap();

    assert_eq!(restored, profiles);
    assert_eq!(restored.get("bare").unwrap().description, "");
}

/// Test that a missing description deserializes to the default
#[test]
fn test_fromJson_withoutDescription_shouldDefaultToEmpty() {
    let json = r#"{"profiles": [{"name": "p", "filters": ["twig"]}]}"#;

    let profiles = ProfileSet::from_json(json).unwrap();

    assert_eq!(profiles.get("p").unwrap().description, "");
    assert_eq!(profiles.get("p").unwrap().filters, vec!["twig"]);
}

/// Test that malformed JSON surfaces as a parse error
#[test]
fn test_fromJson_withMalformedInput_shouldFailWithParseError() {
    let result = ProfileSet::from_json("{not json");

    assert!(matches!(result, Err(ProfileError::Parse(_))));
}

/// Test that a missing file surfaces as an io error
#[test]
fn test_fromFile_withMissingPath_shouldFailWithIoError() {
    let result = ProfileSet::from_file("/nonexistent/profiles.json");

    assert!(matches!(result, Err(ProfileError::Io(_))));
}

/// Test save and reload through a real file
#[test]
fn test_saveAndFromFile_shouldRoundTripThroughDisk() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("profiles.json");

    let mut profiles = ProfileSet::builtin();
    profiles.add(ChainProfile::new("job_42", &["control_chars", "html", "sprintf"]));
    profiles.save(&path).unwrap();

    let restored = ProfileSet::from_file(&path).unwrap();

    assert_eq!(restored, profiles);
    assert_eq!(
        restored.get("job_42").unwrap().filters,
        vec!["control_chars", "html", "sprintf"]
    );
}

/// Test that adding a profile under an existing name replaces it
#[test]
fn test_add_withExistingName_shouldReplaceProfile() {
    let mut profiles = ProfileSet::new();
    profiles.add(ChainProfile::new("p", &["twig"]));
    profiles.add(ChainProfile::new("p", &["twig", "sprintf"]));

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles.get("p").unwrap().filters, vec!["twig", "sprintf"]);
}
