/*!
 * Tests for error types and conversions
 */

use subfilter::{ProfileError, RegistryError, SubfilterError};

#[test]
fn test_registryError_duplicateName_shouldDisplayCorrectly() {
    let error = RegistryError::DuplicateName("twig".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Duplicate filter name"));
    assert!(display.contains("twig"));
}

#[test]
fn test_registryError_duplicateFilter_shouldDisplayCorrectly() {
    let error = RegistryError::DuplicateFilter {
        name: "html".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("registered twice"));
    assert!(display.contains("html"));
}

#[test]
fn test_profileError_fromIoError_shouldWrapCorrectly() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let profile_error: ProfileError = io_error.into();
    let display = format!("{}", profile_error);
    assert!(display.contains("Profile file error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_profileError_fromSerdeError_shouldWrapAsParse() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
    let profile_error: ProfileError = serde_error.into();
    let display = format!("{}", profile_error);
    assert!(display.contains("Failed to parse profile"));
}

#[test]
fn test_subfilterError_fromRegistryError_shouldWrapCorrectly() {
    let registry_error = RegistryError::DuplicateName("snails".to_string());
    let subfilter_error: SubfilterError = registry_error.into();
    let display = format!("{}", subfilter_error);
    assert!(display.contains("Registry error"));
    assert!(display.contains("snails"));
}

#[test]
fn test_subfilterError_fromProfileError_shouldWrapCorrectly() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Access denied");
    let subfilter_error: SubfilterError = SubfilterError::from(ProfileError::from(io_error));
    let display = format!("{}", subfilter_error);
    assert!(display.contains("Profile error"));
    assert!(display.contains("Access denied"));
}

#[test]
fn test_subfilterError_fromAnyhowError_shouldWrapAsUnknown() {
    let anyhow_error = anyhow::anyhow!("Something went wrong");
    let subfilter_error: SubfilterError = anyhow_error.into();
    let display = format!("{}", subfilter_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}

#[test]
fn test_subfilterError_unknown_shouldDisplayCorrectly() {
    let error = SubfilterError::Unknown("Unexpected state".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Unexpected state"));
}

#[test]
fn test_registryError_debug_shouldBeImplemented() {
    let error = RegistryError::DuplicateName("test".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("DuplicateName"));
}

#[test]
fn test_subfilterError_debug_shouldBeImplemented() {
    let registry_error = RegistryError::DuplicateName("test".to_string());
    let subfilter_error: SubfilterError = registry_error.into();
    let debug = format!("{:?}", subfilter_error);
    assert!(debug.contains("Registry"));
}
