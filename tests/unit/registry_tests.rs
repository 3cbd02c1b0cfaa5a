/*!
 * Tests for the filter registry and its builder
 */

use std::collections::HashMap;
use std::sync::Arc;

use subfilter::filters::DataRefFilter;
use subfilter::{Filter, FilterRegistry, FilterRegistryBuilder, RegistryError};

/// Test that the default registry carries the full vocabulary in order
#[test]
fn test_withDefaults_shouldExposeCanonicalOrder() {
    let registry = FilterRegistry::with_defaults();

    assert_eq!(
        registry.all_names(),
        vec![
            "control_chars",
            "entities",
            "xliff_tags",
            "html",
            "percent_double_curly",
            "ruby_i18n",
            "twig",
            "dollar_curly",
            "single_curly",
            "percentages",
            "double_square",
            "square_sprintf",
            "sprintf",
            "snails",
            "smart_count",
        ]
    );
    assert_eq!(registry.len(), 15);
}

/// Test that name and instance lookups invert each other
#[test]
fn test_lookups_shouldRoundTripNamesAndInstances() {
    let registry = FilterRegistry::with_defaults();

    for name in registry.all_names() {
        let filter = registry
            .filter_for_name(name)
            .unwrap_or_else(|| panic!("missing filter: {}", name));
        assert_eq!(registry.name_for_filter(&filter), Some(name));
    }
}

/// Test that batch resolution skips unknown names without reordering
#[test]
fn test_filtersForNames_withUnknownEntries_shouldSkipThem() {
    let registry = FilterRegistry::with_defaults();

    let chain = registry.filters_for_names(&["twig", "no_such_filter", "sprintf"]);

    assert_eq!(chain.len(), 2);
    assert_eq!(registry.names_for_filters(&chain), vec!["twig", "sprintf"]);
}

/// Test that batch resolution accepts owned strings too
#[test]
fn test_filtersForNames_withOwnedStrings_shouldResolve() {
    let registry = FilterRegistry::with_defaults();
    let names: Vec<String> = vec!["html".to_string(), "entities".to_string()];

    let chain = registry.filters_for_names(&names);

    assert_eq!(registry.names_for_filters(&chain), vec!["html", "entities"]);
}

/// Test that registering the same instance twice is rejected
#[test]
fn test_build_withDuplicateInstance_shouldFail() {
    let filter: Arc<dyn Filter> = Arc::new(DataRefFilter::new(HashMap::new()));

    let result = FilterRegistry::builder()
        .register(Arc::clone(&filter))
        .register(filter)
        .build();

    assert!(matches!(
        result,
        Err(RegistryError::DuplicateFilter { name }) if name == "data_ref"
    ));
}

/// Test that two distinct instances may not share a name
#[test]
fn test_build_withDuplicateName_shouldFail() {
    let result = FilterRegistry::builder()
        .register(Arc::new(DataRefFilter::new(HashMap::new())))
        .register(Arc::new(DataRefFilter::new(HashMap::new())))
        .build();

    assert!(matches!(result, Err(RegistryError::DuplicateName(name)) if name == "data_ref"));
}

/// Test extending the defaults with a per-job data-ref filter
#[test]
fn test_builder_withDefaultsAndDataRef_shouldAppend() {
    let mut data_refs = HashMap::new();
    data_refs.insert("d1".to_string(), "%s".to_string());

    let registry = FilterRegistryBuilder::with_defaults()
        .register(Arc::new(DataRefFilter::new(data_refs)))
        .build()
        .unwrap();

    assert_eq!(registry.len(), 16);
    assert_eq!(registry.all_names().last(), Some(&"data_ref"));
    assert!(registry.filter_for_name("data_ref").is_some());
}

/// Test that an empty builder yields an empty registry
#[test]
fn test_build_withNoFilters_shouldYieldEmptyRegistry() {
    let registry = FilterRegistry::builder().build().unwrap();

    assert!(registry.is_empty());
    assert!(registry.filter_for_name("twig").is_none());
    assert!(registry.filters_for_names(&["twig"]).is_empty());
}
