/*!
 * End-to-end round-trip tests over the full default chain
 */

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use subfilter::filters::DataRefFilter;
use subfilter::{markers, EncodeSession, Filter, FilterPipeline, FilterRegistry};

use crate::common;

/// Test the default chain over a suite of realistic segments
#[test]
fn test_defaultChain_overSampleSegments_shouldRoundTrip() {
    let pipeline = common::default_pipeline();

    for segment in common::sample_segments() {
        let layer1 = pipeline.to_layer1(segment);

        assert_eq!(
            pipeline.to_layer0(&layer1),
            segment,
            "round trip failed for {:?}",
            segment
        );
    }
}

/// Test that Layer 1 output is stable under a second encode pass
#[test]
fn test_defaultChain_onItsOwnOutput_shouldBeIdempotent() {
    let pipeline = common::default_pipeline();

    for segment in common::sample_segments() {
        let layer1 = pipeline.to_layer1(segment);
        let again = pipeline.to_layer1(&layer1);

        assert_eq!(again, layer1, "double encode diverged for {:?}", segment);
    }
}

/// Test that Layer 1 text is plain apart from placeholder tags
#[test]
fn test_defaultChain_layer1_shouldContainNoRawCodes() {
    let pipeline = common::default_pipeline();

    let layer1 = pipeline.to_layer1(
        "Hi {{ user }},\nyour score is %d.\tSee <a href=\"${BASE}/help\">help</a> &amp; docs.",
    );

    for raw in ["\n", "\t", "{{", "%d", "${", "&amp;", "<a", "</a>"] {
        assert!(!layer1.contains(raw), "raw code {:?} leaked into Layer 1", raw);
    }
    assert!(layer1.contains("Hi "));
    assert!(layer1.contains("your score is "));
}

/// Test randomized segments assembled from the fragment pool
#[test]
fn test_defaultChain_overRandomizedSegments_shouldRoundTrip() {
    common::init_test_logging();

    let pipeline = common::default_pipeline();
    let pool = common::fragment_pool();
    let mut rng = rand::rng();

    for _ in 0..200 {
        let parts = rng.random_range(1..8);
        let mut segment = String::new();
        for index in 0..parts {
            if index > 0 {
                segment.push_str([" ", "", ", "][rng.random_range(0..3)]);
            }
            segment.push_str(pool[rng.random_range(0..pool.len())]);
        }

        let layer1 = pipeline.to_layer1(&segment);
        assert_eq!(
            pipeline.to_layer0(&layer1),
            segment,
            "randomized round trip failed for {:?}",
            segment
        );
        assert_eq!(
            pipeline.to_layer1(&layer1),
            layer1,
            "randomized idempotence failed for {:?}",
            segment
        );
    }
}

/// Test a per-job chain with the data-ref filter ahead of the defaults
#[test]
fn test_dataRefChain_withJobMap_shouldRoundTrip() {
    let registry = FilterRegistry::with_defaults();

    let mut data_refs = HashMap::new();
    data_refs.insert("d1".to_string(), "<strong>".to_string());
    data_refs.insert("d2".to_string(), "</strong>".to_string());

    let mut chain: Vec<Arc<dyn Filter>> = vec![Arc::new(DataRefFilter::new(data_refs))];
    chain.extend(registry.filters_for_names(&["control_chars", "html", "sprintf"]));
    let pipeline = FilterPipeline::new(chain);

    let input = concat!(
        r#"Save <pc id="1" dataRefStart="d1" dataRefEnd="d2">%d files</pc>"#,
        "\nand <b>relax</b>"
    );
    let layer1 = pipeline.to_layer1(input);

    assert!(layer1.contains(r#"ctype="x-paired-open""#));
    assert!(layer1.contains(r#"x-ref="d1""#));
    assert!(!layer1.contains("<pc"));
    assert!(!layer1.contains("<b>"));
    assert_eq!(pipeline.to_layer0(&layer1), input);
}

/// Test that downstream marker strings survive the trip untouched
#[test]
fn test_defaultChain_withSegmentationMarkers_shouldPreserveThem() {
    let pipeline = common::default_pipeline();

    let input = format!(
        "first {{name}} half{}second half{}nested bit{}",
        markers::SPLIT,
        markers::NESTED_START,
        markers::NESTED_END
    );
    let layer1 = pipeline.to_layer1(&input);

    assert!(layer1.contains(markers::SPLIT));
    assert!(layer1.contains(markers::NESTED_START));
    assert!(layer1.contains(markers::NESTED_END));
    assert_eq!(pipeline.to_layer0(&layer1), input);
}

/// Test that decode order is the exact reverse of encode order
#[test]
fn test_toLayer0_withReorderedChain_shouldNotRestoreNestedCodes() {
    let registry = FilterRegistry::with_defaults();
    let forward = FilterPipeline::new(registry.filters_for_names(&["control_chars", "html"]));
    let reordered = FilterPipeline::new(registry.filters_for_names(&["html", "control_chars"]));

    // The newline inside the tag is protected first, then embedded in the
    // html placeholder payload. Only the reverse order can unwrap both.
    let input = "before <b\n>flow</b> after";
    let layer1 = forward.to_layer1(input);

    assert_eq!(forward.to_layer0(&layer1), input);
    assert_ne!(reordered.to_layer0(&layer1), input);
}

/// Test the empty chain and the empty segment edge cases
#[test]
fn test_pipeline_withEmptyChainOrInput_shouldBeIdentity() {
    let empty_chain = FilterPipeline::new(Vec::new());
    assert_eq!(empty_chain.to_layer1("a {b} c"), "a {b} c");
    assert_eq!(empty_chain.to_layer0("a {b} c"), "a {b} c");

    let pipeline = common::default_pipeline();
    assert_eq!(pipeline.to_layer1(""), "");
    assert_eq!(pipeline.to_layer0(""), "");
}

/// Test that ids keep counting across filters within one segment
#[test]
fn test_encodeSession_acrossChain_shouldMintSequentialIds() {
    let registry = FilterRegistry::with_defaults();
    let twig = registry.filter_for_name("twig").unwrap();
    let snails = registry.filter_for_name("snails").unwrap();

    let mut session = EncodeSession::new();
    let pass1 = twig.encode("{{ a }} then @@b@@", &mut session);
    let pass2 = snails.encode(&pass1, &mut session);

    assert!(pass2.contains(r#"id="ph_1""#));
    assert!(pass2.contains(r#"id="ph_2""#));
    assert_eq!(session.minted(), 2);
}
