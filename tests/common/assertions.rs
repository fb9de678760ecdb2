//! Assertion helpers for tests.

use brickify::models::{MosaicReport, VariantReport};
use pretty_assertions::assert_eq;

/// Assert a variant's grid, flat array and counts agree with each other
pub fn assert_consistent_variant(variant: &VariantReport, bins: usize) {
    assert_eq!(variant.rows.len(), variant.height);
    assert!(variant.rows.iter().all(|row| row.len() == variant.width));
    assert_eq!(variant.pixels, variant.rows.concat());
    assert_eq!(variant.weights.len(), variant.pixels.len());
    assert_eq!(variant.counts.len(), bins);

    let mut counted = vec![0usize; bins];
    for &index in &variant.pixels {
        counted[index as usize] += 1;
    }
    assert_eq!(counted, variant.counts, "counts disagree with pixels");
}

/// Assert every variant stays within `budget` bricks per color
pub fn assert_within_budget(report: &MosaicReport, budget: usize) {
    for variant in &report.variants {
        assert!(
            variant.counts.iter().all(|&count| count <= budget),
            "Variant contrast={} combined={} exceeds budget {}: {:?}",
            variant.contrast,
            variant.combined,
            budget,
            variant.counts
        );
    }
}

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
