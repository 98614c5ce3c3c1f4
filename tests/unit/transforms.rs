//! Transforms as the scorer sees them.

use fuzzrank::{
    AsciiFilter, Chain, Lowercase, Metric, Pipeline, Scorer, Transform, TransformKind,
};

#[test]
fn test_transform_kind_names_round_trip() {
    for kind in TransformKind::ALL {
        assert_eq!(kind.name().parse::<TransformKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.name()));
    }
}

#[test]
fn test_pipeline_deserializes_as_list() {
    let pipeline: Pipeline = serde_json::from_str(r#"["ascii-filter", "lowercase"]"#).unwrap();
    assert_eq!(
        pipeline,
        Pipeline(vec![TransformKind::AsciiFilter, TransformKind::Lowercase])
    );
}

#[test]
fn test_boxed_transform_in_scorer() {
    let scorer = Scorer::new(Metric::LevenshteinSimilarity)
        .with_transform(Box::new(Chain(AsciiFilter, Lowercase)) as Box<dyn Transform>);
    // "Ü" is dropped from the candidate and "X" lowercased in the target.
    assert_eq!(scorer.score_pair("Üxyz".as_bytes(), "XYZ"), 1.0);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_folded_on_both_sides() {
    let scorer = Scorer::new(Metric::Jaro).with_transform(Pipeline(vec![
        TransformKind::StripDiacritics,
        TransformKind::Lowercase,
    ]));
    let scores = scorer.score(&["Café", "CAFE", "cafe\u{301}", "dog"][..], "café");
    assert_eq!(&scores[..3], [1.0, 1.0, 1.0]);
    assert_eq!(scores[3], 0.0);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_invalid_utf8_candidate_scored_raw() {
    let scorer = Scorer::new(Metric::LevenshteinSimilarity)
        .with_transform(Pipeline(vec![TransformKind::UnicodeNormalize]));
    let bad: Vec<u8> = vec![b'a', 0xff, b'b'];
    let candidates = vec![bad.clone(), b"ab".to_vec()];
    let scores = scorer.score(&candidates, &bad[..]);
    // the target fails too, so both sides stay raw and the first is exact
    assert_eq!(scores[0], 1.0);
    assert!(scores[1] < 1.0);
}
