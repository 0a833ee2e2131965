use shopdesk_domain::features::FeatureSet;

#[test]
fn names_map_to_flags() {
    assert_eq!(FeatureSet::from("multistore"), FeatureSet::MULTISTORE);
    assert_eq!(FeatureSet::from("alias_search"), FeatureSet::ALIAS_SEARCH);
    assert_eq!(FeatureSet::from("*"), FeatureSet::ALL);
    assert_eq!(FeatureSet::from("unknown"), FeatureSet::empty());
}

#[test]
fn deserializes_from_bits_and_names() {
    let from_bits: FeatureSet = serde_json::from_str("1").expect("bits");
    assert_eq!(from_bits, FeatureSet::MULTISTORE);

    let from_names: FeatureSet =
        serde_json::from_str(r#"["alias_search", "nope"]"#).expect("names");
    assert_eq!(from_names, FeatureSet::ALIAS_SEARCH);

    assert_eq!(serde_json::to_string(&FeatureSet::ALL).expect("serialize"), "3");
}
