use shopdesk::domain::config::ShopdeskConfig;
use shopdesk::domain::features::FeatureSet;
use shopdesk::domain::shop::ShopConstraint;
use shopdesk::features::administration::Administration;
use shopdesk::features::search::{Search, SearchResponse};
use shopdesk::kernel::security::options::OptionsAuthorizer;
use shopdesk::{InitError, init, options_checker};

#[test]
fn default_config_registers_every_slice() {
    let state = init(ShopdeskConfig::default()).expect("init should succeed");

    assert_eq!(state.slice_names(), vec!["Administration", "Search"]);
    assert!(state.get_slice::<Administration>().is_some());
    assert!(state.get_slice::<Search>().is_some());
}

#[test]
fn search_slice_follows_feature_set() {
    let mut config = ShopdeskConfig::default();
    config.features = FeatureSet::MULTISTORE;

    let state = init(config).expect("init should succeed");
    assert!(state.get_slice::<Search>().is_none());
    assert_eq!(state.slice_names(), vec!["Administration"]);
}

#[test]
fn search_slice_answers_from_configured_aliases() {
    let mut config = ShopdeskConfig::default();
    config.search.aliases =
        vec![shopdesk::domain::search::Alias::new("tshirt", "t-shirt")];

    let state = init(config).expect("init should succeed");
    let search = state.try_get_slice::<Search>().expect("search slice");

    let response = search.service.search_aliases_for_association("shirt", None).expect("search");
    assert_eq!(response, SearchResponse::Found(vec!["t-shirt".to_owned()]));
}

#[test]
fn invalid_administration_settings_fail_init() {
    let mut config = ShopdeskConfig::default();
    config.administration.upload_quota.max_size_product_image = -1;

    assert!(matches!(init(config), Err(InitError::Administration { .. })));
}

#[test]
fn options_checker_uses_configured_multistore_flag() {
    let mut config = ShopdeskConfig::default();
    let single = init(config.clone()).expect("init should succeed");
    assert!(options_checker(&single, ShopConstraint::shop(1)).can_be_changed());

    config.features = FeatureSet::ALL;
    let multi = init(config).expect("init should succeed");
    assert!(!options_checker(&multi, ShopConstraint::shop(1)).can_be_changed());
    assert!(!options_checker(&multi, ShopConstraint::shop_group(1)).can_be_changed());
    assert!(options_checker(&multi, ShopConstraint::all_shops()).can_be_changed());
}

#[test]
fn enabled_features_are_listed() {
    assert!(shopdesk::features::is_enabled("administration"));
    assert!(shopdesk::features::is_enabled("search"));
    assert!(!shopdesk::features::is_enabled("multistore"));
}
