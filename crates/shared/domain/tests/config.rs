use shopdesk_domain::administration::CookieSameSite;
use shopdesk_domain::config::{LoggingConfig, SearchConfig, ShopConfig, ShopdeskConfig};
use shopdesk_domain::features::FeatureSet;
use shopdesk_domain::shop::ShopConstraint;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let shop = ShopConfig::default();
    assert!(shop.ssl_enabled);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.directory.is_none());
    assert_eq!(logging.max_files, 10);

    let search = SearchConfig::default();
    assert_eq!(search.default_limit, 10);
    assert!(search.aliases.is_empty());

    let cfg = ShopdeskConfig::default();
    assert_eq!(cfg.features, FeatureSet::ALIAS_SEARCH);
    assert_eq!(cfg.multistore.default_context, ShopConstraint::shop(1));
    assert_eq!(cfg.administration.general.front_cookie_lifetime, 480);
    assert_eq!(cfg.administration.general.cookie_samesite, CookieSameSite::Lax);
}

#[test]
fn shopdesk_config_deserializes() {
    let raw = json!({
        "features": ["multistore", "alias_search"],
        "shop": { "ssl_enabled": false },
        "multistore": { "default_context": { "scope": "shop_group", "id": 2 } },
        "administration": {
            "general": { "front_cookie_lifetime": 24, "cookie_samesite": "Strict" },
            "upload_quota": { "max_size_product_image": 8 }
        },
        "search": {
            "aliases": [
                { "alias": "tshirt", "search": "t-shirt" },
                { "alias": "teeshirt", "search": "t-shirt", "active": false }
            ]
        }
    });

    let cfg: ShopdeskConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.features, FeatureSet::ALL);
    assert!(!cfg.shop.ssl_enabled);
    assert_eq!(cfg.multistore.default_context, ShopConstraint::shop_group(2));
    assert_eq!(cfg.administration.general.front_cookie_lifetime, 24);
    assert_eq!(cfg.administration.general.back_cookie_lifetime, 480);
    assert_eq!(cfg.administration.general.cookie_samesite, CookieSameSite::Strict);
    assert_eq!(cfg.administration.upload_quota.max_size_product_image, 8);
    assert_eq!(cfg.administration.upload_quota.max_size_attached_files, 2);
    assert_eq!(cfg.search.aliases.len(), 2);
    assert!(cfg.search.aliases[0].active);
    assert!(!cfg.search.aliases[1].active);
}

#[test]
fn all_shops_context_deserializes_without_id() {
    let scope: ShopConstraint =
        serde_json::from_value(json!({ "scope": "all_shops" })).expect("scope deserialize");
    assert!(scope.is_all_shops());
}
