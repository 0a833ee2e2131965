use crate::args::ContextArg;
use anyhow::{Context, Result, bail};
use shopdesk::domain::config::ShopdeskConfig;
use shopdesk::domain::features::FeatureSet;
use shopdesk::features::search::{Search, SearchResponse};
use shopdesk::kernel::security::options::OptionsAuthorizer;

pub fn can_change(
    mut config: ShopdeskConfig,
    multistore: bool,
    context: Option<ContextArg>,
    id: u32,
) -> Result<()> {
    if multistore {
        config.features.insert(FeatureSet::MULTISTORE);
    }
    let shop_context = context.map_or(config.multistore.default_context, |c| c.constraint(id));

    let state = shopdesk::init(config)?;
    let checker = shopdesk::options_checker(&state, shop_context);
    checker.ensure_can_be_changed().with_context(|| format!("context {shop_context}"))?;

    println!("allowed in {shop_context}");
    Ok(())
}

pub fn search_aliases(config: ShopdeskConfig, query: &str, limit: Option<usize>) -> Result<()> {
    let state = shopdesk::init(config)?;
    let search = state
        .try_get_slice::<Search>()
        .context("Alias search is disabled; add `alias_search` to `features`")?;

    let response = search.service.search_aliases_for_association(query, limit)?;
    if let SearchResponse::BadRequest(message) = &response {
        bail!("{message}");
    }

    println!("{}", serde_json::to_string(&response.to_json())?);
    Ok(())
}
