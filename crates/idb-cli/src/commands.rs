use std::path::Path;

use anyhow::{Context, Result, bail};
use idb_filter::{
    FilterPanel, IndustryCatalog, SearchRequest, SelectorSurface, SelectorUiState, max_selections,
};
use idb_model::{LocationFilters, QualityFilters, Tier};
use tracing::{debug, info};

use crate::cli::FilterArgs;
use crate::settings::Settings;
use crate::types::{Pick, SelectReport, SelectStep};

/// Settings and catalog shared by every command.
pub struct AppContext {
    pub settings: Settings,
    pub catalog: IndustryCatalog,
}

impl AppContext {
    /// Load settings, then the catalog from `catalog_override`, the settings
    /// file, or the built-in one, in that order.
    pub fn load(config: Option<&Path>, catalog_override: Option<&Path>) -> Result<Self> {
        let settings = Settings::load(config)?;
        let catalog_path = catalog_override.or(settings.catalog.path.as_deref());
        let catalog = match catalog_path {
            Some(path) => IndustryCatalog::from_path(path)
                .with_context(|| format!("load catalog {}", path.display()))?,
            None => IndustryCatalog::builtin(),
        };
        info!(
            categories = catalog.categories.len(),
            industries = catalog.industry_count(),
            "catalog loaded"
        );
        Ok(Self { settings, catalog })
    }

    pub fn with_catalog(settings: Settings, catalog: IndustryCatalog) -> Self {
        Self { settings, catalog }
    }

    /// Tier from the command line, else from settings. Unknown names read as free.
    pub fn tier(&self, arg: Option<&str>) -> Tier {
        match arg {
            Some(name) => Tier::parse_lenient(name),
            None => self.settings.account.tier(),
        }
    }
}

pub fn parse_pick(raw: &str) -> Result<Pick> {
    let raw = raw.trim();
    let (industry, sub) = match raw.split_once('/') {
        Some((industry, sub)) => (industry.trim(), Some(sub.trim())),
        None => (raw, None),
    };
    if industry.is_empty() {
        bail!("pick {raw:?} has no industry");
    }
    Ok(Pick {
        industry_id: industry.to_string(),
        sub_niche_id: sub.filter(|s| !s.is_empty()).map(str::to_string),
    })
}

/// Feed picks through the selector into a filter panel, one event at a time,
/// the way the search page does.
fn apply_picks(
    ctx: &AppContext,
    panel: &mut FilterPanel,
    ui: &mut SelectorUiState,
    picks: &[String],
) -> Result<Vec<SelectStep>> {
    let mut steps = Vec::with_capacity(picks.len());
    for raw in picks {
        let pick = parse_pick(raw)?;
        let mut proposed = None;
        let outcome = {
            let mut surface = SelectorSurface::new(
                &ctx.catalog,
                panel.selections(),
                panel.limit(),
                ui,
                |next| proposed = Some(next.to_vec()),
            );
            let toggled = match &pick.sub_niche_id {
                Some(sub) => surface.toggle_sub_niche(&pick.industry_id, sub),
                None => surface.toggle_industry(&pick.industry_id),
            };
            toggled.with_context(|| format!("pick {raw:?}"))?
        };
        if let Some(next) = proposed {
            panel.set_selections(&next);
        }
        debug!(pick = %raw, outcome = outcome.as_str(), "pick applied");
        steps.push(SelectStep {
            pick: raw.clone(),
            outcome,
            selections: panel.selections().to_vec(),
        });
    }
    Ok(steps)
}

pub fn run_select(ctx: &AppContext, tier: Option<&str>, picks: &[String]) -> Result<SelectReport> {
    let tier = ctx.tier(tier);
    let mut panel = FilterPanel::for_tier(tier);
    let mut ui = SelectorUiState::default();
    let steps = apply_picks(ctx, &mut panel, &mut ui, picks)?;
    Ok(SelectReport {
        tier,
        limit: max_selections(tier),
        steps,
        selections: panel.selections().to_vec(),
        denial: ui.denial,
    })
}

pub fn run_filter(ctx: &AppContext, args: &FilterArgs) -> Result<SearchRequest> {
    let tier = ctx.tier(args.tier.tier.as_deref());
    let mut panel = FilterPanel::for_tier(tier);
    let mut ui = SelectorUiState::default();
    apply_picks(ctx, &mut panel, &mut ui, &args.picks)?;

    panel.set_location(LocationFilters {
        country: args
            .country
            .clone()
            .or_else(|| ctx.settings.search.default_country.clone())
            .map(|code| code.trim().to_uppercase()),
        city: args.city.clone(),
        radius_km: args.radius,
    });
    panel
        .set_quality(QualityFilters {
            has_email: args.has_email.then_some(true),
            has_phone: args.has_phone.then_some(true),
            has_website: args.has_website.then_some(true),
            verified: args.verified.then_some(true),
            score_min: args.min_score,
            score_max: args.max_score,
        })
        .context("quality filters")?;
    for tag in &args.specialties {
        panel.toggle_specialty(tag);
    }

    let state = panel.state()?;
    info!(active = state.active_filter_count(), "filter state built");
    let per_page = args.per_page.unwrap_or(ctx.settings.search.per_page);
    Ok(SearchRequest::new(state)
        .with_page(args.page)
        .with_per_page(per_page))
}
