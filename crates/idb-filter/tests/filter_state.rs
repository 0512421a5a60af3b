//! Filter-state composition and search request shaping.

use idb_filter::{
    CatalogMatch, FilterPanel, IndustryCatalog, SearchRequest, SelectionLimit, SelectorSurface,
    SelectorUiState, build_filter_state,
};
use idb_model::{FilterState, LocationFilters, ModelError, QualityFilters, SpecialtyFilters, Tier};

#[test]
fn quality_range_passes_through_unchanged() {
    let quality = QualityFilters {
        score_min: Some(70),
        score_max: Some(100),
        ..Default::default()
    };
    let state = build_filter_state(
        &[],
        &LocationFilters::default(),
        &quality,
        &SpecialtyFilters::default(),
    )
    .unwrap();
    assert_eq!(
        state,
        FilterState {
            quality_score_min: Some(70),
            quality_score_max: Some(100),
            ..Default::default()
        }
    );
    insta::assert_json_snapshot!(state, @r#"
    {
      "selections": [],
      "qualityScoreMin": 70,
      "qualityScoreMax": 100
    }
    "#);
}

#[test]
fn inverted_quality_range_is_refused() {
    let quality = QualityFilters {
        score_min: Some(60),
        score_max: Some(40),
        ..Default::default()
    };
    let err = build_filter_state(
        &[],
        &LocationFilters::default(),
        &quality,
        &SpecialtyFilters::default(),
    )
    .unwrap_err();
    assert_eq!(err, ModelError::QualityRangeInverted { min: 60, max: 40 });
}

#[test]
fn selector_feeds_panel_through_callback() {
    let catalog = IndustryCatalog::builtin();
    let mut panel = FilterPanel::for_tier(Tier::Free);
    let mut ui = SelectorUiState::default();

    let mut proposed = None;
    let mut surface = SelectorSurface::new(
        &catalog,
        panel.selections(),
        panel.limit(),
        &mut ui,
        |next| proposed = Some(next.to_vec()),
    );
    surface.toggle_sub_niche("restaurant", "italian").unwrap();
    surface.toggle_industry("gym").unwrap();
    drop(surface);

    if let Some(next) = proposed {
        panel.set_selections(&next);
    }
    panel.set_location(LocationFilters {
        country: Some("US".to_string()),
        city: Some("Austin".to_string()),
        radius_km: Some(25),
    });
    panel.toggle_specialty("Family owned");

    let request = SearchRequest::new(panel.state().unwrap()).with_per_page(50);
    insta::assert_json_snapshot!(request, @r#"
    {
      "filters": {
        "selections": [
          {
            "industryId": "gym",
            "industryName": "Gym"
          }
        ],
        "country": "US",
        "city": "Austin",
        "radius": 25,
        "specialties": [
          "Family owned"
        ]
      },
      "page": 1,
      "perPage": 50
    }
    "#);
    assert_eq!(panel.active_filter_count(), 5);
}

#[test]
fn search_hits_convert_to_selections() {
    let catalog = IndustryCatalog::builtin();
    let hits = catalog.search("ital");
    let labels: Vec<String> = hits.iter().map(CatalogMatch::label).collect();
    assert_eq!(labels, vec!["Restaurant › Italian".to_string()]);
    let selection = hits[0].to_selection().unwrap();
    assert_eq!(selection.sub_niche_id.as_deref(), Some("italian"));

    let mut ui = SelectorUiState::default();
    let mut surface =
        SelectorSurface::new(&catalog, &[], SelectionLimit::Unlimited, &mut ui, |_| {});
    surface.set_search("SALON");
    let ids: Vec<&str> = surface
        .search_results()
        .iter()
        .map(|h| h.industry.id.as_str())
        .collect();
    assert_eq!(ids, vec!["hair_salon", "nail_salon"]);
}
