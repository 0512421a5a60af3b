//! Tests for idb-model types.

use idb_model::{FilterState, IndustrySelection, Tier};

fn restaurant() -> IndustrySelection {
    IndustrySelection::new("restaurant", "Restaurant").unwrap()
}

#[test]
fn filter_state_serializes_only_set_fields() {
    let state = FilterState {
        selections: vec![restaurant()],
        country: Some("US".to_string()),
        quality_score_min: Some(70),
        ..Default::default()
    };
    insta::assert_json_snapshot!(state, @r#"
    {
      "selections": [
        {
          "industryId": "restaurant",
          "industryName": "Restaurant"
        }
      ],
      "country": "US",
      "qualityScoreMin": 70
    }
    "#);
}

#[test]
fn sub_niche_selection_serializes_camel_case() {
    let selection = restaurant().with_sub_niche("italian", "Italian");
    insta::assert_json_snapshot!(selection, @r#"
    {
      "industryId": "restaurant",
      "industryName": "Restaurant",
      "subNicheId": "italian",
      "subNicheName": "Italian"
    }
    "#);
}

#[test]
fn filter_state_reads_api_payload() {
    let json = r#"{
        "selections": [{"industryId": "gym", "industryName": "Gym"}],
        "hasPhone": true,
        "qualityScoreMax": 90
    }"#;
    let state: FilterState = serde_json::from_str(json).expect("deserialize filter state");
    assert_eq!(state.selections.len(), 1);
    assert_eq!(state.has_phone, Some(true));
    assert_eq!(state.quality_score_max, Some(90));
    assert_eq!(state.country, None);
    assert_eq!(state.validate(), Ok(()));
}

#[test]
fn tier_serializes_lowercase() {
    let json = serde_json::to_string(&Tier::Business).expect("serialize tier");
    assert_eq!(json, "\"business\"");
    let tier: Tier = serde_json::from_str("\"starter\"").expect("deserialize tier");
    assert_eq!(tier, Tier::Starter);
}
