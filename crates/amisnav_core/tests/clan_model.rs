use amisnav_core::model::clan::UNDEFINED_SURVIVAL_NOTE;
use amisnav_core::{ClanDraft, ClanRecord, ClanValidationError, IdentityCard};

fn draft(name: &str, meaning: &str) -> ClanDraft {
    ClanDraft {
        name: name.to_string(),
        meaning: meaning.to_string(),
        survival_note: "靠海維生".to_string(),
        origin: "瑞穗溫泉".to_string(),
        lat: 23.4,
        lon: 121.4,
        icon: "📍".to_string(),
        color: "#8b4513".to_string(),
    }
}

#[test]
fn from_draft_derives_slug_id() {
    let record = ClanRecord::from_draft(draft("Raranges", "石柱")).unwrap();
    assert_eq!(record.id, "raranges");
    assert_eq!(record.name, "Raranges");
    assert_eq!(record.meaning, "石柱");
}

#[test]
fn from_draft_id_uses_only_first_name_token() {
    let record = ClanRecord::from_draft(draft("Fata'an Marsh", "樹豆")).unwrap();
    assert_eq!(record.id, "fata'an");
}

#[test]
fn from_draft_rejects_blank_name_and_meaning() {
    let err = ClanRecord::from_draft(draft("  ", "石柱")).unwrap_err();
    assert_eq!(err, ClanValidationError::EmptyName);

    let err = ClanRecord::from_draft(draft("Raranges", "")).unwrap_err();
    assert_eq!(err, ClanValidationError::EmptyMeaning);
}

#[test]
fn from_draft_substitutes_placeholder_survival_note() {
    let mut input = draft("Raranges", "石柱");
    input.survival_note = "  ".to_string();
    let record = ClanRecord::from_draft(input).unwrap();
    assert_eq!(record.survival_note, UNDEFINED_SURVIVAL_NOTE);
}

#[test]
fn clan_record_serialization_uses_expected_wire_fields() {
    let record = ClanRecord::from_draft(draft("Raranges", "石柱")).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], "raranges");
    assert_eq!(json["name"], "Raranges");
    assert_eq!(json["meaning"], "石柱");
    // Survival note keeps the external schema name.
    assert_eq!(json["algo"], "靠海維生");
    assert_eq!(json["origin"], "瑞穗溫泉");
    assert_eq!(json["lat"], 23.4);
    assert_eq!(json["lon"], 121.4);
    assert_eq!(json["icon"], "📍");
    assert_eq!(json["color"], "#8b4513");

    let decoded: ClanRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn identity_card_keeps_non_blank_names() {
    let clan = ClanRecord::from_draft(draft("Raranges", "石柱")).unwrap();
    let card = IdentityCard::new("Panay", "Moli", clan);
    assert_eq!(card.unit_name, "Panay");
    assert_eq!(card.linkage_name, "Moli");
    assert_eq!(card.coords_display(), "23.4, 121.4");
}
