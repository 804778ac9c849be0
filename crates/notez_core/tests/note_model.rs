use notez_core::Note;

#[test]
fn note_serde_round_trip_keeps_all_fields() {
    let note = Note {
        id: 3,
        title: "Groceries".to_string(),
        content: "Milk, eggs".to_string(),
        favorite: true,
        category: "Work".to_string(),
        is_pinned: false,
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_100_000,
    };

    let json = serde_json::to_string(&note).unwrap();
    let parsed: Note = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, note);
}

#[test]
fn note_json_uses_schema_field_names() {
    let note = Note {
        id: 1,
        title: String::new(),
        content: String::new(),
        favorite: false,
        category: "General".to_string(),
        is_pinned: true,
        created_at: 0,
        updated_at: 0,
    };

    let value: serde_json::Value = serde_json::to_value(&note).unwrap();
    assert_eq!(value["is_pinned"], serde_json::json!(true));
    assert_eq!(value["category"], serde_json::json!("General"));
}
