use annot_core::model::*;

fn make_field(id: &str, value: &str) -> Field {
    let mut field = Field::new(id, FieldType::Text, DataType::String);
    field.field_value = value.to_string();
    field
}

fn make_document() -> FormAnnotation {
    let mut annotation = FormAnnotation::new(FormMetadata {
        form_id: "1040".to_string(),
        form_name: "US Individual".to_string(),
        year: 2023,
        page_count: 2,
        page_size: PageSize {
            width: 612.0,
            height: 792.0,
            unit: "pt".to_string(),
        },
    });
    annotation.pages.push(Page {
        page_number: 1,
        fields: vec![make_field("a", "alpha"), make_field("b", "beta")],
    });
    annotation.pages.push(Page {
        page_number: 2,
        fields: vec![make_field("c", "alpha")],
    });
    annotation
}

#[test]
fn test_all_fields_document_order() {
    let annotation = make_document();
    let ids: Vec<String> = annotation
        .all_fields()
        .into_iter()
        .map(|f| f.field_id)
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_field_by_id_first_match() {
    let mut annotation = make_document();
    // Duplicate id on a later page; the earlier one wins.
    annotation.pages[1].fields.push(make_field("a", "shadowed"));

    let field = annotation.field_by_id("a").unwrap();
    assert_eq!(field.field_value, "alpha");
}

#[test]
fn test_field_by_id_miss_is_none() {
    let annotation = make_document();
    assert!(annotation.field_by_id("nonexistent").is_none());
}

#[test]
fn test_fields_by_value_collects_across_pages() {
    let annotation = make_document();
    let matches = annotation.fields_by_value("alpha");
    let ids: Vec<&str> = matches.iter().map(|f| f.field_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_fields_by_value_miss_is_empty() {
    let annotation = make_document();
    assert!(annotation.fields_by_value("nonexistent").is_empty());
}

#[test]
fn test_fields_on_page_matches_by_number_not_position() {
    let mut annotation = make_document();
    annotation.pages.reverse(); // stored order now [2, 1]

    let fields = annotation.fields_on_page(1);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].field_id, "a");
}

#[test]
fn test_fields_on_page_miss_is_empty() {
    let annotation = make_document();
    assert!(annotation.fields_on_page(99).is_empty());
}

#[test]
fn test_fields_on_page_mut_aliases_storage() {
    let mut annotation = make_document();
    annotation
        .fields_on_page_mut(2)
        .unwrap()
        .push(make_field("d", "delta"));

    assert_eq!(annotation.fields_on_page(2).len(), 2);
    assert_eq!(annotation.all_fields().len(), 4);
}

#[test]
fn test_field_by_id_mut_mutation_visible_in_all_fields() {
    let mut annotation = make_document();
    annotation.field_by_id_mut("b").unwrap().field_value = "updated".to_string();

    let all = annotation.all_fields();
    assert_eq!(all[1].field_id, "b");
    assert_eq!(all[1].field_value, "updated");
}

#[test]
fn test_fields_by_value_returns_independent_copies() {
    let annotation = make_document();
    let mut matches = annotation.fields_by_value("alpha");
    matches[0].field_value = "mutated copy".to_string();

    // The document is untouched by mutation of the returned clones.
    assert_eq!(annotation.field_by_id("a").unwrap().field_value, "alpha");
}

#[test]
fn test_fields_by_group() {
    let mut annotation = make_document();
    annotation.field_by_id_mut("a").unwrap().group_id = Some("g1".to_string());
    annotation.field_by_id_mut("c").unwrap().group_id = Some("g1".to_string());

    let ids: Vec<String> = annotation
        .fields_by_group("g1")
        .into_iter()
        .map(|f| f.field_id)
        .collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert!(annotation.fields_by_group("nonexistent").is_empty());
}

#[test]
fn test_group_by_id() {
    let mut annotation = make_document();
    annotation.field_groups.push(FieldGroup {
        group_id: "filing_status".to_string(),
        group_type: "radio".to_string(),
        field_ids: vec!["a".to_string(), "b".to_string()],
    });

    let group = annotation.group_by_id("filing_status").unwrap();
    assert_eq!(group.group_type, "radio");
    assert_eq!(group.field_ids.len(), 2);
    assert!(annotation.group_by_id("nonexistent").is_none());
}

#[test]
fn test_group_reference_not_validated() {
    // A field may point at a group that does not exist; nothing rejects it.
    let mut annotation = make_document();
    annotation.field_by_id_mut("a").unwrap().group_id = Some("dangling".to_string());

    assert!(annotation.group_by_id("dangling").is_none());
    assert_eq!(annotation.fields_by_group("dangling").len(), 1);
}
