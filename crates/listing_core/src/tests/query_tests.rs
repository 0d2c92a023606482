use super::*;

#[test]
fn parses_repeated_keys_in_order() {
    let query = QueryParams::parse("?specialty=Dentist&sortBy=fees&specialty=ENT");
    assert_eq!(query.get("sortBy"), Some("fees"));
    assert_eq!(
        query.get_all("specialty").collect::<Vec<_>>(),
        vec!["Dentist", "ENT"]
    );
    assert_eq!(query.len(), 3);
}

#[test]
fn parse_decodes_plus_and_percent_escapes() {
    let query = QueryParams::parse("consultType=Video+Consult&specialty=General%20Physician");
    assert_eq!(query.get("consultType"), Some("Video Consult"));
    assert_eq!(query.get("specialty"), Some("General Physician"));
}

#[test]
fn get_returns_first_value() {
    let query = QueryParams::parse("sortBy=fees&sortBy=experience");
    assert_eq!(query.get("sortBy"), Some("fees"));
    assert_eq!(query.get("missing"), None);
}

#[test]
fn set_overwrites_first_and_drops_later_duplicates() {
    let mut query = QueryParams::parse("a=1&sortBy=fees&b=2&sortBy=experience");
    query.set("sortBy", "experience");
    assert_eq!(query.to_query_string(), "a=1&sortBy=experience&b=2");
}

#[test]
fn set_appends_absent_key() {
    let mut query = QueryParams::parse("a=1");
    query.set("sortBy", "fees");
    assert_eq!(query.to_query_string(), "a=1&sortBy=fees");
}

#[test]
fn delete_removes_every_occurrence() {
    let mut query = QueryParams::parse("specialty=A&page=2&specialty=B");
    query.delete("specialty");
    assert!(!query.contains_key("specialty"));
    assert_eq!(query.to_query_string(), "page=2");
}

#[test]
fn serializes_spaces_as_plus() {
    let mut query = QueryParams::new();
    query.append("consultType", "In Clinic");
    query.append("specialty", "Ear/Nose & Throat");
    assert_eq!(
        query.to_string(),
        "consultType=In+Clinic&specialty=Ear%2FNose+%26+Throat"
    );
}

#[test]
fn empty_and_garbage_input_never_fails() {
    assert!(QueryParams::parse("").is_empty());
    assert!(QueryParams::parse("?").is_empty());
    let garbage = QueryParams::parse("&&=&%zz");
    assert!(garbage.iter().all(|(k, _)| k.is_empty() || k == "%zz"));
}
