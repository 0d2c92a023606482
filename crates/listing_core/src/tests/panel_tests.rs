use super::*;

#[test]
fn catalog_is_unique_and_sorted() {
    let providers = vec![
        Provider::new("a", ["Dentist", "ENT"], 1, 1.0, true),
        Provider::new("b", ["Cardiologist", "Dentist"], 1, 1.0, true),
        Provider::new("c", Vec::<String>::new(), 1, 1.0, true),
    ];
    assert_eq!(
        specialty_catalog(&providers),
        vec!["Cardiologist", "Dentist", "ENT"]
    );
}

#[test]
fn specialty_control_id_rewrites_first_slash_only() {
    assert_eq!(specialty_control_id("Dentist"), "filter-specialty-Dentist");
    assert_eq!(
        specialty_control_id("Ear/Nose/Throat"),
        "filter-specialty-Ear-Nose/Throat"
    );
    assert_eq!(specialty_control_id(""), "filter-specialty-");
}

#[test]
fn checked_state_follows_criteria() {
    let catalog = vec!["Dentist".to_string(), "ENT".to_string()];
    let criteria = Criteria {
        mode: Some(ConsultMode::InPerson),
        specialties: ["ENT".to_string(), "Stale".to_string()].into(),
        sort_key: Some(SortKey::Fees),
    };
    let panel = FilterPanel::build(&catalog, &criteria);

    let checked: Vec<&str> = panel
        .sections()
        .iter()
        .flat_map(|section| section.options.iter())
        .filter(|option| option.checked)
        .map(|option| option.control_id.as_str())
        .collect();
    assert_eq!(
        checked,
        vec!["filter-in-clinic", "filter-specialty-ENT", "sort-fees"]
    );
    assert_eq!(panel.speciality.options.len(), 2);
}

#[test]
fn options_carry_their_toggle_action() {
    let panel = FilterPanel::build(&["ENT".to_string()], &Criteria::default());
    assert_eq!(panel.consultation_mode.header_id, "filter-header-moc");
    assert_eq!(
        panel.consultation_mode.options[0].action,
        FilterAction::ToggleMode(ConsultMode::Remote)
    );
    assert_eq!(panel.consultation_mode.options[0].label, "Video Consult");
    assert_eq!(
        panel.speciality.options[0].action,
        FilterAction::ToggleSpecialty("ENT".into())
    );
    assert_eq!(panel.sort_by.options[1].label, "Experience (High to Low)");
    assert_eq!(panel.sort_by.options[1].control_id, "sort-experience");
}
