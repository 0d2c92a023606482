use listing_core::{decode, encode, FilterSession, Location, QueryParams, UrlLocation};
use shared::domain::{ConsultMode, Provider, SortKey};

const FEED: &str = r#"[
    {"name": "Dr. Meera Iyer", "speciality": ["General Physician"], "experience": "18 Years of experience", "fees": "₹ 500", "videoConsult": true},
    {"name": "Dr. Karan Shah", "speciality": ["Dentist"], "experience": "6 Years of experience", "fees": "₹ 300", "videoConsult": false},
    {"name": "Dr. Nila Bose", "speciality": ["Dentist", "Orthodontist"], "experience": "11 Years of experience", "fees": "₹ 300", "videoConsult": true},
    {"name": "Dr. Omar Khan", "speciality": ["Ear/Nose/Throat"], "experience": "25 Years of experience", "fees": "₹ 900", "videoConsult": false},
    {"name": "Dr. Unlisted", "experience": 2, "fees": 100}
]"#;

fn names<'a>(view: impl Iterator<Item = &'a Provider>) -> Vec<&'a str> {
    view.map(|p| p.name.as_str()).collect()
}

#[test]
fn shared_link_restores_listing_and_edits_rewrite_it() {
    let providers = Provider::list_from_json(FEED).expect("feed");
    let location = UrlLocation::parse(
        "https://directory.example/doctors?consultType=Video+Consult&specialty=Dentist&specialty=General+Physician&sortBy=fees",
    )
    .expect("url");

    let mut session = FilterSession::open(providers, location);
    assert_eq!(
        names(session.view()),
        vec!["Dr. Nila Bose", "Dr. Meera Iyer"]
    );

    session.toggle_mode(ConsultMode::Remote);
    session.toggle_sort(SortKey::Experience);
    assert_eq!(
        names(session.view()),
        vec!["Dr. Meera Iyer", "Dr. Nila Bose", "Dr. Karan Shah"]
    );
    assert_eq!(
        session.location().as_str(),
        "https://directory.example/doctors?sortBy=experience&specialty=Dentist&specialty=General+Physician"
    );

    let reopened_at = session.into_location();
    let reopened = FilterSession::open(
        Provider::list_from_json(FEED).expect("feed"),
        reopened_at.clone(),
    );
    assert_eq!(reopened.criteria(), &decode(&reopened_at.query()));
    assert_eq!(
        names(reopened.view()),
        vec!["Dr. Meera Iyer", "Dr. Nila Bose", "Dr. Karan Shah"]
    );
}

#[test]
fn stale_specialty_link_shows_nothing_without_failing() {
    let providers = Provider::list_from_json(FEED).expect("feed");
    let location =
        UrlLocation::parse("https://directory.example/doctors?specialty=Homeopath").expect("url");

    let mut session = FilterSession::open(providers, location);
    assert_eq!(session.view().len(), 0);
    assert!(session
        .panel()
        .speciality
        .options
        .iter()
        .all(|option| !option.checked));

    session.toggle_specialty("Homeopath");
    assert_eq!(session.view().len(), 5);
    assert_eq!(session.location().url().query(), None);
}

#[test]
fn unknown_consult_type_is_ignored() {
    let criteria = decode(&QueryParams::parse("consultType=bogus"));
    assert_eq!(criteria.mode, None);
}

#[test]
fn fee_ties_keep_feed_order() {
    let providers = Provider::list_from_json(FEED).expect("feed");
    let location =
        UrlLocation::parse("https://directory.example/doctors?sortBy=fees").expect("url");
    let session = FilterSession::open(providers, location);
    assert_eq!(
        names(session.view()),
        vec![
            "Dr. Unlisted",
            "Dr. Karan Shah",
            "Dr. Nila Bose",
            "Dr. Meera Iyer",
            "Dr. Omar Khan"
        ]
    );
}

#[test]
fn slash_specialties_survive_the_address_bar() {
    let providers = Provider::list_from_json(FEED).expect("feed");
    let location = UrlLocation::parse("https://directory.example/doctors").expect("url");
    let mut session = FilterSession::open(providers, location);

    session.toggle_specialty("Ear/Nose/Throat");
    assert_eq!(names(session.view()), vec!["Dr. Omar Khan"]);
    assert_eq!(
        session.location().url().query(),
        Some("specialty=Ear%2FNose%2FThroat")
    );

    let round_trip = decode(&encode(session.criteria(), &QueryParams::new()));
    assert_eq!(&round_trip, session.criteria());
}
