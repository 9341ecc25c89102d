//! Behavioural tests for browsing the tutor directory over HTTP.

#[path = "tutor_browsing_bdd/mod.rs"]
mod tutor_browsing_bdd_support;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tutor_browsing_bdd_support::{
    BrowseState, StatusCode, TutorCount, TutorDirectory, load_directory,
};
use tutorlink::ClientError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[fixture]
fn browse_state() -> BrowseState {
    BrowseState::default()
}

#[given("a marketplace API with {count:TutorCount} maths tutors")]
fn seed_directory(browse_state: &BrowseState, count: TutorCount) {
    let mock = Mock::given(method("GET"))
        .and(path("/api/tutors"))
        .and(query_param("subject", "maths"))
        .respond_with(TutorDirectory {
            subject: "maths",
            total: count.value(),
        });
    browse_state.harness().mount(mock);
}

#[given("a marketplace API that fails with status {status:StatusCode}")]
fn seed_failing_directory(browse_state: &BrowseState, status: StatusCode) {
    let mock = Mock::given(method("GET"))
        .and(path("/api/tutors"))
        .respond_with(
            ResponseTemplate::new(status.value())
                .set_body_json(serde_json::json!({"message": "maintenance"})),
        );
    browse_state.harness().mount(mock);
}

#[given("the saved query {query}")]
fn remember_query(browse_state: &BrowseState, query: String) {
    browse_state.query.set(query.trim_matches('"').to_owned());
}

#[when("the client loads the directory")]
fn load(browse_state: &BrowseState) {
    match load_directory(browse_state) {
        Ok(page) => {
            let _had_previous_error = browse_state.error.take().is_some();
            browse_state.result.set(page);
        }
        Err(error) => {
            let _had_previous_result = browse_state.result.take().is_some();
            browse_state.error.set(error);
        }
    }
}

#[then("{count:TutorCount} tutors are listed")]
fn assert_tutor_count(browse_state: &BrowseState, count: TutorCount) {
    let actual = browse_state
        .result
        .with_ref(|page| page.items.len())
        .unwrap_or_else(|| panic!("tutor listing missing"));

    assert_eq!(
        actual,
        usize::try_from(count.value()).unwrap_or(usize::MAX),
        "tutor count mismatch"
    );
}

#[then("the footer reads {label}")]
fn assert_footer_label(browse_state: &BrowseState, label: String) {
    let actual = browse_state
        .result
        .with_ref(|page| page.footer.range().label())
        .unwrap_or_else(|| panic!("tutor listing missing"));

    assert_eq!(actual, label.trim_matches('"'), "footer label mismatch");
}

#[then("the controls read {controls}")]
fn assert_controls(browse_state: &BrowseState, controls: String) {
    let actual = browse_state
        .result
        .with_ref(|page| page.footer.render_controls())
        .unwrap_or_else(|| panic!("tutor listing missing"));

    assert_eq!(actual, controls.trim_matches('"'), "controls mismatch");
}

#[then("the error indicates an invalid filter")]
fn assert_invalid_filter(browse_state: &BrowseState) {
    let error = browse_state
        .error
        .get()
        .unwrap_or_else(|| panic!("expected an error"));

    assert!(
        matches!(error, ClientError::InvalidFilter { .. }),
        "expected InvalidFilter, got {error:?}"
    );
}

#[then("the error indicates an API failure")]
fn assert_api_failure(browse_state: &BrowseState) {
    let error = browse_state
        .error
        .get()
        .unwrap_or_else(|| panic!("expected an error"));

    match error {
        ClientError::Api { message } => {
            assert!(
                message.contains("maintenance"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected Api variant, got {other:?}"),
    }
}

#[then("the marketplace API received no requests")]
fn assert_no_requests(browse_state: &BrowseState) {
    let received = browse_state.harness().received_request_count();

    assert_eq!(received, 0, "expected no requests, got {received}");
}

#[scenario(path = "tests/features/tutor_browsing.feature", index = 0)]
fn restoring_shared_query(browse_state: BrowseState) {
    let _ = browse_state;
}

#[scenario(path = "tests/features/tutor_browsing.feature", index = 1)]
fn last_page_partially_filled(browse_state: BrowseState) {
    let _ = browse_state;
}

#[scenario(path = "tests/features/tutor_browsing.feature", index = 2)]
fn malformed_query_rejected(browse_state: BrowseState) {
    let _ = browse_state;
}

#[scenario(path = "tests/features/tutor_browsing.feature", index = 3)]
fn backend_failure_surfaces(browse_state: BrowseState) {
    let _ = browse_state;
}
