// Integration tests for the HTTP surface

use actix_web::{http::StatusCode, test, web, App};
use internship_match::core::Matcher;
use internship_match::routes::{configure_routes, AppState};
use internship_match::services::{BookmarkStore, CatalogProvider, StaticCatalog};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

fn test_state() -> AppState {
    AppState {
        catalog: Arc::new(CatalogProvider::Static(StaticCatalog::builtin().unwrap())),
        matcher: Matcher::default(),
        bookmarks: Arc::new(BookmarkStore::new(100, Duration::from_secs(60))),
    }
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await
    };
}

fn developer_profile() -> Value {
    json!({
        "age": 22,
        "educationLevel": "Graduate",
        "skills": ["JavaScript", "React"],
        "sectors": ["Technology"],
        "locationPreference": "Bangalore, Karnataka"
    })
}

#[actix_web::test]
async fn test_recommend_end_to_end() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "profile": developer_profile() }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let recommendations = body["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty());
    assert!(recommendations.len() <= 5);
    assert_eq!(body["total_matches"], recommendations.len());
    assert_eq!(body["total_candidates"], 12);

    // Software Development Intern: 2/5 skills, sector, city
    assert_eq!(recommendations[0]["id"], "2");
    assert_eq!(recommendations[0]["matchScore"], 76);
    assert_eq!(recommendations[0]["matchedSkills"], json!(["JavaScript", "React"]));
    assert_eq!(recommendations[0]["matchedSector"], "Technology");

    for pair in recommendations.windows(2) {
        assert!(pair[0]["matchScore"].as_u64() >= pair[1]["matchScore"].as_u64());
    }

    assert!(body["skill_gaps"].as_array().unwrap().len() <= 6);
    assert!(body["processing_time"].as_f64().unwrap() >= 0.0);
}

#[actix_web::test]
async fn test_recommend_rejects_ineligible_age() {
    let app = test_app!();

    let mut profile = developer_profile();
    profile["age"] = json!(30);

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "profile": profile }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_recommend_empty_profile_returns_no_matches() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({
            "profile": {
                "age": 21,
                "educationLevel": "12th Pass",
                "skills": [],
                "sectors": [],
                "locationPreference": "Pune, Maharashtra"
            }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total_matches"], 0);
    assert_eq!(body["skill_gaps"].as_array().unwrap().len(), 6);
}

#[actix_web::test]
async fn test_skill_gaps_endpoint() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/skill-gaps")
        .set_json(json!({ "profile": developer_profile(), "limit": 3 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["skills"],
        json!(["Digital Marketing", "Social Media", "Content Writing"])
    );
}

#[actix_web::test]
async fn test_list_and_get_internships() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/internships").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 12);

    let req = test::TestRequest::get().uri("/internships/4").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["title"], "Business Analyst Intern");

    let req = test::TestRequest::get().uri("/internships/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_stats_endpoint() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total_internships"], 12);
    assert!(body["sectors"].as_array().unwrap().contains(&json!("Finance")));
    assert!(body["avg_stipend"].as_f64().unwrap() > 0.0);
}

#[actix_web::test]
async fn test_health_and_root() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "active");
}

#[actix_web::test]
async fn test_bookmark_session_lifecycle() {
    let app = test_app!();

    let req = test::TestRequest::post().uri("/sessions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let session = body["session_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/sessions/{}/saved/2", session))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["saved"], json!(["2"]));

    // Saving again is a no-op
    let req = test::TestRequest::put()
        .uri(&format!("/sessions/{}/saved/2", session))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/sessions/{}/saved/2", session))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["saved"], true);
    assert_eq!(body["internship_id"], "2");

    let req = test::TestRequest::put()
        .uri(&format!("/sessions/{}/saved/999", session))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/sessions/{}/saved/2", session))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 0);

    let req = test::TestRequest::get()
        .uri(&format!("/sessions/{}/saved/2", session))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["saved"], false);

    let req = test::TestRequest::delete()
        .uri(&format!("/sessions/{}", session))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/sessions/{}/saved", session))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/sessions/{}/saved/2", session))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
