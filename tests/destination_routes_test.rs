mod common;

use actix_web::test;
use serde_json::json;

use common::TestApp;

#[actix_rt::test]
async fn test_get_all_destinations() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/destinations").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let destinations = body.as_array().unwrap();
    assert_eq!(destinations.len(), 3);
    assert_eq!(destinations[0]["type"], "beach");
}

#[actix_rt::test]
async fn test_eligible_destinations_with_interests() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/destinations/eligible")
        .set_json(&json!({
            "budget": 2000,
            "interests": ["Culture", "Cuisine"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bali, Indonesia", "Tokyo, Japan"]);
}

#[actix_rt::test]
async fn test_eligible_destinations_without_interests_is_empty() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/destinations/eligible")
        .set_json(&json!({ "budget": 10000 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_rt::test]
async fn test_plan_destination() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/destinations/plan?seed=3")
        .set_json(&json!({
            "destination": "tokyo, japan",
            "budget": 2000,
            "duration": 4
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["destination"], "Tokyo, Japan");
    let activities = body["activities"].as_array().unwrap();
    assert_eq!(activities.len(), 4);
    for (i, activity) in activities.iter().enumerate() {
        assert_eq!(activity["day"], i as u64 + 1);
        let cost = activity["cost"].as_f64().unwrap();
        assert!((50.0..=250.0).contains(&cost));
    }
    assert_eq!(body["budget_status"], "within_budget");
}

#[actix_rt::test]
async fn test_plan_unknown_destination() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/destinations/plan")
        .set_json(&json!({
            "destination": "Atlantis",
            "budget": 2000,
            "duration": 4
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_plan_rejects_zero_duration() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/destinations/plan")
        .set_json(&json!({
            "destination": "Swiss Alps",
            "budget": 2000,
            "duration": 0
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_plan_duration_cap() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/destinations/plan?seed=4")
        .set_json(&json!({
            "destination": "Bali, Indonesia",
            "budget": 3000,
            "duration": 30
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["activities"].as_array().unwrap().len(), 30);

    for duration in [31_i64, 4_294_967_295] {
        let req = test::TestRequest::post()
            .uri("/api/destinations/plan")
            .set_json(&json!({
                "destination": "Bali, Indonesia",
                "budget": 1000,
                "duration": duration
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("duration"));
    }
}

#[actix_rt::test]
async fn test_plan_malformed_body_returns_json_error() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/destinations/plan")
        .set_json(&json!({
            "destination": "Swiss Alps",
            "budget": "lots",
            "duration": 3
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}
