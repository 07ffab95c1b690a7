mod common;

use actix_web::test;

use common::TestApp;

#[actix_rt::test]
async fn test_health_endpoint() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["catalog"]["purposes"], 5);
    assert_eq!(body["catalog"]["transportation_modes"], 4);
}

#[actix_rt::test]
async fn test_options_endpoint() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/options").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["purposes"],
        serde_json::json!(["leisure", "business", "adventure", "relaxation", "cultural"])
    );
    assert!(body["dietary"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("vegan")));
    assert_eq!(body["transportation"].as_array().unwrap().len(), 4);
    assert_eq!(body["interests"].as_array().unwrap().len(), 5);
}

#[actix_rt::test]
async fn test_method_not_allowed() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/generate")
        .to_request();

    let resp = test::call_service(&app, req).await;
    // actix-web answers 404 for a route registered only for another method
    assert!(resp.status() == 404 || resp.status() == 405);
}

#[actix_rt::test]
async fn test_cors_headers() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("Origin", "http://localhost:3000"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(resp
        .headers()
        .contains_key("access-control-allow-origin"));
}
