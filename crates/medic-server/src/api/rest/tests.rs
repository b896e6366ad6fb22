//! Tests for REST API components

#![cfg(test)]

use super::router::create_router;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use medic_runtime::MemoryRepository;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app() -> Router {
    create_router(Arc::new(MemoryRepository::new()))
}

fn request(method: Method, uri: &str, body: Option<JsonValue>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: Response) -> JsonValue {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let response = send(&app, request(Method::GET, "/health", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_patient_is_404() {
    let app = app();
    let response = send(&app, request(Method::GET, "/patients/42", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/patients")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = send(&app, req).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_draft_flow_over_http() {
    let app = app();

    // Register two statuses and a conditional transition between them
    let response = send(
        &app,
        request(Method::POST, "/statuses", Some(json!({"name": "admitted"}))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let admitted = body_json(response).await["id"].as_i64().unwrap();

    let response = send(
        &app,
        request(Method::POST, "/statuses", Some(json!({"name": "stable"}))),
    )
    .await;
    let stable = body_json(response).await["id"].as_i64().unwrap();

    let response = send(
        &app,
        request(
            Method::POST,
            "/transitions",
            Some(json!({
                "from_status": admitted,
                "to_status": stable,
                "predicate": {
                    "LessThan": {
                        "left": {"Unknown": "pulse"},
                        "right": {"Known": "100"}
                    }
                }
            })),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Create a patient and walk the draft workflow
    let response = send(
        &app,
        request(
            Method::POST,
            "/patients",
            Some(json!({"name": "alex", "attributes": {"pulse": "088"}})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let patient = body_json(response).await["id"].as_i64().unwrap();

    let draft_uri = format!("/patients/{patient}/status/draft");

    // No draft yet
    let response = send(&app, request(Method::GET, &draft_uri, None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Write and read back the initial draft
    let response = send(
        &app,
        request(
            Method::PUT,
            &draft_uri,
            Some(json!({"status_id": admitted, "text": "overnight observation"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, request(Method::GET, &draft_uri, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status_id"].as_i64().unwrap(), admitted);
    assert_eq!(body["draft"], true);
    assert_eq!(body["text"], "overnight observation");

    // Commit it; the patient now carries the status and no draft
    let response = send(&app, request(Method::POST, &draft_uri, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status_id"].as_i64().unwrap(), admitted);
    assert_eq!(body["draft"], false);

    let response = send(&app, request(Method::GET, &format!("/patients/{patient}"), None)).await;
    let body = body_json(response).await;
    assert_eq!(body["status_id"].as_i64().unwrap(), admitted);
    assert_eq!(body["has_draft"], false);

    // The low pulse makes "stable" reachable
    let response = send(
        &app,
        request(Method::GET, &format!("{draft_uri}/states"), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["status_id"].as_i64().unwrap(), stable);

    // Commit the follow-up draft through the eligible transition
    send(
        &app,
        request(
            Method::PUT,
            &draft_uri,
            Some(json!({"status_id": stable, "text": "responding well"})),
        ),
    )
    .await;
    let response = send(&app, request(Method::POST, &draft_uri, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_blocked_transition_is_conflict() {
    let app = app();

    let admitted = body_json(
        send(
            &app,
            request(Method::POST, "/statuses", Some(json!({"name": "admitted"}))),
        )
        .await,
    )
    .await["id"]
        .as_i64()
        .unwrap();
    let discharged = body_json(
        send(
            &app,
            request(Method::POST, "/statuses", Some(json!({"name": "discharged"}))),
        )
        .await,
    )
    .await["id"]
        .as_i64()
        .unwrap();

    send(
        &app,
        request(
            Method::POST,
            "/transitions",
            Some(json!({
                "from_status": admitted,
                "to_status": discharged,
                "predicate": {
                    "Has": {
                        "left": {"Unknown": "flags"},
                        "right": {"Known": "signed-off"}
                    }
                }
            })),
        ),
    )
    .await;

    let patient = body_json(
        send(
            &app,
            request(
                Method::POST,
                "/patients",
                Some(json!({"name": "alex", "attributes": {"flags": "reviewed"}})),
            ),
        )
        .await,
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let draft_uri = format!("/patients/{patient}/status/draft");
    send(
        &app,
        request(Method::PUT, &draft_uri, Some(json!({"status_id": admitted}))),
    )
    .await;
    send(&app, request(Method::POST, &draft_uri, None)).await;

    send(
        &app,
        request(Method::PUT, &draft_uri, Some(json!({"status_id": discharged}))),
    )
    .await;
    let response = send(&app, request(Method::POST, &draft_uri, None)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_uncovered_rule_is_422() {
    let app = app();

    let medicine = json!({
        "name": "amoxicillin",
        "compatibility": {
            "Not": {
                "operand": {
                    "Has": {
                        "left": {"Unknown": "allergies"},
                        "right": {"Known": "penicillin"}
                    }
                }
            }
        }
    });
    let response = send(&app, request(Method::POST, "/medicines", Some(medicine))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The patient carries no "allergies" attribute at all
    let patient = body_json(
        send(
            &app,
            request(Method::POST, "/patients", Some(json!({"name": "alex"}))),
        )
        .await,
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let response = send(
        &app,
        request(
            Method::GET,
            &format!("/patients/{patient}/status/draft/medicine"),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("allergies"));
}

#[tokio::test]
async fn test_medicine_report_flags_compatibility() {
    let app = app();

    send(
        &app,
        request(
            Method::POST,
            "/medicines",
            Some(json!({
                "name": "amoxicillin",
                "compatibility": {
                    "Not": {
                        "operand": {
                            "Has": {
                                "left": {"Unknown": "allergies"},
                                "right": {"Known": "penicillin"}
                            }
                        }
                    }
                }
            })),
        ),
    )
    .await;
    send(
        &app,
        request(Method::POST, "/medicines", Some(json!({"name": "saline"}))),
    )
    .await;

    let patient = body_json(
        send(
            &app,
            request(
                Method::POST,
                "/patients",
                Some(json!({
                    "name": "alex",
                    "attributes": {"allergies": "penicillin; latex"}
                })),
            ),
        )
        .await,
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let response = send(
        &app,
        request(
            Method::GET,
            &format!("/patients/{patient}/status/draft/medicine"),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let report = body.as_array().unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report[0]["name"], "amoxicillin");
    assert_eq!(report[0]["compatible"], false);
    assert_eq!(report[1]["name"], "saline");
    assert_eq!(report[1]["compatible"], true);
}
