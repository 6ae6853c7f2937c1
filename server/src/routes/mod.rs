use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{assignments, dashboard, events, health_check, registrations};
use crate::services::AppState;

pub fn create_routes(state: AppState) -> Router {
    let event_routes = Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route("/:id", get(events::get_event).put(events::update_event))
        .route("/:id/submit", post(events::submit_event))
        .route("/:id/verify", post(events::verify_event))
        .route("/:id/send-back", post(events::send_back_event))
        .route("/:id/approve", post(events::approve_event))
        .route("/:id/reject", post(events::reject_event))
        .route("/:id/resubmit", post(events::resubmit_event))
        .route("/:id/assignments", post(assignments::assign_volunteer))
        .route("/:id/registrations", post(registrations::register_student));

    let api = Router::new()
        .nest("/events", event_routes)
        .route("/assignments", get(assignments::list_assignments))
        .route("/assignments/:id/accept", post(assignments::accept_assignment))
        .route("/assignments/:id/complete", post(assignments::complete_assignment))
        .route("/registrations", get(registrations::list_registrations))
        .route("/registrations/:id/attended", post(registrations::mark_attended))
        .route("/queue", get(events::work_queue))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/stats", get(dashboard::platform_stats))
        .route("/audit-log", get(dashboard::audit_log));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::handlers::actor::ACTOR_HEADER;
    use crate::store::seed::{
        demo_store, ADMIN_ID, BLOCKCHAIN_SEMINAR_ID, CLUB_HEAD_ID, CULTURAL_NIGHT_ID, HOD_ID,
        ORGANIZER_ID, STUDENT_ID, TECH_FEST_ID,
    };

    fn app() -> Router {
        let store = Arc::new(demo_store().unwrap());
        create_routes(AppState::new(store, 20))
    }

    fn request(method: &str, uri: &str, actor: Option<Uuid>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(id) = actor {
            builder = builder.header(ACTOR_HEADER, id.to_string());
        }
        builder.body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, actor: Uuid, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(ACTOR_HEADER, actor.to_string())
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_needs_no_actor() {
        let response = app()
            .oneshot(request("GET", "/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn missing_actor_is_unauthorized() {
        let response = app()
            .oneshot(request("GET", "/api/events", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_actor_is_unauthorized() {
        let response = app()
            .oneshot(request("GET", "/api/events", Some(Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn submitting_twice_conflicts() {
        let app = app();
        let uri = format!("/api/events/{}/submit", BLOCKCHAIN_SEMINAR_ID);

        let first = app
            .clone()
            .oneshot(request("POST", &uri, Some(CLUB_HEAD_ID)))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let body = body_json(first).await;
        assert_eq!(body["data"]["status"], "SUBMITTED");

        let second = app
            .oneshot(request("POST", &uri, Some(CLUB_HEAD_ID)))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let body = body_json(second).await;
        assert_eq!(body["error"]["code"], "INVALID_TRANSITION");
    }

    #[tokio::test]
    async fn reject_without_reason_is_bad_request() {
        let uri = format!("/api/events/{}/reject", TECH_FEST_ID);
        let response = app()
            .oneshot(request("POST", &uri, Some(HOD_ID)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn student_cannot_verify() {
        let uri = format!("/api/events/{}/verify", TECH_FEST_ID);
        let response = app()
            .oneshot(request("POST", &uri, Some(STUDENT_ID)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn audit_log_is_paged_for_admin() {
        let response = app()
            .oneshot(request("GET", "/api/audit-log?limit=2", Some(ADMIN_ID)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["limit"], 2);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn creating_an_event_returns_created() {
        let body = serde_json::json!({
            "title": "Rust Meetup",
            "description": "Evening of systems programming talks",
            "club_id": crate::store::seed::TECH_CLUB_ID,
            "event_date": "2026-11-20",
            "event_time": "17:30:00",
            "venue": "Seminar Hall A",
            "expected_attendees": 60,
            "budget": "5000",
            "category": "Technical",
            "requirements": "Projector"
        });
        let response = app()
            .oneshot(json_request("POST", "/api/events", CLUB_HEAD_ID, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["status"], "DRAFT");
    }

    #[tokio::test]
    async fn malformed_comment_is_rejected_without_transition() {
        let app = app();
        let uri = format!("/api/events/{}/verify", TECH_FEST_ID);
        let bad = Request::builder()
            .method("POST")
            .uri(&uri)
            .header(ACTOR_HEADER, ORGANIZER_ID.to_string())
            .header("content-type", "application/json")
            .body(Body::from("{\"comment\": "))
            .unwrap();

        let response = app.clone().oneshot(bad).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let detail = app
            .oneshot(request("GET", &format!("/api/events/{}", TECH_FEST_ID), Some(ORGANIZER_ID)))
            .await
            .unwrap();
        let body = body_json(detail).await;
        assert_eq!(body["data"]["event"]["status"], "SUBMITTED");
        assert_eq!(body["data"]["workflow"]["status"], "SUBMITTED");
    }

    #[tokio::test]
    async fn verify_comment_reaches_the_workflow() {
        let uri = format!("/api/events/{}/verify", TECH_FEST_ID);
        let app = app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &uri,
                ORGANIZER_ID,
                serde_json::json!({ "comment": "Venue confirmed" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let detail = app
            .oneshot(request("GET", &format!("/api/events/{}", TECH_FEST_ID), Some(ORGANIZER_ID)))
            .await
            .unwrap();
        let body = body_json(detail).await;
        let comments = body["data"]["workflow"]["comments"].as_array().unwrap();
        assert_eq!(comments.last().unwrap()["comment"], "Venue confirmed");
    }

    #[tokio::test]
    async fn hod_cannot_approve_another_department() {
        let uri = format!("/api/events/{}/approve", CULTURAL_NIGHT_ID);
        let response = app()
            .oneshot(request("POST", &uri, Some(HOD_ID)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
