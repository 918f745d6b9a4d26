//! API Router with Swagger UI

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::UserService;
use crate::domain::PostalCodeLookup;
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{health, metrics, postal, request_id, users};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::get_user_by_query,
        users::create_user,
        users::update_user,
        users::delete_user,
        postal::lookup_postal_code,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            users::UserDto,
            users::UserRequest,
            users::StateCode,
            users::AddressTypeDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Users", description = "User CRUD operations"),
        (name = "Postal", description = "Postal-code (CEP) lookup passthrough"),
    ),
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "REST API for managing users and looking up Brazilian postal codes",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Everything the router needs from the outside world.
pub struct RouterDeps {
    pub db: DatabaseConnection,
    pub postal_lookup: Arc<dyn PostalCodeLookup>,
    pub prometheus: PrometheusHandle,
}

/// Create the API router with all routes
pub fn create_api_router(deps: RouterDeps) -> Router {
    let user_repo = Arc::new(UserRepository::new(deps.db));
    let user_state = users::UserHandlerState {
        user_service: Arc::new(UserService::new(user_repo)),
    };

    // /api/User/id is matched before /api/User/{id}
    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/id", get(users::get_user_by_query))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(user_state);

    let postal_routes = Router::new()
        .route("/{cep}", get(postal::lookup_postal_code))
        .with_state(postal::PostalHandlerState {
            lookup: deps.postal_lookup,
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState::new());

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: deps.prometheus,
        });

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest(users::USERS_PATH, user_routes)
        .nest("/cep", postal_routes)
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::domain::{DomainError, DomainResult, PostalLookupResponse};
    use crate::infrastructure::database::testing::memory_database;

    /// Answers from a fixed table; any other code is a 400, and "offline"
    /// simulates a transport failure.
    struct StubLookup;

    #[async_trait]
    impl PostalCodeLookup for StubLookup {
        async fn lookup(&self, code: &str) -> DomainResult<PostalLookupResponse> {
            match code {
                "01001000" => Ok(PostalLookupResponse {
                    status: 200,
                    content_type: Some("application/json; charset=utf-8".into()),
                    body: br#"{"cep":"01001-000","uf":"SP"}"#.to_vec(),
                }),
                "offline" => Err(DomainError::Unavailable("connection refused".into())),
                _ => Ok(PostalLookupResponse {
                    status: 400,
                    content_type: Some("text/html".into()),
                    body: b"<h1>Bad Request</h1>".to_vec(),
                }),
            }
        }
    }

    async fn app() -> Router {
        create_api_router(RouterDeps {
            db: memory_database().await,
            postal_lookup: Arc::new(StubLookup),
            prometheus: PrometheusBuilder::new().build_recorder().handle(),
        })
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&b).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(req).await.unwrap()
    }

    async fn json_body(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn user_payload(name: &str) -> Value {
        json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "street": "Av. Paulista, 1000",
            "city": "São Paulo",
            "state": "SP",
            "postalCode": "01310-100",
            "addressType": "Job"
        })
    }

    async fn create(app: &Router, name: &str) -> Value {
        let resp = send(app, "POST", "/api/User", Some(user_payload(name))).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        json_body(resp).await
    }

    async fn count(app: &Router) -> usize {
        let resp = send(app, "GET", "/api/User", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        json_body(resp).await.as_array().unwrap().len()
    }

    #[tokio::test]
    async fn list_after_inserting_n_returns_n() {
        let app = app().await;
        assert_eq!(count(&app).await, 0);

        for name in ["Ana", "Bruno", "Carla"] {
            create(&app, name).await;
        }

        assert_eq!(count(&app).await, 3);
    }

    #[tokio::test]
    async fn create_returns_location_and_ignores_client_id() {
        let app = app().await;
        let mut payload = user_payload("Ana");
        payload["id"] = json!(777);

        let resp = send(&app, "POST", "/api/User", Some(payload)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();
        let created = json_body(resp).await;
        let id = created["id"].as_i64().unwrap();

        assert_ne!(id, 777);
        assert_eq!(location, format!("/api/User/{}", id));
        assert_eq!(created["state"], "SP");
        assert_eq!(created["addressType"], "Job");

        let fetched = json_body(send(&app, "GET", &location, None).await).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn legacy_query_route_fetches_by_id() {
        let app = app().await;
        let created = create(&app, "Ana").await;
        let id = created["id"].as_i64().unwrap();

        let resp = send(&app, "GET", &format!("/api/User/id?id={}", id), None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await, created);
    }

    #[tokio::test]
    async fn get_missing_user_is_404_with_envelope() {
        let app = app().await;
        let resp = send(&app, "GET", "/api/User/41", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = json_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Not found: User with id=41");
    }

    #[tokio::test]
    async fn non_numeric_id_is_400() {
        let app = app().await;
        let resp = send(&app, "GET", "/api/User/abc", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_missing_name_is_rejected_without_insert() {
        let app = app().await;

        let resp = send(&app, "POST", "/api/User", Some(json!({"email": "x@y.z"}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = send(&app, "POST", "/api/User", Some(json!({"name": "", "email": "x@y.z"}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = send(&app, "POST", "/api/User", Some(json!({"name": "   ", "email": "x@y.z"}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "Validation: name: must not be blank");

        let mut bad_enum = user_payload("Ana");
        bad_enum["addressType"] = json!("Castle");
        let resp = send(&app, "POST", "/api/User", Some(bad_enum)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert_eq!(count(&app).await, 0);
    }

    #[tokio::test]
    async fn update_with_matching_ids_replaces_record() {
        let app = app().await;
        let created = create(&app, "Ana").await;
        let id = created["id"].as_i64().unwrap();

        let replacement = json!({
            "id": id,
            "name": "Ana Beatriz",
            "email": "ana.b@example.com",
            "state": "RJ",
            "addressType": "House"
        });
        let resp = send(&app, "PUT", &format!("/api/User/{}", id), Some(replacement)).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let fetched = json_body(send(&app, "GET", &format!("/api/User/{}", id), None).await).await;
        assert_eq!(fetched["name"], "Ana Beatriz");
        assert_eq!(fetched["state"], "RJ");
        assert_eq!(fetched["street"], Value::Null);
        assert_eq!(fetched["createdAt"], created["createdAt"]);
    }

    #[tokio::test]
    async fn update_with_mismatched_ids_is_400_and_changes_nothing() {
        let app = app().await;
        let created = create(&app, "Ana").await;
        let id = created["id"].as_i64().unwrap();

        let mut payload = user_payload("Mallory");
        payload["id"] = json!(id + 1);
        let resp = send(&app, "PUT", &format!("/api/User/{}", id), Some(payload)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let fetched = json_body(send(&app, "GET", &format!("/api/User/{}", id), None).await).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn update_missing_user_is_404() {
        let app = app().await;
        let mut payload = user_payload("Ghost");
        payload["id"] = json!(5);

        let resp = send(&app, "PUT", "/api/User/5", Some(payload)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(count(&app).await, 0);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let app = app().await;
        let ana = create(&app, "Ana").await;
        let bruno = create(&app, "Bruno").await;

        let uri = format!("/api/User/{}", ana["id"]);
        let resp = send(&app, "DELETE", &uri, None).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let remaining = json_body(send(&app, "GET", "/api/User", None).await).await;
        assert_eq!(remaining, json!([bruno]));

        let resp = send(&app, "GET", &uri, None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_missing_user_is_404_and_store_unchanged() {
        let app = app().await;
        create(&app, "Ana").await;

        let resp = send(&app, "DELETE", "/api/User/999", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(count(&app).await, 1);
    }

    #[tokio::test]
    async fn postal_lookup_relays_body_and_content_type() {
        let app = app().await;
        let resp = send(&app, "GET", "/cep/01001000", None).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"cep":"01001-000","uf":"SP"}"#);
    }

    #[tokio::test]
    async fn postal_lookup_relays_upstream_failure_status() {
        let app = app().await;
        let resp = send(&app, "GET", "/cep/0000", None).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "API call failed");
    }

    #[tokio::test]
    async fn postal_lookup_transport_failure_is_502() {
        let app = app().await;
        let resp = send(&app, "GET", "/cep/offline", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn health_and_openapi_are_served() {
        let app = app().await;

        let resp = send(&app, "GET", "/health", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["status"], "ok");

        let resp = send(&app, "GET", "/api-doc/openapi.json", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let doc = json_body(resp).await;
        assert!(doc["paths"]["/api/User/{id}"].is_object());
        assert!(doc["paths"]["/cep/{cep}"].is_object());
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = app().await;
        let resp = send(&app, "GET", "/api/User", None).await;
        assert!(resp.headers().contains_key(request_id::REQUEST_ID_HEADER));

        let resp = send(&app, "GET", "/metrics", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
