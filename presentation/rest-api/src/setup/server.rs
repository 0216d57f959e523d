use std::time::Duration;

use poem::listener::{Acceptor, Listener, TcpListener};
use poem::middleware::{CatchPanic, SetHeader, Tracing};
use poem::{Endpoint, EndpointExt, Response, Route, Server as PoemServer};
use poem_openapi::OpenApiService;
use tracing::{error, info};

use crate::api::envelope::envelope_json;
use crate::api::middleware::rate_limit::RateLimit;
use crate::api::middleware::request_id::RequestId;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// Drain budget once a termination signal is received.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(15);

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let app = build_app(&config, container);

        // Binding before building the URL lets PORT=0 pick a free port.
        let acceptor = TcpListener::bind(config.server.bind_address())
            .into_acceptor()
            .await?;
        if let Some(addr) = acceptor
            .local_addr()
            .iter()
            .find_map(|addr| addr.as_socket_addr().copied())
        {
            info!("Server listening on http://{}", addr);
            info!("Swagger UI at http://{}/api-docs", addr);
        }

        PoemServer::new_with_acceptor(acceptor)
            .run_with_graceful_shutdown(app, shutdown_signal(), None)
            .await?;
        info!("HTTP server closed (no new connections)");
        Ok(())
    }
}

/// Assembles the route tree and middleware chain. `.with` wraps outward, so
/// the last entry sees the request first.
pub fn build_app(config: &AppConfig, container: DependencyContainer) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (container.health_api, container.item_api, container.user_api),
        "Admin Service API",
        env!("CARGO_PKG_VERSION"),
    );
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/api-docs", ui)
        .at("/api-docs/openapi.json", spec)
        .catch_all_error(framework_error_envelope)
        .with(Tracing)
        .with(RequestId)
        .with(RateLimit::new(&config.rate_limit))
        .with(security_headers())
        .with(config.cors.middleware())
        .with(CatchPanic::new())
}

/// Framework-level failures (unmatched routes, unparseable payloads) answer
/// with the same envelope shape as route handlers.
async fn framework_error_envelope(err: poem::Error) -> Response {
    let status = err.status();
    Response::builder()
        .status(status)
        .content_type("application/json; charset=utf-8")
        .body(envelope_json(&err.to_string(), status.as_u16()))
}

fn security_headers() -> SetHeader {
    SetHeader::new()
        .overriding("X-Content-Type-Options", "nosniff")
        .overriding("X-Frame-Options", "SAMEORIGIN")
        .overriding("Referrer-Policy", "no-referrer")
        .overriding("X-XSS-Protection", "0")
        .overriding(
            "Strict-Transport-Security",
            "max-age=15552000; includeSubDomains",
        )
        .overriding("Content-Security-Policy", "default-src 'self'")
}

/// Resolves when SIGINT or SIGTERM arrives. Also arms the force-exit
/// watchdog; a normal drain finishes well inside the budget and the process
/// exits before the watchdog fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install SIGINT handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("[SIGINT] Received. Starting graceful shutdown..."),
        _ = terminate => info!("[SIGTERM] Received. Starting graceful shutdown..."),
    }

    info!("Closing HTTP server...");

    tokio::spawn(async {
        tokio::time::sleep(SHUTDOWN_TIMEOUT).await;
        error!(
            "Graceful shutdown timed out after {}s, forcing exit",
            SHUTDOWN_TIMEOUT.as_secs()
        );
        std::process::exit(1);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use poem::http::StatusCode;
    use poem::test::TestClient;

    use business::domain::item::model::Item;
    use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
    use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
    use business::domain::item::use_cases::find_all::FindAllItemsUseCase;
    use business::domain::item::use_cases::find_by_id::{FindItemByIdParams, FindItemByIdUseCase};
    use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
    use business::domain::response::{ServiceResponse, status};
    use business::domain::user::model::User;
    use business::domain::user::use_cases::find_all::FindAllUsersUseCase;
    use business::domain::user::use_cases::find_by_id::{FindUserByIdParams, FindUserByIdUseCase};

    use crate::config::env::EnvMap;

    // Canned use cases; these tests exercise routing and middleware, none
    // of the requests below reaches a handler body.
    struct EmptyStore;

    #[async_trait]
    impl FindAllItemsUseCase for EmptyStore {
        async fn execute(&self) -> ServiceResponse<Vec<Item>> {
            ServiceResponse::failure("No items found", status::NOT_FOUND)
        }
    }

    #[async_trait]
    impl FindItemByIdUseCase for EmptyStore {
        async fn execute(&self, _params: FindItemByIdParams) -> ServiceResponse<Item> {
            ServiceResponse::failure("Item not found", status::NOT_FOUND)
        }
    }

    #[async_trait]
    impl CreateItemUseCase for EmptyStore {
        async fn execute(&self, _params: CreateItemParams) -> ServiceResponse<Item> {
            ServiceResponse::failure(
                "An error occurred while creating item.",
                status::INTERNAL_SERVER_ERROR,
            )
        }
    }

    #[async_trait]
    impl UpdateItemUseCase for EmptyStore {
        async fn execute(&self, _params: UpdateItemParams) -> ServiceResponse<Item> {
            ServiceResponse::failure("Item not found for update", status::NOT_FOUND)
        }
    }

    #[async_trait]
    impl DeleteItemUseCase for EmptyStore {
        async fn execute(&self, _params: DeleteItemParams) -> ServiceResponse<Item> {
            ServiceResponse::failure("Item not found for deletion", status::NOT_FOUND)
        }
    }

    #[async_trait]
    impl FindAllUsersUseCase for EmptyStore {
        async fn execute(&self) -> ServiceResponse<Vec<User>> {
            ServiceResponse::failure("No users found", status::NOT_FOUND)
        }
    }

    #[async_trait]
    impl FindUserByIdUseCase for EmptyStore {
        async fn execute(&self, _params: FindUserByIdParams) -> ServiceResponse<User> {
            ServiceResponse::failure("User not found", status::NOT_FOUND)
        }
    }

    fn test_client() -> TestClient<impl Endpoint> {
        let env: EnvMap = [
            ("MONGODB_HOSTNAME".to_string(), "localhost".to_string()),
            ("MONGODB_DB_NAME".to_string(), "admin_test".to_string()),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::load(&env).unwrap();

        let container = DependencyContainer {
            health_api: crate::api::health::routes::Api::new(),
            item_api: crate::api::item::routes::ItemApi::new(
                std::sync::Arc::new(EmptyStore),
                std::sync::Arc::new(EmptyStore),
                std::sync::Arc::new(EmptyStore),
                std::sync::Arc::new(EmptyStore),
                std::sync::Arc::new(EmptyStore),
            ),
            user_api: crate::api::user::routes::UserApi::new(
                std::sync::Arc::new(EmptyStore),
                std::sync::Arc::new(EmptyStore),
            ),
        };

        TestClient::new(build_app(&config, container))
    }

    #[tokio::test]
    async fn should_serve_the_openapi_document() {
        let cli = test_client();

        let resp = cli.get("/api-docs/openapi.json").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let info = json.value().object().get("info").object();
        assert_eq!(info.get("title").string(), "Admin Service API");
    }

    #[tokio::test]
    async fn should_envelope_unknown_routes() {
        let cli = test_client();

        let resp = cli.get("/nope").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        let json = resp.json().await;
        let body = json.value().object();
        assert!(!body.get("success").bool());
        assert_eq!(body.get("statusCode").i64(), 404);
        body.get("responseObject").assert_null();
    }

    #[tokio::test]
    async fn should_set_security_headers_on_every_response() {
        let cli = test_client();

        let resp = cli.get("/health-check").send().await;

        resp.assert_status_is_ok();
        resp.assert_header("X-Content-Type-Options", "nosniff");
        resp.assert_header("X-Frame-Options", "SAMEORIGIN");
        resp.assert_header("Referrer-Policy", "no-referrer");
        resp.assert_header("Content-Security-Policy", "default-src 'self'");
    }

    #[tokio::test]
    async fn should_envelope_malformed_json_bodies() {
        let cli = test_client();

        let resp = cli
            .post("/items")
            .content_type("application/json")
            .body("{")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        let body = json.value().object();
        assert!(!body.get("success").bool());
        assert_eq!(body.get("statusCode").i64(), 400);
    }
}
