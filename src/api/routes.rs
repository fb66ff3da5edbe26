use axum::{
    routing::{delete, get, post},
    Router,
};
use axum::http::Method;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::api::handlers;
use crate::api::AppState;

const MAX_BODY_BYTES: usize = 256 * 1024;

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::catalog::health))

        // 文档目录
        .route("/states", get(handlers::catalog::state_list))
        .route("/states/:state/forms", get(handlers::catalog::state_forms))
        .route("/stamps", get(handlers::catalog::stamp_list))

        // 会话视图状态
        .route("/sessions", post(handlers::session::create_session))
        .route("/sessions/:id", get(handlers::session::get_session))
        .route("/sessions/:id/actions", post(handlers::session::apply_action))
        .route("/sessions/:id/download", post(handlers::download::download_selected))

        // 分支映射
        .route("/branch_options", get(handlers::branch::branch_options))
        .route(
            "/sessions/:id/branch_mappings",
            get(handlers::branch::list_branch_mappings).post(handlers::branch::add_branch_mapping),
        )
        .route(
            "/sessions/:id/branch_mappings/:mapping_id",
            delete(handlers::branch::remove_branch_mapping),
        )

        .route("/table/header", post(handlers::table::format_header));

    // 本服务兼任文档服务器
    if state.config.catalog.serve_documents {
        let prefix = format!("/{}", state.config.catalog.route_prefix.trim_matches('/'));
        tracing::info!(
            "📂 在 {} 下提供文档目录 {}",
            prefix,
            state.config.catalog.document_root.display()
        );
        router = router.nest_service(&prefix, ServeDir::new(&state.config.catalog.document_root));
    }

    if state.config.server.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
            .expose_headers(Any)
            .max_age(std::time::Duration::from_secs(3600));
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
        .with_state(state)
}
