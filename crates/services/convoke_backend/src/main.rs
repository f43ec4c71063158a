// File: services/convoke_backend/src/main.rs
use axum::{routing::get, Router};
use convoke_config::load_config;
#[cfg(feature = "zoom")]
use convoke_zoom::routes as zoom_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    convoke_common::logging::init();

    let api_router = Router::new().route("/", get(|| async { "Welcome to Convoke API!" }));
    #[cfg(feature = "zoom")]
    let zoom_router = zoom_routes::routes(config.clone());

    let api_router = Router::new().nest("/api", {
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut router = api_router;
        #[cfg(feature = "zoom")]
        {
            router = router.merge(zoom_router);
        }
        router
    });

    // The API accepts cross-origin requests from any frontend
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut app = api_router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        #[cfg(feature = "zoom")]
        use convoke_zoom::doc::ZoomApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Convoke API",
                version = "0.1.0",
                description = "Convoke Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Convoke", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        // Create the merged OpenAPI document
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut openapi_doc = ApiDoc::openapi();
        #[cfg(feature = "zoom")]
        openapi_doc.merge(ZoomApiDoc::openapi());
        info!("📖 Adding Swagger UI at /api/docs");

        // Create the Swagger UI route, referencing the merged doc
        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        // Merge the Swagger UI into the main app router
        app = app.merge(swagger_ui);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
