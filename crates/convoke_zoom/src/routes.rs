// --- File: crates/convoke_zoom/src/routes.rs ---

use crate::handlers::{
    add_webinar_registrant_handler, create_meeting_handler, create_webinar_handler,
    list_webinar_registrants_handler, ZoomState,
};
use axum::{routing::post, Router};
use convoke_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the Zoom feature.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let zoom_state = Arc::new(ZoomState { config });

    Router::new()
        .route("/create-meeting", post(create_meeting_handler))
        .route("/create-webinar", post(create_webinar_handler))
        .route(
            "/{webinar_id}/registrants",
            post(add_webinar_registrant_handler).get(list_webinar_registrants_handler),
        )
        .with_state(zoom_state)
}
