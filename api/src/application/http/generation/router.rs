use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    generate::{__path_generate, generate},
    process_image::{__path_process_image, process_image},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate, process_image))]
pub struct GenerationApiDoc;

pub fn generation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate", state.args.server.root_path),
            post(generate),
        )
        .route(
            &format!("{}/process-image", state.args.server.root_path),
            post(process_image),
        )
}
