use utoipa::OpenApi;

use crate::application::http::{generation::router::GenerationApiDoc, health::HealthApiDoc};

#[derive(OpenApi)]
#[openapi(info(
    title = "Macrolens API",
    description = "Relays prompts and food images to a generative model."
))]
pub struct ApiDoc;

/// Full document with every route group merged in, paths relative to the
/// root path.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(GenerationApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
