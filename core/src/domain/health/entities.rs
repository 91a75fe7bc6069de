use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const HEALTH_OK: &str = "ok";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_OK.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == HEALTH_OK
    }
}
