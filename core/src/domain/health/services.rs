use crate::domain::{
    common::services::Service,
    health::{entities::HealthStatus, ports::HealthCheckService},
};

impl HealthCheckService for Service {
    fn health(&self) -> HealthStatus {
        HealthStatus::ok()
    }
}
