use crate::domain::health::entities::HealthStatus;

/// Liveness only; never touches the oracle.
pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> HealthStatus;
}
