use std::future::Future;

use crate::domain::health::entities::HealthStatus;

pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = HealthStatus> + Send;
}
