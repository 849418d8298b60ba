/// HTTP liveness and readiness endpoints
pub mod health;
