/// # Health Report Builders
///
/// Transport-independent construction of the liveness and detailed health
/// reports. The HTTP endpoints in [`crate::routes::health`] only wrap these.
pub mod health;
