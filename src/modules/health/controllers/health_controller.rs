use actix_web::web;

/// GET /health - Liveness probe
///
/// Plain-text `OK`, no dependency checks; the deployment platform only
/// needs to know the process answers.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
