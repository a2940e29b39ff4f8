use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::houses::repositories::HouseStore;

/// List all houses
/// GET /api/houses
pub async fn list_houses(
    store: web::Data<Arc<dyn HouseStore>>,
) -> Result<HttpResponse, AppError> {
    let houses = store.list().await?;

    Ok(HttpResponse::Ok().json(houses))
}

/// Configure house routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/houses").route("", web::get().to(list_houses)));
}
