use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::BillingMonth;
use crate::modules::bills::models::CreateBillRequest;
use crate::modules::bills::services::BillingService;

/// Query parameters for the previous-bill lookup.
///
/// Both arrive camelCase from the client. Defaults let a missing parameter
/// reach the handler so the combined message below is returned instead of
/// a bare deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrevBillQuery {
    #[serde(default)]
    pub house_id: String,
    #[serde(default)]
    pub billing_month: String,
}

/// List all bills, newest first
/// GET /api/bills
pub async fn list_bills(
    service: web::Data<Arc<BillingService>>,
) -> Result<HttpResponse, AppError> {
    let bills = service.list_bills().await?;

    Ok(HttpResponse::Ok().json(bills))
}

/// Look up the bill for the month preceding `billingMonth`.
/// GET /api/bills/prev-bill?houseId=&billingMonth=
///
/// Responds 200 with the bill, or a JSON `null` when the house has no
/// previous cycle.
pub async fn prev_bill(
    service: web::Data<Arc<BillingService>>,
    query: web::Query<PrevBillQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    if query.house_id.trim().is_empty() || query.billing_month.trim().is_empty() {
        return Err(AppError::validation("houseId and billingMonth are required"));
    }

    let month = BillingMonth::parse(&query.billing_month)?;
    let bill = service.previous_bill(&query.house_id, month).await?;

    Ok(HttpResponse::Ok().json(bill))
}

/// Record the bill for a house
/// POST /api/bills/{house_id}
pub async fn create_bill(
    service: web::Data<Arc<BillingService>>,
    path: web::Path<String>,
    request: web::Json<CreateBillRequest>,
) -> Result<HttpResponse, AppError> {
    let house_id = path.into_inner();
    let bill = service.create_bill(&house_id, request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(bill))
}

/// Configure bill routes.
///
/// `/prev-bill` registers before `/{house_id}` so the literal path wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/bills")
            .route("", web::get().to(list_bills))
            .route("/prev-bill", web::get().to(prev_bill))
            .route("/{house_id}", web::post().to(create_bill)),
    );
}
