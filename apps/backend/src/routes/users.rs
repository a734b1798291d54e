use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::current_business::CurrentBusiness;

async fn me(current: CurrentBusiness) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(current))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(me));
}
