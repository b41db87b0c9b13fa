use actix_web::{web, HttpResponse, Result};

use super::AppState;
use crate::models::ErrorResponse;

/// GET /cotacao
///
/// 获取最新汇率、写入数据库并返回；任何一步失败都返回 500 和错误信息
pub async fn get_quotation(state: web::Data<AppState>) -> Result<HttpResponse> {
    match state.service.fetch_and_store(&state.store).await {
        Ok(quotation) => Ok(HttpResponse::Ok().json(quotation)),
        Err(e) => {
            log::error!("获取汇率失败: {}", e);
            let response = ErrorResponse::new(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/cotacao", web::get().to(get_quotation));
}
