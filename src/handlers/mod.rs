pub mod quotation;

use actix_web::web;

use crate::db::QuotationStore;
use crate::services::QuotationService;

/// 所有请求共享的状态，启动时构造一次
pub struct AppState {
    pub service: QuotationService,
    pub store: QuotationStore,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(quotation::config);
}
