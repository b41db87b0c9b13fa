//! 业务逻辑服务模块

pub mod quotation_service;

pub use quotation_service::QuotationService;
