use actix_web::web;

/// Size cap shared by every body extractor.
pub const BODY_LIMIT: usize = 100 * 1024;

/// Registered for raw bodies; no route reads them.
pub const RAW_CONTENT_TYPE: &str = "application/vnd.custom-type";
/// Registered for text bodies; no route reads them.
pub const TEXT_CONTENT_TYPE: &str = "text/html";

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().limit(BODY_LIMIT)
}

// Backs the `Bytes` and `String` extractors used for raw and text bodies.
pub fn payload_config() -> web::PayloadConfig {
    web::PayloadConfig::new(BODY_LIMIT)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(payload_config());
}
