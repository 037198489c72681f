use actix_web::web;

use crate::handlers::{health_check, recommendations_config};

/// Configure all routes for the API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check).configure(recommendations_config);
}
