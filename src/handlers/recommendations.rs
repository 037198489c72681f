use crate::{
    models::{RecommendationRequest, RecommendationResponse},
    services::{mapping::EnvironmentInput, RecommendationService},
};
use actix_web::{web, HttpResponse};
use tracing::info;

pub fn recommendations_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/recommend").route(web::get().to(recommend_artwork)));
}

/// Recommend artworks for a hospital environment.
///
/// The `mood`, `genre`, `medium` and `message` query parameters are
/// accepted for compatibility but dropped here; the query vector is built
/// from the mapped environment attributes alone.
pub async fn recommend_artwork(
    query: web::Query<RecommendationRequest>,
    service: web::Data<RecommendationService>,
) -> HttpResponse {
    let request = query.into_inner();
    info!(
        interior_tone = %request.interior_tone,
        department = %request.department,
        installation_space = %request.installation_space,
        "Recommendation request"
    );

    let input = EnvironmentInput {
        interior_tone: request.interior_tone,
        department: request.department,
        installation_space: request.installation_space,
        patient_age: request.patient_age,
        patient_gender: request.patient_gender,
    };

    let recommendations = service.recommend(&input).await;
    HttpResponse::Ok().json(RecommendationResponse { recommendations })
}
