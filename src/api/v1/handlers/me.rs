use axum::Json;

use crate::api::v1::dto::me::MeResponse;
use crate::api::v1::extractors::AuthClaims;

pub async fn me(AuthClaims(claims): AuthClaims) -> Json<MeResponse> {
    Json(MeResponse::from(claims))
}
