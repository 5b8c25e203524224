use actix_web::Responder;
use actix_web::get;
use admin_gate_endpoint_model::AuthStatusResponse;
use crate::service::rest::auth::AdminAuth;
use crate::service::rest::exposed_representation_format::EndpointRepresentationCompiler;

#[get("/status")]
pub async fn status(auth: AdminAuth) -> impl Responder {
    EndpointRepresentationCompiler::from_value(AuthStatusResponse::new(auth.is_authenticated())).into_json()
}
