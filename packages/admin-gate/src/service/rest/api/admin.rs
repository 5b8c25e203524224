use actix_web::{HttpRequest, Responder};
use actix_web::get;
use log::debug;
use admin_gate_endpoint_model::{AdminAreaError, AdminAreaNotice, AdminAreaResult};
use crate::service::rest::auth::AdminAuth;
use crate::service::rest::exposed_representation_format::EndpointRepresentationCompiler;

#[get("/ping")]
pub async fn ping(auth: AdminAuth, request: HttpRequest) -> impl Responder {
    let res: AdminAreaResult = if auth.is_authenticated() {
        Ok(AdminAreaNotice)
    } else {
        debug!("rejected admin request from {:?}", request.peer_addr());
        Err(AdminAreaError::Unauthorized)
    };

    EndpointRepresentationCompiler::from_value(res).into_plain_text()
}
