use actix_web::{get, web, HttpResponse, Responder};
use crate::models::AppState;

#[get("/rack")]
pub async fn rand_rack(data: web::Data<AppState>) -> impl Responder {
    let rack = data.inventory.draw_rack();
    HttpResponse::Ok().content_type("text/plain").body(rack.to_string())
}
