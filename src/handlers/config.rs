use actix_web::{get, web, HttpResponse, Responder};
use crate::models::{AppState, ConfigResponse, RACK_SIZE};
use log::info;

#[get("/config")]
pub async fn get_config(data: web::Data<AppState>) -> impl Responder {
    let values = data.inventory.values().clone();
    let bag = data.inventory.bag_counts();
    let word_count = data.lexicon.len();

    info!(
        "Served config with {} letter values, {} tiles and {} words",
        values.len(),
        data.inventory.bag_len(),
        word_count
    );

    HttpResponse::Ok().json(ConfigResponse {
        values,
        bag,
        rack_size: RACK_SIZE,
        word_count,
    })
}
