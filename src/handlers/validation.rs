use actix_web::{get, web, HttpResponse, Responder};
use crate::models::{AppState, Rack, ScoredWord};
use crate::services::scorer::Scorer;
use crate::services::validator::WordValidator;
use log::info;

fn validate_word_logic(
    data: &web::Data<AppState>,
    rack: &str,
    word: &str
) -> HttpResponse {
    let rack = match Rack::parse(rack) {
        Some(r) => r,
        None => return HttpResponse::BadRequest().body(format!("Invalid rack '{}'", rack)),
    };

    let word = word.to_uppercase();
    let validator = WordValidator::new(&data.lexicon);

    if validator.is_valid(&word, &rack) {
        info!("Valid word queried ({}): {}", rack, word);
        HttpResponse::Ok().body(format!("Valid word: {}", word))
    } else {
        info!("Invalid word queried ({}): {}", rack, word);
        HttpResponse::NotFound().finish()
    }
}

#[get("/validate/{rack}/{word}")]
pub async fn validate_word(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (rack, word) = path.into_inner();
    validate_word_logic(&data, &rack, &word)
}

#[get("/score/{word}")]
pub async fn score_word(
    data: web::Data<AppState>,
    word: web::Path<String>,
) -> impl Responder {
    let word = word.into_inner().to_uppercase();

    if !data.lexicon.contains(&word) {
        return HttpResponse::NotFound().finish();
    }

    let score = Scorer::new(&data.inventory).score(&word);
    HttpResponse::Ok().json(ScoredWord { word, score })
}
