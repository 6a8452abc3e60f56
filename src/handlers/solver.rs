use actix_web::{get, web, HttpResponse, Responder};
use crate::models::{AppState, Rack, ScoredWord, SolveResponse};
use crate::services::generator::find_all_words;
use crate::services::scorer::Scorer;
use crate::services::validator::WordValidator;
use log::info;

/// Every word formable from the rack, with scores and the reference total
#[get("/solve/{rack}")]
pub async fn solve_rack(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let rack = match Rack::parse(&path) {
        Some(r) => r,
        None => return HttpResponse::BadRequest().body(format!("Invalid rack '{}'", path.as_str())),
    };

    let validator = WordValidator::new(&data.lexicon);
    let scorer = Scorer::new(&data.inventory);

    let words: Vec<ScoredWord> = find_all_words(&validator, &rack)
        .into_iter()
        .map(|word| ScoredWord { word: word.to_string(), score: scorer.score(word) })
        .collect();
    let total: u32 = words.iter().map(|w| w.score).sum();

    info!("Solved rack {}: {} words, {} points", rack, words.len(), total);

    HttpResponse::Ok().json(SolveResponse {
        rack: rack.to_string(),
        words,
        total,
    })
}
