use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use outfitx_catalog::CatalogStore;
use outfitx_core::{
    assemble_outfit, recommend_alternatives, Context, Error, Gender, Occasion, Outfit, RuleBook,
    Season, Slot, Style, DEFAULT_TOP_K,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

#[derive(Deserialize)]
struct GenerateOutfitRequest {
    gender: Gender,
    season: Season,
    occasion: Occasion,
    #[serde(default)]
    style: Option<Style>,
}

#[derive(Deserialize)]
struct SlotAlternativesRequest {
    current_outfit: Outfit,
    slot: Slot,
    gender: Gender,
    season: Season,
    occasion: Occasion,
    #[serde(default = "default_top_k")]
    top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

pub struct RestApi;

impl RestApi {
    pub async fn start(store: Arc<CatalogStore>, port: u16) -> std::io::Result<()> {
        let rules = web::Data::new(RuleBook::default());
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(store.clone()))
                .app_data(rules.clone())
                .route("/generate-outfit", web::post().to(generate_outfit))
                .route("/slot-alternatives", web::post().to(slot_alternatives))
                .route("/catalog", web::get().to(catalog_info))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn generate_outfit(
    store: web::Data<Arc<CatalogStore>>,
    rules: web::Data<RuleBook>,
    req: web::Json<GenerateOutfitRequest>,
) -> ActixResult<HttpResponse> {
    let catalog = store.load();
    let ctx = Context {
        gender: req.gender,
        season: req.season,
        occasion: req.occasion,
        style: req.style,
    };

    match assemble_outfit(&catalog, &rules, &ctx) {
        Ok(outfit) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "outfit": outfit
        }))),
        Err(e) => {
            error!(error = %e, "outfit assembly failed");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}

async fn slot_alternatives(
    store: web::Data<Arc<CatalogStore>>,
    rules: web::Data<RuleBook>,
    req: web::Json<SlotAlternativesRequest>,
) -> ActixResult<HttpResponse> {
    let catalog = store.load();
    let ctx = Context {
        gender: req.gender,
        season: req.season,
        occasion: req.occasion,
        style: None,
    };

    match recommend_alternatives(
        &catalog,
        &rules,
        &req.current_outfit,
        req.slot,
        &ctx,
        req.top_k,
    ) {
        Ok(alternatives) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "slot": req.slot,
            "alternatives": alternatives
        }))),
        Err(e @ Error::UnknownImage(_)) => Ok(HttpResponse::BadRequest().json(
            serde_json::json!({
                "error": e.to_string()
            }),
        )),
        Err(e) => {
            error!(error = %e, "alternative recommendation failed");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}

async fn catalog_info(store: web::Data<Arc<CatalogStore>>) -> ActixResult<HttpResponse> {
    let catalog = store.load();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "items": catalog.len(),
        "dimension": catalog.dim()
    })))
}
