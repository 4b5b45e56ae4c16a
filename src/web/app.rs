use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer, Result};
use chrono::Utc;
use log::info;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::Config;
use crate::domain::{handle, Catalog, Command, Errors, HandleError};
use crate::planner::{GeminiClient, Planner, PlannerError, PromptTemplate, TextGenerator, PERSONA};
use crate::seed::seed_items;
use super::types::{ApiError, AppState, BidRequest, ItemDetail, ItemSummary, TemplateEntry};

// Initialize application state from the seed catalog
pub fn init_app_state(config: &Config) -> std::result::Result<AppState, Errors> {
    let mut catalog = Catalog::new(seed_items(Utc::now())?, config.rules);
    catalog.subscribe(|item| {
        info!("Item {} now at {} with {} bids", item.id, item.current_price(), item.bids().len())
    });

    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(config.gemini.clone(), PERSONA));
    Ok(app_state_with(catalog, generator))
}

pub fn app_state_with(catalog: Catalog, generator: Arc<dyn TextGenerator>) -> AppState {
    AppState {
        catalog: Mutex::new(catalog),
        planner: Planner::new(generator),
    }
}

fn lock_catalog(data: &AppState) -> Result<MutexGuard<'_, Catalog>> {
    data.catalog
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("catalog unavailable"))
}

fn error_body(message: impl ToString) -> ApiError {
    ApiError {
        message: message.to_string(),
    }
}

// Get all items, in catalog order
async fn get_items(data: web::Data<AppState>) -> Result<HttpResponse> {
    let catalog = lock_catalog(&data)?;
    let now = Utc::now();
    let items: Vec<ItemSummary> = catalog
        .items()
        .iter()
        .map(|item| ItemSummary::new(item, now))
        .collect();

    Ok(HttpResponse::Ok().json(items))
}

// Get item by ID
async fn get_item(path: web::Path<String>, data: web::Data<AppState>) -> Result<HttpResponse> {
    let item_id = path.into_inner();
    let catalog = lock_catalog(&data)?;

    match catalog.get(&item_id) {
        Some(item) => Ok(HttpResponse::Ok().json(ItemDetail::new(item, Utc::now()))),
        None => Ok(HttpResponse::NotFound().json(error_body(Errors::ItemNotFound(item_id)))),
    }
}

// Place a bid on an item as the collector
async fn place_bid(
    path: web::Path<String>,
    bid_req: web::Json<BidRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse> {
    let item_id = path.into_inner();
    let now = Utc::now();
    let command = Command::PlaceBid {
        timestamp: now,
        item_id: item_id.clone(),
        amount: bid_req.amount,
    };

    let mut catalog = lock_catalog(&data)?;

    match handle(command, &mut catalog) {
        Ok(_) => match catalog.get(&item_id) {
            Some(item) => Ok(HttpResponse::Ok().json(ItemDetail::new(item, now))),
            None => Ok(HttpResponse::NotFound().json(error_body(Errors::ItemNotFound(item_id)))),
        },
        Err(HandleError::AuctionError(err @ Errors::ItemNotFound(_))) => {
            Ok(HttpResponse::NotFound().json(error_body(err)))
        }
        Err(err) => Ok(HttpResponse::BadRequest().json(error_body(err))),
    }
}

async fn get_planner_messages(data: web::Data<AppState>) -> Result<HttpResponse> {
    match data.planner.messages() {
        Ok(messages) => Ok(HttpResponse::Ok().json(messages)),
        Err(err) => Ok(HttpResponse::InternalServerError().json(error_body(err))),
    }
}

async fn get_planner_templates() -> Result<HttpResponse> {
    let templates: Vec<TemplateEntry> = PromptTemplate::ALL.into_iter().map(TemplateEntry::from).collect();
    Ok(HttpResponse::Ok().json(templates))
}

async fn request_plan(path: web::Path<String>, data: web::Data<AppState>) -> Result<HttpResponse> {
    let template = match path.into_inner().parse::<PromptTemplate>() {
        Ok(template) => template,
        Err(message) => return Ok(HttpResponse::NotFound().json(error_body(message))),
    };

    match data.planner.request(template).await {
        Ok(reply) => Ok(HttpResponse::Ok().json(reply)),
        Err(err @ PlannerError::Busy) => Ok(HttpResponse::Conflict().json(error_body(err))),
        Err(err) => Ok(HttpResponse::InternalServerError().json(error_body(err))),
    }
}

// Configure routes
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .route("/items", web::get().to(get_items))
            .route("/items/{id}", web::get().to(get_item))
            .route("/items/{id}/bids", web::post().to(place_bid))
            .route("/planner/messages", web::get().to(get_planner_messages))
            .route("/planner/templates", web::get().to(get_planner_templates))
            .route("/planner/{template}", web::post().to(request_plan)),
    );
}

// Main application
pub async fn run_app(config: Config) -> std::io::Result<()> {
    let app_state = init_app_state(&config)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    let app_state = web::Data::new(app_state);

    info!("Starting server on {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(configure_app)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
