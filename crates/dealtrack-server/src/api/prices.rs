use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use dealtrack_core::ProductRecord;
use dealtrack_scraper::{savings_percentage, ScrapeError};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SubmitRequest {
    product_title: String,
    wow_deal_price: String,
    product_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PriceQuote {
    flipkart_price: String,
    wow_deal_price: String,
    product_img_url: String,
    savings_percentage: i16,
}

/// `POST /api/prices` — stores (or overwrites) a product record.
pub(super) async fn submit_product(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    tracing::info!(title = %req.product_title, "storing product");
    state
        .store
        .insert(ProductRecord {
            title: req.product_title,
            deal_price: req.wow_deal_price,
            source_url: req.product_url,
        })
        .await;

    Ok("Product added successfully!")
}

/// `GET /api/prices/{product_title}` — scrapes the stored URL and derives
/// the savings percentage against the stored deal price.
pub(super) async fn get_quote(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(product_title): Path<String>,
) -> Result<Json<PriceQuote>, ApiError> {
    let Some(record) = state.store.get(&product_title).await else {
        return Err(ApiError::not_found("Product not found"));
    };

    let extraction = state
        .fetcher
        .fetch_page(&record.source_url)
        .await
        .map_err(|e| match e {
            ScrapeError::Timeout { .. } => {
                tracing::warn!(
                    request_id = %req_id.0,
                    title = %product_title,
                    error = %e,
                    "scrape timed out"
                );
                ApiError::internal("Timeout")
            }
            other => {
                tracing::error!(
                    request_id = %req_id.0,
                    title = %product_title,
                    error = %other,
                    "scrape failed"
                );
                ApiError::internal("Failed to scrape product")
            }
        })?;

    let savings = savings_percentage(&extraction.price_text, &record.deal_price);
    Ok(Json(PriceQuote {
        flipkart_price: extraction.price_text,
        wow_deal_price: record.deal_price,
        product_img_url: extraction.image_url,
        savings_percentage: savings,
    }))
}
