use axum::extract::{Extension, Json, Query};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::entities::{Booking, CancellationQuote, PriceList, Quote};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    origin: String,
    destination: String,
    category: String,
    wait_minutes: Option<u32>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Quote>, Error> {
    let quote = api
        .create_quote(
            &params.origin,
            &params.destination,
            &params.category,
            params.wait_minutes,
        )
        .await?;

    Ok(quote.into())
}

#[derive(Serialize, Deserialize)]
pub struct PriceListParams {
    origin: String,
    destination: String,
}

pub async fn price_list(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<PriceListParams>,
) -> Result<Json<PriceList>, Error> {
    let list = api.price_list(&params.origin, &params.destination).await?;

    Ok(list.into())
}

pub async fn cancellation(
    Extension(api): Extension<DynAPI>,
    Json(booking): Json<Booking>,
) -> Result<Json<CancellationQuote>, Error> {
    let quote = api.cancellation_quote(&booking, Utc::now())?;

    Ok(quote.into())
}
