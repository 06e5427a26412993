use axum::extract::{Extension, Json, Path};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::TariffTable;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn active(Extension(api): Extension<DynAPI>) -> Result<Json<TariffTable>, Error> {
    let tariff = api.active_tariff().await?;

    Ok(tariff.into())
}

#[derive(Serialize, Deserialize)]
pub struct UpdateParams {
    surcharge: Decimal,
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Path(bucket): Path<u32>,
    Json(params): Json<UpdateParams>,
) -> Result<Json<TariffTable>, Error> {
    let tariff = api.update_surcharge(bucket, params.surcharge).await?;

    Ok(tariff.into())
}
