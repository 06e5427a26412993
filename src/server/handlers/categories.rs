use axum::extract::{Extension, Json, Path};

use crate::entities::VehicleCategory;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<VehicleCategory>>, Error> {
    let categories = api.list_categories().await?;

    Ok(categories.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(name): Path<String>,
) -> Result<Json<VehicleCategory>, Error> {
    let category = api.find_category(&name).await?;

    Ok(category.into())
}

pub async fn upsert(
    Extension(api): Extension<DynAPI>,
    Json(category): Json<VehicleCategory>,
) -> Result<Json<VehicleCategory>, Error> {
    let category = api.upsert_category(category).await?;

    Ok(category.into())
}
