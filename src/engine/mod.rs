mod catalog_api;
mod pricing_api;

use crate::api::{DynCategoryStore, DynDistanceAPI, DynTariffStore, API};
use crate::entities::CancellationPolicy;

pub struct Engine {
    categories: DynCategoryStore,
    tariffs: DynTariffStore,
    distance: DynDistanceAPI,
    policy: CancellationPolicy,
}

impl Engine {
    pub fn new(
        categories: DynCategoryStore,
        tariffs: DynTariffStore,
        distance: DynDistanceAPI,
    ) -> Self {
        Self {
            categories,
            tariffs,
            distance,
            policy: CancellationPolicy::default(),
        }
    }
}

impl API for Engine {}
