use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::entities::{Booking, CancellationQuote, PriceList, Quote, TariffTable, VehicleCategory};
use crate::error::Error;

#[async_trait]
pub trait DistanceAPI {
    async fn resolve_distance_km(&self, origin: &str, destination: &str)
        -> Result<Decimal, Error>;
}

#[async_trait]
pub trait CategoryStore {
    async fn find_category(&self, name: &str) -> Result<Option<VehicleCategory>, Error>;
    async fn list_categories(&self) -> Result<Vec<VehicleCategory>, Error>;
    async fn upsert_category(&self, category: &VehicleCategory) -> Result<(), Error>;
}

#[async_trait]
pub trait TariffStore {
    async fn active_tariff(&self) -> Result<TariffTable, Error>;
    async fn save_tariff(&self, tariff: &TariffTable) -> Result<(), Error>;
}

#[async_trait]
pub trait PricingAPI {
    async fn create_quote(
        &self,
        origin: &str,
        destination: &str,
        category_name: &str,
        wait_minutes: Option<u32>,
    ) -> Result<Quote, Error>;

    async fn price_list(&self, origin: &str, destination: &str) -> Result<PriceList, Error>;

    fn cancellation_quote(
        &self,
        booking: &Booking,
        now: DateTime<Utc>,
    ) -> Result<CancellationQuote, Error>;
}

#[async_trait]
pub trait CategoryAPI {
    async fn find_category(&self, name: &str) -> Result<VehicleCategory, Error>;
    async fn list_categories(&self) -> Result<Vec<VehicleCategory>, Error>;
    async fn upsert_category(&self, category: VehicleCategory) -> Result<VehicleCategory, Error>;
}

#[async_trait]
pub trait TariffAPI {
    async fn active_tariff(&self) -> Result<TariffTable, Error>;
    async fn update_surcharge(&self, bucket: u32, amount: Decimal) -> Result<TariffTable, Error>;
}

pub trait API: PricingAPI + CategoryAPI + TariffAPI {}

pub type DynDistanceAPI = Arc<dyn DistanceAPI + Send + Sync>;
pub type DynCategoryStore = Arc<dyn CategoryStore + Send + Sync>;
pub type DynTariffStore = Arc<dyn TariffStore + Send + Sync>;
