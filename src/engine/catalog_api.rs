use super::Engine;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::{
    api::{CategoryAPI, TariffAPI},
    entities::{TariffTable, VehicleCategory},
    error::{invalid_input_error, unknown_category_error, Error},
};

#[async_trait]
impl CategoryAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_category(&self, name: &str) -> Result<VehicleCategory, Error> {
        self.categories
            .find_category(name)
            .await?
            .ok_or_else(|| unknown_category_error(name))
    }

    #[tracing::instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<VehicleCategory>, Error> {
        self.categories.list_categories().await
    }

    #[tracing::instrument(skip(self))]
    async fn upsert_category(&self, category: VehicleCategory) -> Result<VehicleCategory, Error> {
        if category.name.trim().is_empty() || category.rate_per_km < Decimal::ZERO {
            return Err(invalid_input_error());
        }

        self.categories.upsert_category(&category).await?;

        Ok(category)
    }
}

#[async_trait]
impl TariffAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn active_tariff(&self) -> Result<TariffTable, Error> {
        self.tariffs.active_tariff().await
    }

    #[tracing::instrument(skip(self))]
    async fn update_surcharge(&self, bucket: u32, amount: Decimal) -> Result<TariffTable, Error> {
        if amount < Decimal::ZERO {
            return Err(invalid_input_error());
        }

        let mut tariff = self.tariffs.active_tariff().await?;
        tariff.set(bucket, amount);
        self.tariffs.save_tariff(&tariff).await?;

        Ok(tariff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::sync::Mutex;

    use rust_decimal_macros::dec;

    use crate::api::{CategoryStore, DistanceAPI, TariffStore};

    struct NoDistance;

    #[async_trait]
    impl DistanceAPI for NoDistance {
        async fn resolve_distance_km(&self, _: &str, _: &str) -> Result<Decimal, Error> {
            unimplemented!("not exercised by catalog operations")
        }
    }

    #[derive(Default)]
    struct MemoryCatalog {
        categories: Mutex<Vec<VehicleCategory>>,
        tariff: Mutex<Option<TariffTable>>,
    }

    #[async_trait]
    impl CategoryStore for MemoryCatalog {
        async fn find_category(&self, name: &str) -> Result<Option<VehicleCategory>, Error> {
            Ok(self
                .categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.name == name)
                .cloned())
        }

        async fn list_categories(&self) -> Result<Vec<VehicleCategory>, Error> {
            Ok(self.categories.lock().unwrap().clone())
        }

        async fn upsert_category(&self, category: &VehicleCategory) -> Result<(), Error> {
            let mut categories = self.categories.lock().unwrap();

            match categories.iter_mut().find(|c| c.name == category.name) {
                Some(existing) => existing.rate_per_km = category.rate_per_km,
                None => categories.push(category.clone()),
            }

            Ok(())
        }
    }

    #[async_trait]
    impl TariffStore for MemoryCatalog {
        async fn active_tariff(&self) -> Result<TariffTable, Error> {
            Ok(self
                .tariff
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_default())
        }

        async fn save_tariff(&self, tariff: &TariffTable) -> Result<(), Error> {
            *self.tariff.lock().unwrap() = Some(tariff.clone());

            Ok(())
        }
    }

    fn engine() -> Engine {
        let catalog = Arc::new(MemoryCatalog::default());

        Engine::new(catalog.clone(), catalog, Arc::new(NoDistance))
    }

    #[tokio::test]
    async fn upsert_then_find_round_trips() {
        let engine = engine();

        engine
            .upsert_category(VehicleCategory::new("Confort", dec!(0.50)))
            .await
            .unwrap();

        let category = engine.find_category("Confort").await.unwrap();
        assert_eq!(category.rate_per_km, dec!(0.50));
    }

    #[tokio::test]
    async fn upsert_updates_an_existing_rate() {
        let engine = engine();

        engine
            .upsert_category(VehicleCategory::new("Premium", dec!(0.75)))
            .await
            .unwrap();
        engine
            .upsert_category(VehicleCategory::new("Premium", dec!(0.80)))
            .await
            .unwrap();

        let categories = CategoryAPI::list_categories(&engine).await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].rate_per_km, dec!(0.80));
    }

    #[tokio::test]
    async fn negative_rate_is_rejected() {
        let err = engine()
            .upsert_category(VehicleCategory::new("Confort", dec!(-0.10)))
            .await
            .unwrap_err();

        assert_eq!(err.code, 101);
    }

    #[tokio::test]
    async fn missing_category_is_a_lookup_miss() {
        let err = engine().find_category("Luxo").await.unwrap_err();

        assert_eq!(err.code, 102);
    }

    #[tokio::test]
    async fn unconfigured_tariff_falls_back_to_defaults() {
        let tariff = TariffAPI::active_tariff(&engine()).await.unwrap();

        assert_eq!(tariff.surcharge(Some(120)), dec!(40));
    }

    #[tokio::test]
    async fn surcharge_update_persists() {
        let engine = engine();

        let tariff = engine.update_surcharge(60, dec!(25)).await.unwrap();
        assert_eq!(tariff.surcharge(Some(60)), dec!(25));

        let reloaded = TariffAPI::active_tariff(&engine).await.unwrap();
        assert_eq!(reloaded.surcharge(Some(60)), dec!(25));
        // untouched buckets keep their defaults
        assert_eq!(reloaded.surcharge(Some(30)), dec!(10));
    }

    #[tokio::test]
    async fn negative_surcharge_is_rejected() {
        let err = engine().update_surcharge(60, dec!(-5)).await.unwrap_err();

        assert_eq!(err.code, 101);
    }
}
