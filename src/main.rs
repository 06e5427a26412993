use std::env;
use std::sync::Arc;

use tarifa::api::DynDistanceAPI;
use tarifa::engine::Engine;
use tarifa::external::google_maps::GoogleMaps;
use tarifa::server::serve;
use tarifa::store::PgCatalog;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let db_uri = env::var("DATABASE_URL").unwrap();
    let catalog = Arc::new(PgCatalog::new(&db_uri, 5).await.unwrap());
    let distance = Arc::new(GoogleMaps::new()) as DynDistanceAPI;

    let engine = Engine::new(catalog.clone(), catalog, distance);

    serve(engine).await;
}
