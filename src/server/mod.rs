mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::api::API;
use crate::server::handlers::{categories, quotes, tariffs};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/quotes", post(quotes::create))
        .route("/prices", get(quotes::price_list))
        .route("/cancellation_quotes", post(quotes::cancellation))
        .route(
            "/categories",
            get(categories::list).post(categories::upsert),
        )
        .route("/categories/:name", get(categories::find))
        .route("/tariffs", get(tariffs::active))
        .route("/tariffs/:bucket", patch(tariffs::update))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
