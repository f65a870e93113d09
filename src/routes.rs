//! Router construction.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Build the HTTP router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let ledger_routes = Router::new()
        .route(
            "/api/financeiro",
            get(handlers::ledger::list_entries).post(handlers::ledger::create_entry),
        )
        .route(
            "/api/financeiro/vencimentos",
            get(handlers::ledger::list_by_due_range),
        )
        .route(
            "/api/financeiro/tipo/{tipo}",
            get(handlers::ledger::list_by_kind),
        )
        .route(
            "/api/financeiro/status/{baixado}",
            get(handlers::ledger::list_by_status),
        )
        .route(
            "/api/financeiro/{id}",
            get(handlers::ledger::get_entry)
                .put(handlers::ledger::update_entry)
                .delete(handlers::ledger::delete_entry),
        )
        .route(
            "/api/financeiro/{id}/baixar",
            put(handlers::ledger::settle_entry),
        )
        .route(
            "/api/financeiro/{id}/vencimento",
            put(handlers::ledger::change_due_date),
        );

    let stock_routes = Router::new()
        .route("/api/estoque/adicionar", post(handlers::stock::add_stock))
        .route("/api/estoque/entregar", post(handlers::stock::deliver_stock));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/viagens", get(handlers::trips::list_trips))
        .merge(ledger_routes)
        .merge(stock_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
