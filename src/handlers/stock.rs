//! Stock (estoque) HTTP handlers.
//!
//! - POST /api/estoque/adicionar?itemId=&nomeItem=&quantidade= - Add stock
//! - POST /api/estoque/entregar?itemId=&quantidade= - Deliver stock

use axum::{extract::State, http::StatusCode};

use crate::{
    error::AppError,
    extract::QueryParams,
    models::stock_entry::{AddStockQuery, DeliverStockQuery},
    state::AppState,
};

/// Add `quantidade` units of an item, creating its counter on first use.
pub async fn add_stock(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AddStockQuery>,
) -> StatusCode {
    state
        .stock
        .add_to_stock(query.item_id, &query.item_name, query.quantity);
    StatusCode::OK
}

/// Deliver `quantidade` units of an item.
///
/// # Response
///
/// - **200 OK**: stock reduced
/// - **400 Bad Request**: `Quantidade insuficiente ou item não encontrado`
pub async fn deliver_stock(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DeliverStockQuery>,
) -> Result<StatusCode, AppError> {
    if state.stock.deliver_from_stock(query.item_id, query.quantity) {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::InsufficientStock)
    }
}
