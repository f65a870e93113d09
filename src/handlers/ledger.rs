//! Ledger (financeiro) HTTP handlers.
//!
//! - GET /api/financeiro - List all entries
//! - GET /api/financeiro/{id} - Get one entry
//! - GET /api/financeiro/tipo/{tipo} - Entries of one kind
//! - GET /api/financeiro/status/{baixado} - Settled or open entries
//! - GET /api/financeiro/vencimentos - Entries due within a date range
//! - POST /api/financeiro - Create entry
//! - PUT /api/financeiro/{id}/baixar - Settle or reopen entry
//! - PUT /api/financeiro/{id}/vencimento - Change due date
//! - PUT /api/financeiro/{id} - Replace entry fields
//! - DELETE /api/financeiro/{id} - Remove entry

use axum::{Json, extract::State};

use crate::{
    error::{AppError, LEDGER_ENTRY_NOT_FOUND},
    extract::{JsonBody, PathParam, QueryParams},
    handlers::MessageResponse,
    models::ledger_entry::{
        DueDateRequest, DueRangeQuery, LedgerEntry, LedgerEntryRequest, SettleRequest,
    },
    state::AppState,
};

fn found_or_404(found: bool, message: &str) -> Result<Json<MessageResponse>, AppError> {
    if found {
        Ok(MessageResponse::json(message))
    } else {
        Err(AppError::NotFound(LEDGER_ENTRY_NOT_FOUND))
    }
}

/// List all entries, latest due date first.
pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<LedgerEntry>>, AppError> {
    Ok(Json(state.ledger.get_all().await?))
}

/// Get one entry.
///
/// # Response
///
/// - **200 OK**: the entry
/// - **404 Not Found**: `Financeiro não encontrado`
pub async fn get_entry(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<LedgerEntry>, AppError> {
    let entry = state
        .ledger
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound(LEDGER_ENTRY_NOT_FOUND))?;

    Ok(Json(entry))
}

/// Entries of one kind. An unknown kind is a 400.
pub async fn list_by_kind(
    State(state): State<AppState>,
    PathParam(kind): PathParam<String>,
) -> Result<Json<Vec<LedgerEntry>>, AppError> {
    Ok(Json(state.ledger.get_by_kind(&kind).await?))
}

pub async fn list_by_status(
    State(state): State<AppState>,
    PathParam(settled): PathParam<bool>,
) -> Result<Json<Vec<LedgerEntry>>, AppError> {
    Ok(Json(state.ledger.get_by_status(settled).await?))
}

/// Entries due between `dataInicio` and `dataFim`, inclusive.
///
/// # Example
///
/// `GET /api/financeiro/vencimentos?dataInicio=2025-01-01T00:00:00Z&dataFim=2025-01-31T23:59:59Z`
///
/// Returns 400 when `dataInicio` is after `dataFim`.
pub async fn list_by_due_range(
    State(state): State<AppState>,
    QueryParams(range): QueryParams<DueRangeQuery>,
) -> Result<Json<Vec<LedgerEntry>>, AppError> {
    Ok(Json(
        state
            .ledger
            .get_by_due_range(range.start, range.end)
            .await?,
    ))
}

/// Create a ledger entry.
///
/// # Request Body
///
/// ```json
/// {
///   "descricao": "Aluguel",
///   "valor": 1500.00,
///   "tipoFinanceiro": "Saída",
///   "dtVencimento": "2025-01-10T00:00:00Z"
/// }
/// ```
///
/// # Response
///
/// - **200 OK**: `{"message": "Financeiro adicionado com sucesso"}`
/// - **400 Bad Request**: validation message
pub async fn create_entry(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LedgerEntryRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .ledger
        .add(
            request.description.as_deref().unwrap_or_default(),
            request.amount,
            &request.kind,
            request.due_date,
        )
        .await?;

    Ok(MessageResponse::json("Financeiro adicionado com sucesso"))
}

/// Settle (`{"baixado": true}`) or reopen (`{"baixado": false}`) an entry.
pub async fn settle_entry(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<SettleRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let found = state.ledger.set_settled(id, request.settled).await?;
    found_or_404(found, "Status alterado com sucesso")
}

pub async fn change_due_date(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<DueDateRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let found = state
        .ledger
        .change_due_date(id, request.new_due_date)
        .await?;
    found_or_404(found, "Data de vencimento alterada com sucesso")
}

/// Replace description, amount, kind and due date of an entry.
///
/// An unknown id is a 404 even when the body fails validation.
pub async fn update_entry(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<LedgerEntryRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let found = state
        .ledger
        .update(
            id,
            request.description.as_deref().unwrap_or_default(),
            request.amount,
            &request.kind,
            request.due_date,
        )
        .await?;
    found_or_404(found, "Financeiro atualizado com sucesso")
}

pub async fn delete_entry(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let found = state.ledger.remove(id).await?;
    found_or_404(found, "Financeiro removido com sucesso")
}
