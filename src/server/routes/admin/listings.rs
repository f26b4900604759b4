//! Paginated user and feedback listings

use crate::core::models::{Feedback, User};
use crate::server::routes::mask_internal;
use crate::server::state::AppState;
use crate::storage::FeedbackFilter;
use crate::utils::data::validation::Pagination;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedbacksQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersPage {
    pub users: Vec<User>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbacksPage {
    pub feedbacks: Vec<Feedback>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Unparseable bounds are ignored rather than rejected
fn parse_bound(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            debug!("Ignoring date bound {:?}: {}", raw, e);
            None
        }
    }
}

/// Users newest first, optionally filtered by `q`
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<UsersQuery>,
) -> ActixResult<HttpResponse> {
    let pagination = &query.pagination;

    let (users, total) = state
        .database
        .list_users(query.q.as_deref(), pagination.offset(), pagination.limit())
        .await
        .map_err(mask_internal("Internal server error"))?;

    Ok(HttpResponse::Ok().json(UsersPage {
        users,
        page: pagination.page(),
        limit: pagination.limit(),
        total,
        total_pages: pagination.total_pages(total),
    }))
}

/// Feedback newest first within optional RFC 3339 bounds
pub async fn list_feedbacks(
    state: web::Data<AppState>,
    query: web::Query<FeedbacksQuery>,
) -> ActixResult<HttpResponse> {
    let pagination = &query.pagination;
    let filter = FeedbackFilter {
        from: parse_bound(query.from.as_deref()),
        to: parse_bound(query.to.as_deref()),
    };

    let (feedbacks, total) = state
        .database
        .list_feedbacks(&filter, pagination.offset(), pagination.limit())
        .await
        .map_err(mask_internal("Internal server error"))?;

    Ok(HttpResponse::Ok().json(FeedbacksPage {
        feedbacks,
        page: pagination.page(),
        limit: pagination.limit(),
        total,
        total_pages: pagination.total_pages(total),
    }))
}
