//! Axum route handler for the company-data feature.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::company::prompts::build_summary_prompt;
use crate::company::SearchResult;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompanyDataRequest {
    /// Company name or domain.
    pub company: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyDataResponse {
    pub company_data: Vec<SearchResult>,
    pub company_summary: String,
}

/// POST /api/v1/company-data
///
/// Searches recent news for the company, then asks the LLM to summarize the hit titles.
pub async fn handle_company_data(
    State(state): State<AppState>,
    Json(request): Json<CompanyDataRequest>,
) -> Result<Json<CompanyDataResponse>, AppError> {
    let company = request.company.trim();
    if company.is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }

    let company_data = state
        .search
        .company_news(company)
        .await
        .map_err(|e| AppError::Upstream(format!("News search failed: {e}")))?;

    let prompt = build_summary_prompt(company, &company_data);
    let company_summary = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Company summary failed: {e}")))?;

    info!(
        "Company data for '{}': {} hits summarized",
        company,
        company_data.len()
    );

    Ok(Json(CompanyDataResponse {
        company_data,
        company_summary,
    }))
}
