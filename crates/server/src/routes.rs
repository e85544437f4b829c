//! API route handlers

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use analysis::{Bill, SubmissionReport, TrendInsights};

use crate::error::ApiError;
use crate::registry::{NewSchool, SchoolRecord};
use crate::AppState;

/// Round for presentation.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn current_month() -> String {
    chrono::Utc::now().format("%Y-%m").to_string()
}

pub async fn register_school(
    State(state): State<AppState>,
    payload: Result<Json<NewSchool>, JsonRejection>,
) -> Result<(StatusCode, Json<SchoolRecord>), ApiError> {
    let Json(req) = payload?;
    if req.name.trim().is_empty() || !req.area.is_finite() || req.area <= 0.0 || req.students == 0 {
        return Err(ApiError::BadRequest(
            "Name, area, and students required".to_string(),
        ));
    }

    let record = state.registry.write().await.register(req);
    tracing::info!(id = record.id, name = %record.name, "registered school");
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_schools(State(state): State<AppState>) -> Json<Vec<SchoolRecord>> {
    let registry = state.registry.read().await;
    Json(registry.schools().cloned().collect())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRequest {
    pub school_id: u64,
    pub month: Option<String>,
    pub kwh: f64,
    #[serde(default)]
    pub elec_cost: f64,
    pub liters: f64,
    #[serde(default)]
    pub water_cost: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub month: String,
    pub per_student_kwh: f64,
    pub per_area_kwh: f64,
    pub elec_score: f64,
    pub per_student_liters: f64,
    pub per_area_liters: f64,
    pub water_score: f64,
    pub efficiency_score: f64,
    pub anomaly: Option<String>,
    pub kwh_prediction: Option<f64>,
    pub water_prediction: Option<f64>,
}

impl From<SubmissionReport> for BillResponse {
    fn from(report: SubmissionReport) -> Self {
        let scores = report.scores;
        Self {
            month: report.bill.period,
            per_student_kwh: round_to(scores.per_student_electricity, 2),
            per_area_kwh: round_to(scores.per_area_electricity, 4),
            elec_score: round_to(scores.electricity_score, 0),
            per_student_liters: round_to(scores.per_student_water, 2),
            per_area_liters: round_to(scores.per_area_water, 4),
            water_score: round_to(scores.water_score, 0),
            efficiency_score: round_to(report.efficiency_score, 2),
            anomaly: report.anomaly,
            kwh_prediction: report.predictions.electricity.map(|v| round_to(v, 2)),
            water_prediction: report.predictions.water.map(|v| round_to(v, 2)),
        }
    }
}

pub async fn submit_bill(
    State(state): State<AppState>,
    payload: Result<Json<BillRequest>, JsonRejection>,
) -> Result<Json<BillResponse>, ApiError> {
    let Json(req) = payload?;
    let month = req
        .month
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(current_month);
    let bill = Bill::new(month, req.kwh, req.liters).with_costs(req.elec_cost, req.water_cost);

    // Held across analysis so concurrent submissions see each other's bills.
    let mut registry = state.registry.write().await;
    let school = registry
        .school(req.school_id)
        .ok_or_else(|| ApiError::NotFound("School not found".to_string()))?
        .profile();

    let report = state
        .analyzer
        .submit(&school, registry.history(req.school_id), &bill)?;
    if !registry.record_bill(req.school_id, bill, report.efficiency_score) {
        return Err(ApiError::NotFound("School not found".to_string()));
    }

    tracing::info!(
        school_id = req.school_id,
        month = %report.bill.period,
        efficiency_score = report.efficiency_score,
        "bill analyzed"
    );
    Ok(Json(report.into()))
}

#[derive(Debug, Serialize)]
pub struct TrendEntry {
    pub month: String,
    pub kwh: f64,
    pub liters: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionEntry {
    pub elec_pred: Option<f64>,
    pub water_pred: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub trends: Vec<TrendEntry>,
    pub predictions: PredictionEntry,
    pub anomaly: Option<String>,
}

impl From<TrendInsights> for InsightsResponse {
    fn from(insights: TrendInsights) -> Self {
        Self {
            trends: insights
                .trends
                .into_iter()
                .map(|p| TrendEntry {
                    month: p.period,
                    kwh: p.electricity_kwh,
                    liters: p.water_liters,
                })
                .collect(),
            predictions: PredictionEntry {
                elec_pred: insights.predictions.electricity.map(|v| round_to(v, 2)),
                water_pred: insights.predictions.water.map(|v| round_to(v, 2)),
            },
            anomaly: insights.anomaly,
        }
    }
}

pub async fn trend_insights(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<InsightsResponse>, ApiError> {
    let Path(school_id) = path?;
    let registry = state.registry.read().await;
    if registry.school(school_id).is_none() {
        return Err(ApiError::NotFound("School not found".to_string()));
    }
    let insights = state.analyzer.insights(registry.history(school_id));
    Ok(Json(insights.into()))
}
