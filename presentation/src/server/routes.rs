//! Route handlers for the forecast service

use super::error::ServerError;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use station_application::RunForecastUseCase;
use station_domain::{ForecastReport, Keyword};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    forecast: Arc<RunForecastUseCase>,
}

/// Body of `POST /api/analyze`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub keyword: Option<String>,
}

/// Body of `GET /api/health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub providers: Vec<String>,
}

/// Build the API router (without middleware)
pub fn create_route(forecast: Arc<RunForecastUseCase>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/health", get(health))
        .with_state(AppState { forecast })
}

async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ForecastReport>, ServerError> {
    let keyword = Keyword::try_new(request.keyword.unwrap_or_default())?;
    info!(keyword = %keyword, "Analyze request");

    Ok(Json(state.forecast.execute(&keyword).await))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        providers: state.forecast.analyzer().provider_names(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use station_application::{
        AnalysisParams, AnalyzeSentimentUseCase, GatewayError, LlmProvider, NoSearch,
    };
    use station_domain::{ProviderRole, Weather};
    use tower::ServiceExt;

    struct CannedProvider {
        models: Vec<String>,
        reply: Result<String, GatewayError>,
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        fn name(&self) -> &str {
            "Gemini"
        }

        fn role(&self) -> ProviderRole {
            ProviderRole::Primary
        }

        fn models(&self) -> &[String] {
            &self.models
        }

        async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, GatewayError> {
            self.reply.clone()
        }
    }

    fn app(reply: Result<String, GatewayError>) -> Router {
        let provider: Arc<dyn LlmProvider> = Arc::new(CannedProvider {
            models: vec!["m1".to_string()],
            reply,
        });
        let analyzer = Arc::new(AnalyzeSentimentUseCase::new(
            vec![provider],
            AnalysisParams::default(),
        ));
        let search: Arc<dyn station_application::SearchGateway> = Arc::new(NoSearch);
        create_route(Arc::new(RunForecastUseCase::new(search, analyzer)))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_returns_report() {
        let reply = r#"{"positive":80,"negative":10,"neutral":10,"hasControversial":false,
            "rootCause":"好評","highlightedEvent":"発表会","forecasterMessage":"快晴です"}"#;
        let response = app(Ok(reply.to_string()))
            .oneshot(post_json(r#"{"keyword":"  猫  "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["keyword"], "猫");
        assert_eq!(body["weather"], "sunny");
        assert_eq!(body["weatherLabel"], "快晴");
        assert_eq!(body["rootCause"], "好評");
        assert_eq!(body["analysisSources"], serde_json::json!(["Gemini"]));
        assert_eq!(body["sources"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_blank_keyword_is_bad_request() {
        for body in [r#"{"keyword":"   "}"#, r#"{"keyword":""}"#, "{}"] {
            let response = app(Ok(String::new())).oneshot(post_json(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            let json = body_json(response).await;
            assert_eq!(json["error"], "キーワードを入力してください。");
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_client_error() {
        let response = app(Ok(String::new()))
            .oneshot(post_json("not json"))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_provider_failure_still_returns_forecast() {
        let response = app(Err(GatewayError::Http {
            status: 500,
            body: "boom".into(),
        }))
        .oneshot(post_json(r#"{"keyword":"猫"}"#))
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let report: ForecastReport =
            serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(report.weather, Weather::Cloudy);
        assert_eq!((report.positive, report.negative, report.neutral), (40, 20, 40));
        assert!(report.analysis_sources.is_empty());
    }

    #[tokio::test]
    async fn test_health_lists_providers() {
        let response = app(Ok(String::new()))
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["providers"], serde_json::json!(["Gemini"]));
    }
}
