//! HTTP boundary.
//!
//! One POST endpoint runs the pipeline; two GET endpoints serve static
//! payloads. Wire field names are the contract the (Portuguese) frontend
//! consumes and must not change. Concurrency is the runtime's concern:
//! handlers share only an `Arc<SiteService>` holding no mutable state.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::site::error::PipelineError;
use crate::site::pipeline::{self, PipelineResult};
use crate::site::service::SiteService;
use crate::site::types::SiteClassification;
use crate::{log_error, log_info};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    service: Arc<SiteService>,
}

/// Builds the application router
pub fn app(service: Arc<SiteService>) -> Router {
    Router::new()
        .route("/api/criar-site", post(create_site))
        .route("/api/health", get(health))
        .route("/api/exemplos", get(examples))
        .layer(CorsLayer::permissive())
        .with_state(AppState { service })
}

/// Binds the listener and serves until shutdown
pub async fn serve(addr: SocketAddr, service: Arc<SiteService>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log_info!("Listening on http://{}", addr);
    axum::serve(listener, app(service)).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct CreateSiteRequest {
    #[serde(default)]
    requisicao: String,
}

#[derive(Debug, Serialize)]
struct CreateSiteResponse {
    sucesso: bool,
    acao_final: &'static str,
    html: String,
    css: String,
    js: String,
    react: String,
    resposta: String,
    triagem: SiteClassification,
}

impl From<PipelineResult> for CreateSiteResponse {
    fn from(result: PipelineResult) -> Self {
        Self {
            sucesso: result.success,
            acao_final: result.final_action.as_str(),
            html: result.html,
            css: result.css,
            js: result.js,
            react: result.react_component,
            resposta: result.response,
            triagem: result.classification,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    erro: String,
    mensagem: &'static str,
}

fn error_response(status: StatusCode, erro: String, mensagem: &'static str) -> Response {
    (status, Json(ErrorResponse { erro, mensagem })).into_response()
}

async fn create_site(
    State(state): State<AppState>,
    Json(payload): Json<CreateSiteRequest>,
) -> Response {
    match pipeline::run(&state.service, &payload.requisicao).await {
        Ok(result) => Json(CreateSiteResponse::from(result)).into_response(),
        Err(PipelineError::EmptyRequest) => error_response(
            StatusCode::BAD_REQUEST,
            "Requisição vazia".to_string(),
            "Envie uma descrição do site que deseja criar",
        ),
        Err(e) => {
            log_error!("Request failed: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                e.to_string(),
                "Erro ao processar requisição",
            )
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online",
        service: "Site Forge",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Serialize)]
struct ExamplesResponse {
    exemplos: &'static [&'static str],
    dicas: &'static [&'static str],
}

async fn examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        exemplos: &[
            "Crie uma landing page moderna com gradientes roxos e formulário de contato",
            "Faça um portfolio minimalista com dark mode e animações suaves",
            "Desenvolva um dashboard com gráficos e cards de estatísticas",
            "Construa uma página de produto com carousel de imagens e botão de compra",
            "Crie um blog moderno com layout de cards e menu hambúrguer",
            "Faça um site corporativo com seções hero, sobre, serviços e contato",
        ],
        dicas: &[
            "Seja específico sobre o tipo de site",
            "Mencione o estilo visual desejado",
            "Liste os recursos necessários",
            "Indique se prefere React ou HTML/CSS/JS",
        ],
    })
}
