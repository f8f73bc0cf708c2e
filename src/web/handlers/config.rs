//! # Configuration Handlers
//!
//! The activity configuration page and the parameter schema the platform
//! reads before deploying. Both are static: the schema describes the three
//! configurable activity parameters and never depends on task state.

use axum::response::Html;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::facade::ACTIVITY_NAME;

/// One configurable activity parameter
#[derive(Debug, Serialize)]
pub struct ParamDescriptor {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub value_type: &'static str,
    pub label: &'static str,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

/// Parameter schema response
#[derive(Debug, Serialize)]
pub struct JsonParamsResponse {
    pub activity: &'static str,
    pub description: &'static str,
    pub params: Vec<ParamDescriptor>,
}

/// Configuration page: GET /tasktrack/config
///
/// Plain HTML so the platform can verify the service responds; the real
/// configuration form lives on the platform side.
pub async fn config_page() -> Html<&'static str> {
    Html(
        "<html>\
           <head><title>TaskTrack - Configuração</title></head>\
           <body>\
             <h1>Configuração da atividade TaskTrack</h1>\
             <p>Página de configuração da atividade de gestão de tarefas.</p>\
           </body>\
         </html>",
    )
}

/// Parameter schema: GET /tasktrack/json-params
pub async fn json_params() -> Json<JsonParamsResponse> {
    Json(JsonParamsResponse {
        activity: ACTIVITY_NAME,
        description: "Mini aplicação de gestão de tarefas com tempo limite.",
        params: vec![
            ParamDescriptor {
                name: "max_tasks",
                value_type: "integer",
                label: "Número máximo de tarefas",
                default: json!(5),
                min: Some(1),
                max: Some(20),
            },
            ParamDescriptor {
                name: "time_limit_minutes",
                value_type: "integer",
                label: "Tempo limite (minutos)",
                default: json!(30),
                min: Some(5),
                max: Some(180),
            },
            ParamDescriptor {
                name: "allow_reorder",
                value_type: "boolean",
                label: "Permitir reordenar tarefas",
                default: json!(true),
                min: None,
                max: None,
            },
        ],
    })
}
