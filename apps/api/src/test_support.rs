//! Fixtures shared by unit and router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::llm_client::{LlmBackend, LlmError};
use crate::models::analysis::AnalysisResult;

pub const JOB_DESCRIPTION: &str =
    "Vaga de Analista de Dados Pleno. Requisitos: SQL, Python e Power BI. Desejável: Airflow.";

pub const RESUME: &str =
    "Experiência com SQL e Python em projetos de BI por 3 anos. Bacharel em Estatística.";

pub const ANALYSIS_PAYLOAD: &str = r#"{
    "compatibility": {
        "totalScore": 72,
        "feedback": "Bom alinhamento com a vaga.",
        "breakdown": [
            {"factor": "Experiência Profissional", "score": 70, "justification": "3 anos em BI."},
            {"factor": "Habilidades Técnicas", "score": 85, "justification": "SQL e Python."},
            {"factor": "Habilidades Interpessoais (Soft Skills)", "score": 65, "justification": "Pouco detalhado."},
            {"factor": "Formação/Certificações", "score": 50, "justification": "Sem certificações."}
        ],
        "focusedImprovementSuggestions": [
            {"area": "Formação/Certificações", "suggestion": "Inclua cursos de Power BI."}
        ]
    },
    "commonSkills": [
        {"skill": "SQL", "importance": "Alta"},
        {"skill": "Python", "importance": "Média"}
    ],
    "improvementSuggestions": [
        {"area": "Experiência", "suggestion": "Quantifique resultados."}
    ],
    "starMethodGuides": [
        {
            "suggestionTitle": "Quantifique resultados.",
            "situation": "Pense em um projeto de dados. Qual era o contexto?",
            "task": "Qual era a sua responsabilidade?",
            "action": "Quais ferramentas você usou?",
            "result": "Que métrica melhorou?"
        }
    ]
}"#;

pub const SEARCH_REPLY: &str = "Analista de Dados Jr @ Empresa X | LinkedIn | https://example.com/1
not a job line
Cientista de Dados @ Empresa Y | Gupy | https://example.com/2";

pub fn sample_analysis() -> AnalysisResult {
    serde_json::from_str(ANALYSIS_PAYLOAD).expect("fixture payload must parse")
}

/// Outcome a `ScriptedLlm` returns for every call.
pub enum Script {
    Reply(String),
    ApiError(u16),
}

/// `LlmBackend` that replays a fixed reply and records the prompts it saw.
pub struct ScriptedLlm {
    script: Script,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    pub fn reply(text: &str) -> Self {
        Self {
            script: Script::Reply(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            script: Script::ApiError(status),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn respond(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::ApiError(status) => Err(LlmError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

#[async_trait]
impl LlmBackend for ScriptedLlm {
    async fn generate_structured(&self, prompt: &str, _schema: &Value) -> Result<String, LlmError> {
        self.respond(prompt)
    }

    async fn generate_with_search(&self, prompt: &str) -> Result<String, LlmError> {
        self.respond(prompt)
    }
}
