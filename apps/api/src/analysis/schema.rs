//! Structured-output schema sent with the analysis prompt.
//!
//! Uses the Gemini `responseSchema` dialect (upper-case type names). The shape
//! mirrors `models::analysis::AnalysisResult` field for field; the parser
//! relies on the `required` lists declared here.

use serde_json::{json, Value};

fn suggestion_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "area": {
                "type": "STRING",
                "description": "A área do currículo que pode ser melhorada (ex: 'Experiência', 'Habilidades')."
            },
            "suggestion": {
                "type": "STRING",
                "description": "A sugestão específica de melhoria."
            }
        },
        "required": ["area", "suggestion"]
    })
}

fn star_field(letter: &str, name: &str, extra: &str) -> Value {
    json!({
        "type": "STRING",
        "description": format!(
            "Guia para o usuário sobre como descrever {name} ({letter}) relacionada à sugestão{extra}. \
             Deve ser uma instrução, não um exemplo pronto."
        )
    })
}

/// Builds the response schema for `AnalysisResult`.
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "compatibility": {
                "type": "OBJECT",
                "properties": {
                    "totalScore": {
                        "type": "INTEGER",
                        "description": "A pontuação geral de 0 a 100 representando a compatibilidade do currículo com a vaga."
                    },
                    "feedback": {
                        "type": "STRING",
                        "description": "Um breve feedback sobre a compatibilidade geral."
                    },
                    "breakdown": {
                        "type": "ARRAY",
                        "description": "Uma análise detalhada dos fatores que compõem a pontuação de compatibilidade.",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "factor": {
                                    "type": "STRING",
                                    "description": "O fator de compatibilidade analisado (ex: 'Experiência Profissional', 'Habilidades Técnicas', 'Formação/Certificações')."
                                },
                                "score": {
                                    "type": "INTEGER",
                                    "description": "A pontuação de 0 a 100 para este fator específico."
                                },
                                "justification": {
                                    "type": "STRING",
                                    "description": "Uma breve justificativa para a pontuação atribuída a este fator."
                                }
                            },
                            "required": ["factor", "score", "justification"]
                        }
                    },
                    "focusedImprovementSuggestions": {
                        "type": "ARRAY",
                        "description": "Sugestões de melhoria focadas especificamente na área de compatibilidade com a menor pontuação.",
                        "items": suggestion_schema()
                    }
                },
                "required": ["totalScore", "feedback", "breakdown"]
            },
            "commonSkills": {
                "type": "ARRAY",
                "description": "Uma lista das habilidades em comum entre a vaga e o currículo.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "skill": {
                            "type": "STRING",
                            "description": "O nome da habilidade."
                        },
                        "importance": {
                            "type": "STRING",
                            "description": "A importância da habilidade para a vaga (ex: 'Alta', 'Média')."
                        }
                    },
                    "required": ["skill", "importance"]
                }
            },
            "improvementSuggestions": {
                "type": "ARRAY",
                "description": "Sugestões para melhorar o currículo de forma geral.",
                "items": suggestion_schema()
            },
            "starMethodGuides": {
                "type": "ARRAY",
                "description": "Guias práticos usando a metodologia STAR para ensinar o usuário a aplicar as sugestões.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "suggestionTitle": {
                            "type": "STRING",
                            "description": "O título da sugestão de melhoria à qual este guia se refere."
                        },
                        "situation": star_field("S", "a Situação", ""),
                        "task": star_field("T", "a Tarefa", ""),
                        "action": star_field("A", "a Ação", ""),
                        "result": star_field("R", "o Resultado", ", focando em métricas e impacto")
                    },
                    "required": ["suggestionTitle", "situation", "task", "action", "result"]
                }
            }
        },
        "required": ["compatibility", "commonSkills", "improvementSuggestions", "starMethodGuides"]
    })
}
