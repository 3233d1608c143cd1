//! Plain-text report export for one `AnalysisResult`.
//! Human-readable only; nothing parses it back.

use crate::models::analysis::{AnalysisResult, Suggestion};

pub const REPORT_FILE_NAME: &str = "relatorio-joule-academy.txt";

pub fn render_report(result: &AnalysisResult) -> String {
    let compatibility = &result.compatibility;
    let mut out = String::new();

    out.push_str("Relatório de Análise - Joule Academy\n");
    out.push_str("========================================\n\n");
    out.push_str(&format!(
        "COMPATIBILIDADE GERAL: {}%\n",
        compatibility.total_score
    ));
    out.push_str(&format!("Feedback: {}\n\n", compatibility.feedback));

    out.push_str("DETALHAMENTO DA COMPATIBILIDADE\n---------------------------------\n");
    for factor in &compatibility.breakdown {
        out.push_str(&format!(
            "- {}: {}%\n  Justificativa: {}\n\n",
            factor.factor, factor.score, factor.justification
        ));
    }

    if !compatibility.focused_improvement_suggestions.is_empty() {
        out.push_str(
            "SUGESTÕES FOCADAS (PONTO DE MELHORIA)\n-------------------------------------------\n",
        );
        push_suggestions(&mut out, &compatibility.focused_improvement_suggestions);
    }

    out.push_str("HABILIDADES EM COMUM\n--------------------\n");
    if result.common_skills.is_empty() {
        out.push_str("Nenhuma habilidade em comum identificada.\n");
    } else {
        for skill in &result.common_skills {
            out.push_str(&format!(
                "- {} (Importância: {})\n",
                skill.skill, skill.importance
            ));
        }
    }
    out.push('\n');

    out.push_str("SUGESTÕES DE MELHORIA (GERAL)\n------------------------------\n");
    push_suggestions(&mut out, &result.improvement_suggestions);

    out.push_str("APLICANDO MELHORIAS (MÉTODO STAR)\n------------------------------------\n");
    for guide in &result.star_method_guides {
        out.push_str(&format!(
            "Para a sugestão: \"{}\"\n  S (Situação): {}\n  T (Tarefa): {}\n  A (Ação): {}\n  R (Resultado): {}\n\n",
            guide.suggestion_title, guide.situation, guide.task, guide.action, guide.result
        ));
    }

    out
}

fn push_suggestions(out: &mut String, suggestions: &[Suggestion]) {
    for s in suggestions {
        out.push_str(&format!("Área: {}\nSugestão: {}\n\n", s.area, s.suggestion));
    }
}
