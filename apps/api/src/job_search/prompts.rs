// Prompt template for the search-tool job lookup.
//
// The line format requested here is the wire contract `parser` depends on.
// Change both together.

use crate::llm_client::prompts::fill_template;

pub const MAX_RESULTS: usize = 5;
pub const FRESHNESS_DAYS: u32 = 30;
pub const PLATFORMS: [&str; 5] = ["Gupy", "LinkedIn", "Infojobs", "99jobs", "Vagas.com"];

/// One line per posting, exactly.
pub const LINE_FORMAT: &str = "[TÍTULO DA VAGA] @ [EMPRESA] | [PLATAFORMA] | [URL]";

/// Search prompt template.
/// Replace: {max_results}, {days}, {platforms}, {line_format}, {job_description}, {resume}
pub const SEARCH_PROMPT_TEMPLATE: &str = r#"Você é um headhunter especialista. Baseado no currículo e na descrição de vaga a seguir, sua tarefa é usar a busca para encontrar {max_results} vagas de emprego que estejam **atualmente abertas** e sejam altamente compatíveis no Brasil.

**REGRAS IMPORTANTES:**
1.  **FILTRO DE DATA:** Retorne apenas vagas publicadas nos **últimos {days} dias**. Ignore vagas mais antigas.
2.  **FOCO DIRECIONADO:** Concentre sua busca **exclusivamente** nas seguintes plataformas: **{platforms}**.
3.  **VAGAS ATIVAS:** É crucial que você retorne apenas vagas que ainda estão aceitando candidaturas. Verifique se os links não estão expirados.
4.  **FORMATAÇÃO ESTRITA:** Para cada vaga encontrada, formate a resposta EXATAMENTE da seguinte maneira, em uma linha separada por vaga:
    {line_format}
5.  **RESPOSTA LIMPA:** Sua resposta deve conter APENAS as linhas com as vagas. Não inclua nenhum texto introdutório, cabeçalhos, resumos ou explicações. Não use formatação markdown como ```.

**Descrição da Vaga de Referência:**
---
{job_description}
---

**Currículo do Candidato:**
---
{resume}
---"#;

/// Builds the search instructions with both inputs embedded verbatim.
pub fn build_search_prompt(resume: &str, job_description: &str) -> String {
    let platforms = join_platforms(&PLATFORMS);
    fill_template(
        SEARCH_PROMPT_TEMPLATE,
        &[
            ("max_results", &MAX_RESULTS.to_string()),
            ("days", &FRESHNESS_DAYS.to_string()),
            ("platforms", &platforms),
            ("line_format", LINE_FORMAT),
            ("job_description", job_description),
            ("resume", resume),
        ],
    )
}

/// "A, B, C e D"
fn join_platforms(platforms: &[&str]) -> String {
    match platforms {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} e {}", init.join(", "), last),
    }
}
