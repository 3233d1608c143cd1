// Prompt template for the résumé analysis call.

use crate::llm_client::prompts::{fill_template, PROFESSIONAL_TONE};

/// The four factors every breakdown must score, in order.
pub const COMPATIBILITY_FACTORS: [&str; 4] = [
    "Experiência Profissional",
    "Habilidades Técnicas",
    "Habilidades Interpessoais (Soft Skills)",
    "Formação/Certificações",
];

/// Analysis prompt template.
/// Replace: {tone}, {factors}, {job_description}, {resume}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Você é um especialista em recrutamento e seleção com vasta experiência em análise de currículos e descrições de vagas. Sua tarefa é analisar o currículo e a descrição da vaga fornecidos, e retornar uma análise detalhada em formato JSON.

{tone}

**Descrição da Vaga:**
---
{job_description}
---

**Currículo:**
---
{resume}
---

Por favor, realize as seguintes análises e estruture sua resposta estritamente de acordo com o schema JSON fornecido:

1.  **Compatibilidade:**
    a.  **Análise Detalhada (Breakdown):** Analise a compatibilidade com base nos seguintes fatores: {factors}. Para cada fator, forneça uma pontuação de 0 a 100 e uma breve justificativa para a pontuação.
    b.  **Pontuação Geral (totalScore):** Calcule uma pontuação geral de 0 a 100, que deve ser uma média ponderada dos fatores acima, onde 'Experiência Profissional' e 'Habilidades Técnicas' têm peso maior.
    c.  **Feedback Geral:** Forneça um feedback conciso e encorajador sobre a compatibilidade geral, com base na pontuação geral.
    d.  **Sugestões de Melhoria Focadas:** Após a análise, identifique o fator do 'breakdown' com a MENOR pontuação. Crie 2-3 sugestões de melhoria (focusedImprovementSuggestions) que sejam específicas e direcionadas para aumentar a pontuação NESSA ÁREA em particular. A sugestão deve indicar claramente a qual fator ela se refere.
2.  **Habilidades em Comum:** Identifique e liste as habilidades mais relevantes que estão presentes tanto no currículo quanto na descrição da vaga. Classifique a importância de cada habilidade para a função.
3.  **Sugestões de Melhoria (Geral):** Forneça sugestões práticas e gerais para aprimorar o currículo. Foque em áreas como destacar resultados, incluir palavras-chave da vaga, e reorganizar experiências para maior impacto.
4.  **Aplicando Melhorias (Metodologia STAR):** Para cada sugestão da seção 'Sugestões de Melhoria', crie um guia passo a passo que ensine o usuário a aplicar a melhoria em seu próprio currículo usando a metodologia STAR. Não reescreva uma experiência para o usuário. Em vez disso, para cada letra (S, T, A, R), dê instruções e perguntas que o guiem a refletir e escrever sobre suas próprias experiências de forma impactante. Por exemplo, para 'Situação', você poderia sugerir: 'Pense em um projeto ou desafio específico onde você usou [habilidade X]. Qual era o contexto?'. O objetivo é ensinar o usuário a construir suas próprias narrativas de impacto."#;

/// Builds the analysis instructions with both inputs embedded verbatim.
pub fn build_analysis_prompt(job_description: &str, resume: &str) -> String {
    let factors = COMPATIBILITY_FACTORS
        .iter()
        .map(|f| format!("'{f}'"))
        .collect::<Vec<_>>()
        .join(", ");

    fill_template(
        ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("tone", PROFESSIONAL_TONE),
            ("factors", &factors),
            ("job_description", job_description),
            ("resume", resume),
        ],
    )
}
