// Shared prompt fragments and prompt-building utilities.
// Each feature that calls the LLM keeps its own prompts.rs alongside it.

/// Register shared by every prompt sent on behalf of the user.
pub const PROFESSIONAL_TONE: &str = "O tom da sua análise deve ser profissional, claro, \
    construtivo e motivador. O objetivo é ajudar o usuário a melhorar seu currículo e \
    entender suas chances para a vaga.";

/// Substitutes `{key}` placeholders in a single left-to-right pass.
///
/// User text is inserted verbatim and never rescanned, so a résumé that happens
/// to contain `{job_description}` is not expanded again.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(
        template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>(),
    );
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
