use super::codes::chapter_letter;

const HIGH_TIER: f64 = 0.7;
const MEDIUM_TIER: f64 = 0.4;

/// Advisory strings for a diagnostic code at a given probability.
///
/// Two tier strings always come first. Cardiovascular (I), respiratory (J),
/// mental (F) and endocrine (E) codes add two chapter-specific strings.
/// Unknown or malformed codes only get the tier advice.
pub fn generate_recommendations(code: &str, probability: f64) -> Vec<String> {
    let tier: [&str; 2] = if probability >= HIGH_TIER {
        [
            "Procure atendimento médico para confirmação do diagnóstico",
            "Realize exames complementares conforme orientação médica",
        ]
    } else if probability >= MEDIUM_TIER {
        [
            "Considere consulta médica para avaliação",
            "Monitore a evolução dos sintomas",
        ]
    } else {
        [
            "Observe a evolução dos sintomas",
            "Procure atendimento médico se os sintomas piorarem",
        ]
    };

    let chapter: &[&str] = match chapter_letter(code) {
        Some('I') => &[
            "Evite esforços físicos intensos",
            "Monitore a pressão arterial",
        ],
        Some('J') => &[
            "Mantenha-se hidratado",
            "Evite ambientes com fumaça ou poluição",
        ],
        Some('F') => &[
            "Busque apoio psicológico se necessário",
            "Pratique técnicas de relaxamento",
        ],
        Some('E') => &["Monitore a alimentação", "Realize exames laboratoriais"],
        _ => &[],
    };

    tier.iter()
        .chain(chapter.iter())
        .map(|s| s.to_string())
        .collect()
}
