use std::sync::LazyLock;

use regex::Regex;

/// CID-10 code shape: one letter, two digits, optional `.digit` subcategory.
static RE_CID_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\d{2}(?:\.\d)?$").unwrap());

/// Normalize a user-supplied code for lookup ("i10 " → "I10").
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Check whether a (normalized) code has the CID-10 shape.
pub fn is_valid_code(code: &str) -> bool {
    RE_CID_CODE.is_match(code)
}

/// Leading letter of a code, upper-cased.
pub fn chapter_letter(code: &str) -> Option<char> {
    code.trim()
        .chars()
        .next()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
}

/// CID-10 chapter title for a code.
///
/// Chapters are mostly one letter each; D and H are split by block number.
pub fn chapter_title(code: &str) -> &'static str {
    let block = code
        .trim()
        .get(1..3)
        .and_then(|digits| digits.parse::<u8>().ok())
        .unwrap_or(0);

    match chapter_letter(code) {
        Some('A' | 'B') => "Doenças infecciosas e parasitárias",
        Some('C') => "Neoplasias",
        Some('D') if block < 50 => "Neoplasias",
        Some('D') => "Doenças do sangue e dos órgãos hematopoéticos",
        Some('E') => "Doenças endócrinas, nutricionais e metabólicas",
        Some('F') => "Transtornos mentais e comportamentais",
        Some('G') => "Doenças do sistema nervoso",
        Some('H') if block < 60 => "Doenças do olho e anexos",
        Some('H') => "Doenças do ouvido e da apófise mastoide",
        Some('I') => "Doenças do aparelho circulatório",
        Some('J') => "Doenças do aparelho respiratório",
        Some('K') => "Doenças do aparelho digestivo",
        Some('L') => "Doenças da pele e do tecido subcutâneo",
        Some('M') => "Doenças do sistema osteomuscular e do tecido conjuntivo",
        Some('N') => "Doenças do aparelho geniturinário",
        Some('O') => "Gravidez, parto e puerpério",
        Some('P') => "Algumas afecções originadas no período perinatal",
        Some('Q') => "Malformações congênitas e anomalias cromossômicas",
        Some('R') => "Sintomas, sinais e achados anormais",
        Some('S' | 'T') => "Lesões, envenenamentos e consequências de causas externas",
        Some('V' | 'W' | 'X' | 'Y') => "Causas externas de morbidade e de mortalidade",
        Some('Z') => "Fatores que influenciam o estado de saúde",
        _ => "Categoria desconhecida",
    }
}
