use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Longest free-text input accepted, in characters.
pub const MAX_INPUT_CHARS: usize = 3000;

const INJECTION_PATTERNS: [&str; 15] = [
    // instruction override
    r"(?i)ignor(e|iere)\s+(all|alle|die|the|vorheri|previous|above|obig)",
    r"(?i)(vergiss|forget)\s+(alles|everything|all|die|the)",
    r"(?i)new\s+(system|instruction|role|prompt)",
    r"(?i)neues?\s+(system|anweisung|rolle|prompt)",
    r"(?i)du\s+bist\s+(jetzt|nun|ab\s+sofort)\s+",
    r"(?i)you\s+are\s+now\s+",
    r"(?i)(override|overwrite|replace|bypass)\s+(system|instruct|prompt|rule)",
    r"(?i)(überschreibe|ersetze|umgehe)\s+(system|anweisung|prompt|regel)",
    // role play
    r"(?i)pretend\s+(to\s+be|you\s+are)",
    r"(?i)(tu|tue|mach)\s+so\s+als\s+(ob|wärst)",
    r"(?i)act\s+as\s+(if|a\s+different)",
    // score manipulation
    r"(?i)(gib|give|set|setz)\s+(mir|me|all)?\s*(all|alle)?\s*(score|level|bewertung)",
    r"(?i)(maximum|highest|höchst|level\s*5|optimizing)\s+(score|bewertung|für\s+alle)",
    // prompt extraction
    r"(?i)(show|zeig|print|output|reveal|display)\s+(your|dein|the)?\s*(system|original)?\s*(prompt|instruction|anweisung)",
    r"(?i)(what|was)\s+(is|sind|are)\s+(your|dein)\s*(system|original)?\s*(prompt|instruction|anweisung)",
];

fn injection_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        INJECTION_PATTERNS
            .iter()
            .map(|pattern| {
                Regex::new(pattern)
                    .unwrap_or_else(|err| panic!("invalid injection pattern {pattern}: {err}"))
            })
            .collect()
    })
}

/// Issue raised while cleaning a free-text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputWarning {
    Truncated,
    PromptInjection,
}

/// Cleaned text plus whatever the sanitizer noticed on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedInput {
    pub text: String,
    pub warnings: Vec<InputWarning>,
}

/// Warning attributed to a named input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWarning {
    pub field: String,
    pub warning: InputWarning,
}

fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{7f}')
}

/// Truncate, strip control characters, and flag prompt-injection phrasing.
///
/// Flagged text is still returned; callers decide whether to drop it.
pub fn sanitize_input(text: &str) -> SanitizedInput {
    let mut warnings = Vec::new();

    let truncated: String = if text.chars().count() > MAX_INPUT_CHARS {
        warnings.push(InputWarning::Truncated);
        text.chars().take(MAX_INPUT_CHARS).collect()
    } else {
        text.to_string()
    };

    let cleaned: String = truncated
        .chars()
        .filter(|&c| !is_stripped_control(c))
        .collect();

    if let Some((index, matched)) = injection_patterns()
        .iter()
        .enumerate()
        .find_map(|(index, pattern)| pattern.find(&cleaned).map(|m| (index, m.as_str())))
    {
        let excerpt: String = cleaned.chars().take(100).collect();
        let matched: String = matched.chars().take(50).collect();
        warn!(pattern = index, %matched, input = %excerpt, "prompt injection detected");
        warnings.push(InputWarning::PromptInjection);
    }

    SanitizedInput {
        text: cleaned,
        warnings,
    }
}
