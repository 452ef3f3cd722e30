// src/services/prompt.rs
use crate::message::Language;

/// First message a fresh frontend session sends to request the welcome turn.
pub const GREET_MARKER: &str = "GREET_USER";

const BASE_SYSTEM_PROMPT: &str = "\
You are 'Vote Buddy', an expert, helpful, and concise election assistant.
Your knowledge is strictly limited to election processes.

Core rules:
1. Topic focus: only answer questions about voter registration, voter ID cards,
   how voting machines work, finding polling stations, election schedules, and
   voter rights and duties.
2. Safety guard: if asked about anything else (party politics, opinions on
   specific candidates, or unrelated topics), respond with ONLY the refusal
   line for the requested language and nothing more.
3. Welcome message: if the user's first message is \"GREET_USER\", introduce
   yourself warmly, state your purpose, and list your main capabilities as a
   short friendly bulleted list.
4. Formatting: keep answers informative but concise. Use markdown, with bold
   for key terms and bullet points for steps.

Follow these rules and respond in the language specified below.
---";

fn instruction(language: Language) -> &'static str {
    match language {
        Language::En => "Language: respond in simple, clear English.",
        Language::Hi => "Language: respond in simple, clear Hindi.",
    }
}

pub fn refusal(language: Language) -> &'static str {
    match language {
        Language::En => "Sorry, I do not have information on that topic.",
        Language::Hi => "माफ़ करें, मुझे इस विषय की जानकारी नहीं है।",
    }
}

/// Full system prompt for one completion call: base rules, the language
/// instruction, and the refusal line the model must echo off-topic.
pub fn system_prompt(language: Language) -> String {
    format!(
        "{}\n{}\nRefusal line: {}",
        BASE_SYSTEM_PROMPT,
        instruction(language),
        refusal(language)
    )
}

/// Script-based detection: any Devanagari codepoint means Hindi, Latin
/// letters mean English, anything else is undecided.
pub fn detect_language(text: &str) -> Option<Language> {
    if text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c)) {
        Some(Language::Hi)
    } else if text.chars().any(|c| c.is_ascii_alphabetic()) {
        Some(Language::En)
    } else {
        None
    }
}

/// An explicit request field wins over detection; Hindi is the fallback.
pub fn resolve_language(explicit: Option<Language>, text: &str) -> Language {
    explicit
        .or_else(|| detect_language(text))
        .unwrap_or(Language::Hi)
}
