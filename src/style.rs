//! Humanization styles and their instruction templates.

use std::fmt;

/// A tone/register the rewrite should aim for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Conversational,
    Professional,
    Friendly,
    Storytelling,
    LaymanTerms,
    IndianEnglish,
}

const CONVERSATIONAL: &str = "Transform the following text to sound more conversational and human-like:
- Use natural speech patterns
- Add appropriate contractions (don't, won't, can't)
- Include casual transitions and connectors
- Make it sound like someone is actually talking
- Keep the core meaning intact";

const PROFESSIONAL: &str = "Rewrite the following text to sound more professional yet human:
- Use polished but natural language
- Maintain professionalism while adding warmth
- Include appropriate business-friendly expressions
- Make it sound like an expert speaking naturally
- Keep the technical accuracy intact";

const FRIENDLY: &str = "Transform the following text to sound more friendly and approachable:
- Use warm, welcoming language
- Add encouraging phrases where appropriate
- Make it sound like a helpful friend explaining something
- Include empathetic expressions
- Keep the information accurate and helpful";

const STORYTELLING: &str = "Rewrite the following text in a storytelling style:
- Use narrative elements where appropriate
- Add descriptive language and examples
- Make it engaging and relatable
- Include personal touches and anecdotes if suitable
- Maintain the factual content";

const LAYMAN_TERMS: &str = "Rewrite the following text in simple, layman-friendly language:
- Avoid technical terms and jargon
- Use everyday examples or analogies
- Break down complex ideas into plain language
- Use short, clear sentences
- Make it easy for someone with no background knowledge to understand";

const INDIAN_ENGLISH: &str = "Rewrite the following text in Indian English:
- Use sentence structures common in Indian usage
- Include polite and respectful expressions (e.g., 'kindly', 'please do the needful') where suitable
- Reflect a slightly formal but approachable tone
- Use Indian expressions or culturally familiar terms where appropriate
- Keep the original meaning intact while sounding locally natural";

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Conversational,
        Style::Professional,
        Style::Friendly,
        Style::Storytelling,
        Style::LaymanTerms,
        Style::IndianEnglish,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Style::Conversational => "conversational",
            Style::Professional => "professional",
            Style::Friendly => "friendly",
            Style::Storytelling => "storytelling",
            Style::LaymanTerms => "layman_terms",
            Style::IndianEnglish => "indian_english",
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            Style::Conversational => CONVERSATIONAL,
            Style::Professional => PROFESSIONAL,
            Style::Friendly => FRIENDLY,
            Style::Storytelling => STORYTELLING,
            Style::LaymanTerms => LAYMAN_TERMS,
            Style::IndianEnglish => INDIAN_ENGLISH,
        }
    }

    /// Exact match on the style key. `None` for anything unrecognized.
    pub fn from_id(id: &str) -> Option<Style> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Like [`Style::from_id`] but never fails: unknown ids become the default style.
    pub fn resolve_id(id: &str) -> Style {
        Self::from_id(id).unwrap_or_default()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Instruction block for `style_id`, falling back to the conversational one.
pub fn resolve(style_id: &str) -> &'static str {
    Style::resolve_id(style_id).instructions()
}
