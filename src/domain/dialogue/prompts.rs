//! Fixed reply texts and the formatters that assemble them.
//!
//! All replies are produced in the working language (English); localization
//! happens at the application boundary.

use crate::domain::candidate::CandidateField;
use crate::domain::questions::QuestionSet;

use super::sentiment::Sentiment;

pub const OPENING: &str = "👋 Please type 'hi' to start.";

pub const GREETING: &str = "👋 Hello! I’m the Hiring Assistant. I’ll collect a few details and then generate tailored technical questions based on your tech stack. Let's start!";

pub const TYPE_HI: &str = "Please type 'hi' to begin.";

pub const THANK_YOU: &str =
    "✅ Thank you for your time. We'll review your submission and contact you with next steps.";

pub const FALLBACK: &str = "⚠️ Sorry, I didn't quite understand that. Could you rephrase?";

pub const TECH_STACK_PROMPT: &str = "✅ All set. Please now provide your Tech Stack (comma-separated): languages, frameworks, databases, tools.";

pub const TECH_STACK_UNPARSEABLE: &str = "I couldn't parse your tech stack. Please provide comma-separated technologies (e.g. Python, Django, PostgreSQL).";

pub const FINISH_HINT: &str = "When you're done, say 'exit' or 'bye' to finish.";

const POSITIVE_DECORATION: &str = "🙂 I sense positive vibes!";

const NEGATIVE_DECORATION: &str = "😟 I sense some concerns. Don’t worry, I’ll guide you through.";

const NEGATIVE_REPLY: &str = "I sense some hesitation. Don’t worry, take your time — you’re doing great! If you want more questions, say 'more'. Otherwise, say 'exit' to finish.";

const POSITIVE_REPLY: &str = "Glad to hear your enthusiasm! 🎉 If you want more questions, say 'more'. Otherwise, say 'exit' to finish.";

const NEUTRAL_REPLY: &str = "If you want more questions, say 'more'. Otherwise, say 'exit' to finish. You can also provide a new tech stack for fresh questions.";

/// Greeting plus the prompt for the first field.
pub fn greeting_reply() -> String {
    format!(
        "{}\nPlease provide your {}.",
        GREETING,
        CandidateField::ORDERED[0].label()
    )
}

pub fn field_recorded(field: CandidateField, next: CandidateField) -> String {
    format!(
        "✅ {} recorded. Please provide your {}.",
        field.label(),
        next.label()
    )
}

pub fn sentiment_reply(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => POSITIVE_REPLY,
        Sentiment::Neutral => NEUTRAL_REPLY,
        Sentiment::Negative => NEGATIVE_REPLY,
    }
}

/// Presentation pass over a finished reply.
///
/// Appends a sentiment remark for non-neutral messages, then addresses the
/// candidate by name once it is known.
pub fn decorate(reply: &str, sentiment: Sentiment, name: Option<&str>) -> String {
    let mut decorated = match sentiment {
        Sentiment::Positive => format!("{}\n\n{}", reply, POSITIVE_DECORATION),
        Sentiment::Negative => format!("{}\n\n{}", reply, NEGATIVE_DECORATION),
        Sentiment::Neutral => reply.to_string(),
    };
    if let Some(name) = name {
        decorated = format!("{}, {}", name, decorated);
    }
    decorated
}

/// Renders a question set addressed to `name`.
///
/// Each technology gets an upper-cased `--- TECH ---` header followed by
/// numbered questions and a blank line.
pub fn questions_reply(name: &str, questions: &QuestionSet) -> String {
    let mut lines = vec![format!(
        "Thank you {} — based on your tech stack, here are tailored technical questions:\n",
        name
    )];
    lines.extend(question_blocks(questions));
    lines.push(FINISH_HINT.to_string());
    lines.join("\n")
}

/// Renders a follow-up question set without the personalized header.
pub fn more_questions_reply(questions: &QuestionSet) -> String {
    let mut lines = vec!["Here are some fresh questions:\n".to_string()];
    lines.extend(question_blocks(questions));
    lines.push(FINISH_HINT.to_string());
    lines.join("\n")
}

fn question_blocks(questions: &QuestionSet) -> Vec<String> {
    let mut lines = Vec::new();
    for section in questions.iter() {
        lines.push(format!("--- {} ---", section.technology.to_uppercase()));
        for (i, question) in section.questions.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, question));
        }
        lines.push(String::new());
    }
    lines
}
