//! Dialogue transition engine.
//!
//! `step` is a pure function of the current session and one English-normalized
//! message. It returns the next session, the reply text and the side effect
//! the caller must carry out before committing the new session.

use rand::Rng;
use thiserror::Error;

use crate::domain::candidate::{sanitize_tech_stack, RecordError};
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::questions::{QuestionSelector, QuestionSet};

use super::prompts;
use super::sentiment::Sentiment;
use super::session::DialogueSession;
use super::stage::DialogueStage;

/// Keyword and feature configuration for the engine.
#[derive(Debug, Clone)]
pub struct DialogueConfig {
    /// Any of these contained in a message ends the conversation.
    pub exit_keywords: Vec<String>,
    /// Exact (case-insensitive) message that leaves the greeting stage.
    pub greeting_trigger: String,
    /// Name used in the questions header when none was collected.
    pub default_name: String,
    /// Allows "more" and new stack lists once questions were issued.
    pub allow_stack_resubmission: bool,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            exit_keywords: vec![
                "exit".to_string(),
                "bye".to_string(),
                "quit".to_string(),
                "goodbye".to_string(),
            ],
            greeting_trigger: "hi".to_string(),
            default_name: "Candidate".to_string(),
            allow_stack_resubmission: false,
        }
    }
}

/// A single candidate message, already in the working language.
#[derive(Debug, Clone, Copy)]
pub struct Utterance<'a> {
    pub text: &'a str,
    pub sentiment: Sentiment,
}

impl<'a> Utterance<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            sentiment: Sentiment::Neutral,
        }
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }
}

/// Work the caller performs for a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEffect {
    None,
    /// Tech stack accepted; the complete record must be persisted.
    StackCompleted(QuestionSet),
    /// Additional questions issued; nothing is persisted.
    QuestionsIssued(QuestionSet),
    /// Candidate left; persist the record when `persist` is set.
    Exited { persist: bool },
}

/// Outcome of one dialogue step.
#[derive(Debug, Clone)]
pub struct Transition {
    pub session: DialogueSession,
    pub reply: String,
    pub effect: TurnEffect,
}

impl Transition {
    fn reply_only(session: &DialogueSession, reply: impl Into<String>) -> Self {
        Self {
            session: session.clone(),
            reply: reply.into(),
            effect: TurnEffect::None,
        }
    }

    pub fn ended(&self) -> bool {
        matches!(self.effect, TurnEffect::Exited { .. })
    }
}

/// Internal invariant violations. These never reach the candidate verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogueError {
    #[error("Field index {index} is out of range")]
    FieldIndexOutOfRange { index: usize },

    #[error("Field index {index} disagrees with {collected} collected fields")]
    FieldIndexMismatch { index: usize, collected: usize },

    #[error("Questions stage reached without a tech stack")]
    MissingTechStack,

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Stage(#[from] ValidationError),
}

/// Drives the greeting, collect, tech-stack and questions stages.
#[derive(Debug, Clone, Default)]
pub struct DialogueEngine {
    config: DialogueConfig,
}

impl DialogueEngine {
    pub fn new(config: DialogueConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DialogueConfig {
        &self.config
    }

    /// True if the message contains any exit keyword.
    pub fn is_exit(&self, text: &str) -> bool {
        let lowered = text.trim().to_lowercase();
        self.config
            .exit_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }

    /// Computes the transition for one message without mutating `session`.
    pub fn step<R: Rng>(
        &self,
        session: &DialogueSession,
        utterance: Utterance<'_>,
        selector: &mut QuestionSelector<R>,
    ) -> Result<Transition, DialogueError> {
        let text = utterance.text.trim();

        if self.is_exit(text) {
            return Ok(Transition {
                session: session.clone(),
                reply: prompts::THANK_YOU.to_string(),
                effect: TurnEffect::Exited {
                    persist: !session.record.is_empty(),
                },
            });
        }

        match session.stage {
            DialogueStage::Greeting => self.greet(session, text),
            DialogueStage::Collect => self.collect(session, text),
            DialogueStage::TechStack => self.accept_stack(session, text, selector),
            DialogueStage::Questions => self.follow_up(session, utterance, text, selector),
        }
    }

    fn greet(&self, session: &DialogueSession, text: &str) -> Result<Transition, DialogueError> {
        if !text.eq_ignore_ascii_case(&self.config.greeting_trigger) {
            return Ok(Transition::reply_only(session, prompts::TYPE_HI));
        }

        let mut next = session.clone();
        next.stage = session.stage.transition_to(DialogueStage::Collect)?;
        Ok(Transition {
            session: next,
            reply: prompts::greeting_reply(),
            effect: TurnEffect::None,
        })
    }

    fn collect(&self, session: &DialogueSession, text: &str) -> Result<Transition, DialogueError> {
        let field = session
            .current_field()
            .ok_or(DialogueError::FieldIndexOutOfRange {
                index: session.next_field,
            })?;
        let collected = session.record.collected_count();
        if collected != session.next_field {
            return Err(DialogueError::FieldIndexMismatch {
                index: session.next_field,
                collected,
            });
        }

        if let Err(rejection) = field.validate(text) {
            return Ok(Transition::reply_only(session, rejection.message));
        }

        let mut next = session.clone();
        next.record = session.record.with_field(field, text)?;
        next.next_field += 1;

        let reply = match field.next() {
            Some(following) => prompts::field_recorded(field, following),
            None => {
                next.stage = session.stage.transition_to(DialogueStage::TechStack)?;
                prompts::TECH_STACK_PROMPT.to_string()
            }
        };

        Ok(Transition {
            session: next,
            reply,
            effect: TurnEffect::None,
        })
    }

    fn accept_stack<R: Rng>(
        &self,
        session: &DialogueSession,
        text: &str,
        selector: &mut QuestionSelector<R>,
    ) -> Result<Transition, DialogueError> {
        let stack = sanitize_tech_stack(text);
        if stack.is_empty() {
            return Ok(Transition::reply_only(
                session,
                prompts::TECH_STACK_UNPARSEABLE,
            ));
        }

        let mut next = session.clone();
        next.record = session.record.with_tech_stack(stack.clone())?;
        next.stage = session.stage.transition_to(DialogueStage::Questions)?;

        let questions = selector.select(&stack);
        let name = next
            .record
            .full_name()
            .unwrap_or(self.config.default_name.as_str())
            .to_string();

        Ok(Transition {
            session: next,
            reply: prompts::questions_reply(&name, &questions),
            effect: TurnEffect::StackCompleted(questions),
        })
    }

    fn follow_up<R: Rng>(
        &self,
        session: &DialogueSession,
        utterance: Utterance<'_>,
        text: &str,
        selector: &mut QuestionSelector<R>,
    ) -> Result<Transition, DialogueError> {
        if self.config.allow_stack_resubmission {
            if let Some(questions) = self.resubmitted_questions(session, text, selector)? {
                return Ok(Transition {
                    session: session.clone(),
                    reply: prompts::more_questions_reply(&questions),
                    effect: TurnEffect::QuestionsIssued(questions),
                });
            }
        }

        Ok(Transition::reply_only(
            session,
            prompts::sentiment_reply(utterance.sentiment),
        ))
    }

    // "more" resamples the stored stack; a comma-separated list samples that list.
    fn resubmitted_questions<R: Rng>(
        &self,
        session: &DialogueSession,
        text: &str,
        selector: &mut QuestionSelector<R>,
    ) -> Result<Option<QuestionSet>, DialogueError> {
        if text.eq_ignore_ascii_case("more") {
            let stack = session
                .record
                .tech_stack()
                .ok_or(DialogueError::MissingTechStack)?;
            return Ok(Some(selector.select(stack)));
        }

        if text.contains(',') {
            let stack = sanitize_tech_stack(text);
            if !stack.is_empty() {
                return Ok(Some(selector.select(&stack)));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candidate::CandidateField;
    use crate::domain::foundation::SessionId;
    use crate::domain::questions::{QuestionBank, SelectionLimits};
    use std::sync::Arc;

    fn selector() -> QuestionSelector {
        QuestionSelector::seeded(
            Arc::new(QuestionBank::builtin()),
            SelectionLimits::default(),
            42,
        )
    }

    fn run(engine: &DialogueEngine, session: &DialogueSession, text: &str) -> Transition {
        engine
            .step(session, Utterance::new(text), &mut selector())
            .unwrap()
    }

    fn drive(engine: &DialogueEngine, messages: &[&str]) -> (DialogueSession, Transition) {
        let mut selector = selector();
        let mut session = DialogueSession::new(SessionId::new());
        let mut last = None;
        for message in messages {
            let transition = engine
                .step(&session, Utterance::new(message), &mut selector)
                .unwrap();
            session = transition.session.clone();
            last = Some(transition);
        }
        (session, last.unwrap())
    }

    const PROFILE: [&str; 7] = [
        "hi",
        "John Doe",
        "john@example.com",
        "+1 202 555 0147",
        "3",
        "Software Engineer",
        "Singapore",
    ];

    mod greeting {
        use super::*;

        #[test]
        fn hi_advances_to_collect() {
            let engine = DialogueEngine::default();
            let session = DialogueSession::new(SessionId::new());
            let transition = run(&engine, &session, "Hi");

            assert_eq!(transition.session.stage, DialogueStage::Collect);
            assert!(transition.reply.ends_with("Please provide your Full Name."));
        }

        #[test]
        fn anything_else_asks_for_hi() {
            let engine = DialogueEngine::default();
            let session = DialogueSession::new(SessionId::new());
            let transition = run(&engine, &session, "hello there");

            assert_eq!(transition.session, session);
            assert_eq!(transition.reply, prompts::TYPE_HI);
        }
    }

    mod collect {
        use super::*;

        #[test]
        fn valid_field_is_recorded_and_next_requested() {
            let engine = DialogueEngine::default();
            let (session, transition) = drive(&engine, &["hi", "John Doe"]);

            assert_eq!(session.next_field, 1);
            assert_eq!(session.record.full_name(), Some("John Doe"));
            assert_eq!(
                transition.reply,
                "✅ Full Name recorded. Please provide your Email."
            );
        }

        #[test]
        fn invalid_field_changes_nothing() {
            let engine = DialogueEngine::default();
            let (session, _) = drive(&engine, &["hi", "John Doe"]);
            let transition = run(&engine, &session, "not-an-email");

            assert_eq!(transition.session, session);
            assert!(transition.reply.contains("valid email"));
            assert_eq!(transition.effect, TurnEffect::None);
        }

        #[test]
        fn invalid_value_for_each_field_keeps_session() {
            let engine = DialogueEngine::default();
            let cases = [
                (CandidateField::FullName, "R2D2", "valid name"),
                (CandidateField::Email, "john.example.com", "valid email"),
                (CandidateField::Phone, "0123456789", "valid phone number"),
                (CandidateField::YearsExperience, "-1", "valid number"),
                (CandidateField::DesiredPosition, "", "Desired Position(s)"),
                (CandidateField::CurrentLocation, "12345", "valid location"),
            ];

            for (index, (field, bad, expected)) in cases.into_iter().enumerate() {
                let (session, _) = drive(&engine, &PROFILE[..index + 1]);
                assert_eq!(session.current_field(), Some(field));

                let transition = run(&engine, &session, bad);

                assert_eq!(transition.session, session, "{:?}", field);
                assert_eq!(transition.session.stage, DialogueStage::Collect);
                assert_eq!(transition.session.next_field, index);
                assert!(
                    transition.reply.contains(expected),
                    "{:?}: {}",
                    field,
                    transition.reply
                );
                assert_eq!(transition.effect, TurnEffect::None);
            }
        }

        #[test]
        fn valid_email_after_rejection_advances_once() {
            let engine = DialogueEngine::default();
            let (session, _) = drive(&engine, &["hi", "John Doe", "not-an-email"]);
            assert_eq!(session.next_field, 1);

            let transition = run(&engine, &session, "john@example.com");
            assert_eq!(transition.session.next_field, 2);
            assert_eq!(
                transition.session.record.get(CandidateField::Email),
                Some("john@example.com")
            );
        }

        #[test]
        fn six_valid_fields_reach_tech_stack() {
            let engine = DialogueEngine::default();
            let (session, transition) = drive(&engine, &PROFILE);

            assert_eq!(session.stage, DialogueStage::TechStack);
            assert_eq!(session.next_field, CandidateField::COUNT);
            assert_eq!(transition.reply, prompts::TECH_STACK_PROMPT);
            assert_eq!(session.record.get(CandidateField::Phone), Some("+1 202 555 0147"));
            assert_eq!(session.record.get(CandidateField::YearsExperience), Some("3"));
            assert_eq!(session.record.get(CandidateField::CurrentLocation), Some("Singapore"));
        }

        #[test]
        fn mismatched_index_is_an_invariant_violation() {
            let engine = DialogueEngine::default();
            let (mut session, _) = drive(&engine, &["hi", "John Doe"]);
            session.next_field = 3;

            let result = engine.step(&session, Utterance::new("3"), &mut selector());
            assert!(matches!(
                result,
                Err(DialogueError::FieldIndexMismatch { index: 3, collected: 1 })
            ));
        }
    }

    mod tech_stack {
        use super::*;

        #[test]
        fn empty_stack_reprompts() {
            let engine = DialogueEngine::default();
            let (session, _) = drive(&engine, &PROFILE);
            let transition = run(&engine, &session, " , ,");

            assert_eq!(transition.session, session);
            assert_eq!(transition.reply, prompts::TECH_STACK_UNPARSEABLE);
        }

        #[test]
        fn full_flow_issues_questions_and_completes_record() {
            let engine = DialogueEngine::default();
            let mut messages = PROFILE.to_vec();
            messages.push("python, django");
            let (session, transition) = drive(&engine, &messages);

            assert_eq!(session.stage, DialogueStage::Questions);
            assert!(session.record.is_complete());
            assert_eq!(
                session.record.tech_stack(),
                Some(&["python".to_string(), "django".to_string()][..])
            );
            assert!(transition.reply.starts_with("Thank you John Doe"));
            assert!(transition.reply.contains("--- PYTHON ---"));
            assert!(transition.reply.contains("--- DJANGO ---"));
            match transition.effect {
                TurnEffect::StackCompleted(questions) => assert_eq!(questions.len(), 2),
                other => panic!("unexpected effect {:?}", other),
            }
        }
    }

    mod questions {
        use super::*;

        fn questions_session(engine: &DialogueEngine) -> DialogueSession {
            let mut messages = PROFILE.to_vec();
            messages.push("python");
            drive(engine, &messages).0
        }

        #[test]
        fn replies_follow_sentiment() {
            let engine = DialogueEngine::default();
            let session = questions_session(&engine);

            let transition = engine
                .step(
                    &session,
                    Utterance::new("this is great").with_sentiment(Sentiment::Positive),
                    &mut selector(),
                )
                .unwrap();

            assert_eq!(transition.reply, prompts::sentiment_reply(Sentiment::Positive));
            assert_eq!(transition.session, session);
        }

        #[test]
        fn more_is_ignored_without_resubmission() {
            let engine = DialogueEngine::default();
            let session = questions_session(&engine);
            let transition = run(&engine, &session, "more");

            assert_eq!(transition.effect, TurnEffect::None);
            assert_eq!(transition.reply, prompts::sentiment_reply(Sentiment::Neutral));
        }

        #[test]
        fn more_resamples_stored_stack_when_enabled() {
            let engine = DialogueEngine::new(DialogueConfig {
                allow_stack_resubmission: true,
                ..Default::default()
            });
            let session = questions_session(&engine);
            let transition = run(&engine, &session, "more");

            match &transition.effect {
                TurnEffect::QuestionsIssued(questions) => {
                    assert!(questions.get("python").is_some())
                }
                other => panic!("unexpected effect {:?}", other),
            }
            assert_eq!(transition.session, session);
        }

        #[test]
        fn new_list_gets_questions_without_touching_record() {
            let engine = DialogueEngine::new(DialogueConfig {
                allow_stack_resubmission: true,
                ..Default::default()
            });
            let session = questions_session(&engine);
            let transition = run(&engine, &session, "docker, aws");

            match &transition.effect {
                TurnEffect::QuestionsIssued(questions) => {
                    let techs: Vec<&str> = questions.technologies().collect();
                    assert_eq!(techs, vec!["docker", "aws"]);
                }
                other => panic!("unexpected effect {:?}", other),
            }
            assert_eq!(
                transition.session.record.tech_stack(),
                Some(&["python".to_string()][..])
            );
        }
    }

    mod exit {
        use super::*;

        #[test]
        fn exit_phrases_end_the_dialogue_in_any_stage() {
            let engine = DialogueEngine::default();
            for phrase in ["exit", "Bye", "I quit now", "goodbye everyone"] {
                for prefix in [&PROFILE[..0], &PROFILE[..1], &PROFILE[..3], &PROFILE[..]] {
                    let session = if prefix.is_empty() {
                        DialogueSession::new(SessionId::new())
                    } else {
                        drive(&engine, prefix).0
                    };
                    let transition = run(&engine, &session, phrase);

                    assert!(transition.ended(), "{} at {:?}", phrase, session.stage);
                    assert_eq!(transition.reply, prompts::THANK_YOU);
                    assert_eq!(transition.session.stage, session.stage);
                }
            }
        }

        #[test]
        fn empty_record_is_not_persisted() {
            let engine = DialogueEngine::default();
            let (session, _) = drive(&engine, &["hi"]);
            let transition = run(&engine, &session, "bye");
            assert_eq!(transition.effect, TurnEffect::Exited { persist: false });
        }

        #[test]
        fn partial_record_is_persisted() {
            let engine = DialogueEngine::default();
            let (session, _) = drive(&engine, &["hi", "John Doe"]);
            let transition = run(&engine, &session, "exit");
            assert_eq!(transition.effect, TurnEffect::Exited { persist: true });
        }

        #[test]
        fn exit_check_runs_before_validation() {
            let engine = DialogueEngine::default();
            let (session, _) = drive(&engine, &["hi"]);
            let transition = run(&engine, &session, "Quit");
            assert!(transition.ended());
            assert_eq!(transition.session.next_field, 0);
        }
    }
}
