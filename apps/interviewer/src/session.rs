//! Session state and the workflow controller.
//!
//! Flow: Greeting → Collect Info → Technical Round → End. The step only ever
//! advances; there is no path back to edit an earlier step. The controller
//! owns the session, the model client, and both sinks, and is the only place
//! transitions happen — the terminal front end just relays outcomes.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::{self, QUESTION_COUNT};
use crate::llm_client::TextGenerator;
use crate::models::{CandidateProfile, CandidateRecord};
use crate::storage::{CsvSink, JsonSink};

/// Typing one of these as the candidate name ends the session on the spot,
/// with no record minted and no model call made.
pub const EXIT_WORDS: &[&str] = &["exit", "quit", "bye", "stop"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Greeting,
    CollectInfo,
    TechnicalRound,
    End,
}

/// State for one end-to-end traversal of the workflow by a single user.
/// Constructed explicitly and discarded when the session ends — there is no
/// process-wide session global.
#[derive(Debug)]
pub struct Session {
    step: Step,
    record: Option<CandidateRecord>,
    questions: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            step: Step::Greeting,
            record: None,
            questions: Vec::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    fn advance(&mut self, to: Step) {
        debug_assert!(to > self.step, "session step may only move forward");
        info!("Session step: {:?} -> {:?}", self.step, to);
        self.step = to;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a Collect Info submission.
#[derive(Debug)]
pub enum ProfileOutcome {
    /// The candidate typed an exit word; the session is over without a record.
    Exit,
    /// A required field is missing; the step does not advance.
    Invalid(String),
    /// Questions are ready and the technical round has begun.
    Questions(Vec<String>),
}

/// Outcome of a Technical Round submission.
#[derive(Debug)]
pub enum AnswerOutcome {
    /// At least one answer is blank; the step does not advance.
    Invalid(String),
    /// The interview is evaluated, persisted to both sinks, and over.
    Completed { evaluation: String },
}

pub struct Controller {
    session: Session,
    generator: Arc<dyn TextGenerator>,
    csv_sink: CsvSink,
    json_sink: JsonSink,
}

impl Controller {
    pub fn new(generator: Arc<dyn TextGenerator>, csv_sink: CsvSink, json_sink: JsonSink) -> Self {
        Self {
            session: Session::new(),
            generator,
            csv_sink,
            json_sink,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Greeting → Collect Info.
    pub fn begin(&mut self) -> Result<(), AppError> {
        if self.session.step != Step::Greeting {
            return Err(AppError::Validation("session already started".to_string()));
        }
        self.session.advance(Step::CollectInfo);
        Ok(())
    }

    /// Handles a Collect Info submission. On success this makes exactly one
    /// model call (question generation) and moves to the Technical Round.
    pub async fn submit_profile(
        &mut self,
        profile: CandidateProfile,
    ) -> Result<ProfileOutcome, AppError> {
        if self.session.step != Step::CollectInfo {
            return Err(AppError::Validation(
                "profile submitted out of step order".to_string(),
            ));
        }

        let name = profile.full_name.trim();
        if EXIT_WORDS.iter().any(|w| name.eq_ignore_ascii_case(w)) {
            info!("Exit word received; ending session without a record");
            return Ok(ProfileOutcome::Exit);
        }

        let missing = missing_required_fields(&profile);
        if !missing.is_empty() {
            warn!("Profile rejected; missing: {}", missing.join(", "));
            return Ok(ProfileOutcome::Invalid(format!(
                "Please fill all required fields ({}).",
                missing.join(", ")
            )));
        }

        let record = CandidateRecord::new(profile);
        let questions =
            interview::generate_questions(self.generator.as_ref(), &record.technical_skills)
                .await?;
        info!(
            "Generated {} questions for {}",
            questions.len(),
            record.candidate_id
        );

        self.session.record = Some(record);
        self.session.questions = questions.clone();
        self.session.advance(Step::TechnicalRound);
        Ok(ProfileOutcome::Questions(questions))
    }

    /// Handles a Technical Round submission. On success this makes exactly
    /// one model call (evaluation), persists the completed record to both
    /// sinks, and moves to End. The step guard means a record can never be
    /// persisted twice.
    pub async fn submit_answers(
        &mut self,
        answers: Vec<String>,
    ) -> Result<AnswerOutcome, AppError> {
        if self.session.step != Step::TechnicalRound {
            return Err(AppError::Validation(
                "answers submitted out of step order".to_string(),
            ));
        }

        let answers: [String; QUESTION_COUNT] = match answers.try_into() {
            Ok(a) => a,
            Err(_) => {
                warn!("Answers rejected; wrong count");
                return Ok(AnswerOutcome::Invalid(
                    "Please answer all questions.".to_string(),
                ));
            }
        };
        if answers.iter().any(|a| a.trim().is_empty()) {
            warn!("Answers rejected; all {} must be non-empty", QUESTION_COUNT);
            return Ok(AnswerOutcome::Invalid(
                "Please answer all questions.".to_string(),
            ));
        }

        let evaluation = interview::evaluate_candidate(
            self.generator.as_ref(),
            &self.session.questions,
            &answers,
        )
        .await?;

        let record = self
            .session
            .record
            .as_mut()
            .ok_or_else(|| AppError::Validation("no candidate record in session".to_string()))?;
        record.complete(answers, evaluation.clone());
        debug_assert!(record.is_complete());

        self.csv_sink.append(record)?;
        self.json_sink.append(record)?;
        info!("Candidate {} persisted to both sinks", record.candidate_id);

        self.session.advance(Step::End);
        Ok(AnswerOutcome::Completed { evaluation })
    }
}

fn missing_required_fields(profile: &CandidateProfile) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if profile.full_name.trim().is_empty() {
        missing.push("Full Name");
    }
    if profile.email_address.trim().is_empty() {
        missing.push("Email Address");
    }
    if profile.phone_number.trim().is_empty() {
        missing.push("Phone Number");
    }
    if profile.desired_position.trim().is_empty() {
        missing.push("Desired Position");
    }
    if profile.current_location.trim().is_empty() {
        missing.push("Current Location");
    }
    if profile.technical_skills.trim().is_empty() {
        missing.push("Technical Skills");
    }
    missing
}
