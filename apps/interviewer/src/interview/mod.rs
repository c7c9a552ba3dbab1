//! Technical round — question generation and candidate evaluation.
//!
//! Each operation is exactly one model call: one call produces all five
//! questions, one call evaluates the full transcript. This bounds latency
//! and cost to two calls per interview regardless of question count.

pub mod prompts;

use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Number of questions in a technical round. The record schema and both
/// sinks assume exactly this many answer columns.
pub const QUESTION_COUNT: usize = 5;

/// Generates the five interview questions for the given skills string.
///
/// The model is asked for a numbered list, one question per line; blank
/// lines are dropped and the first five non-blank lines kept. A response
/// with fewer than five usable lines violates the model contract and is
/// rejected rather than propagated as a short round.
pub async fn generate_questions(
    generator: &dyn TextGenerator,
    skills: &str,
) -> Result<Vec<String>, AppError> {
    let prompt = prompts::question_prompt(skills);
    let response = generator.generate(&prompt).await?;
    debug!("question generation response: {} bytes", response.len());

    let questions: Vec<String> = response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(QUESTION_COUNT)
        .map(str::to_string)
        .collect();

    if questions.len() < QUESTION_COUNT {
        return Err(AppError::ModelOutput(format!(
            "expected {} questions, got {}",
            QUESTION_COUNT,
            questions.len()
        )));
    }

    Ok(questions)
}

/// Evaluates the full transcript in a single model call and returns the
/// free-text evaluation.
pub async fn evaluate_candidate(
    generator: &dyn TextGenerator,
    questions: &[String],
    answers: &[String],
) -> Result<String, AppError> {
    debug_assert_eq!(questions.len(), answers.len());

    let prompt = prompts::evaluation_prompt(questions, answers);
    let evaluation = generator.generate(&prompt).await?;
    debug!("evaluation response: {} bytes", evaluation.len());

    if evaluation.is_empty() {
        return Err(AppError::ModelOutput("empty evaluation".to_string()));
    }

    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct CannedGenerator {
        response: String,
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn test_generate_questions_parses_five_lines() {
        let generator = CannedGenerator {
            response: "1. Q one\n2. Q two\n3. Q three\n4. Q four\n5. Q five".to_string(),
        };
        let questions = generate_questions(&generator, "Python").await.unwrap();
        assert_eq!(questions.len(), QUESTION_COUNT);
        assert_eq!(questions[0], "1. Q one");
        assert_eq!(questions[4], "5. Q five");
    }

    #[tokio::test]
    async fn test_generate_questions_drops_blank_lines_and_truncates() {
        let generator = CannedGenerator {
            response: "\n1. A\n\n2. B\n3. C\n\n4. D\n5. E\n6. F\n".to_string(),
        };
        let questions = generate_questions(&generator, "SQL").await.unwrap();
        assert_eq!(questions.len(), QUESTION_COUNT);
        assert_eq!(questions[4], "5. E");
    }

    #[tokio::test]
    async fn test_generate_questions_rejects_short_response() {
        let generator = CannedGenerator {
            response: "1. A\n2. B\n3. C".to_string(),
        };
        let err = generate_questions(&generator, "Rust").await.unwrap_err();
        assert!(matches!(err, AppError::ModelOutput(_)));
    }

    #[tokio::test]
    async fn test_evaluate_candidate_returns_text() {
        let generator = CannedGenerator {
            response: "Hiring Recommendation: Yes".to_string(),
        };
        let questions = vec!["Q".to_string()];
        let answers = vec!["A".to_string()];
        let evaluation = evaluate_candidate(&generator, &questions, &answers)
            .await
            .unwrap();
        assert_eq!(evaluation, "Hiring Recommendation: Yes");
    }

    #[tokio::test]
    async fn test_evaluate_candidate_rejects_empty_response() {
        let generator = CannedGenerator {
            response: String::new(),
        };
        let err = evaluate_candidate(&generator, &[], &[]).await.unwrap_err();
        assert!(matches!(err, AppError::ModelOutput(_)));
    }
}
