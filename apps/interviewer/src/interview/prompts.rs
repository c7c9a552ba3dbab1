// All LLM prompt builders for the interview flow.
// Both are pure string templating; neither validates its inputs.

/// Builds the question-generation prompt. An empty skills string produces a
/// degenerate but well-formed prompt; that is the caller's problem.
pub fn question_prompt(skills: &str) -> String {
    format!(
        "You are a professional technical interviewer.\n\
         \n\
         Generate exactly 5 technical interview questions \
         for a candidate skilled in: {skills}.\n\
         \n\
         Rules:\n\
         - Only technical questions\n\
         - No HR questions\n\
         - Numbered list only\n\
         - One question per line"
    )
}

/// Builds the evaluation prompt by interleaving each question/answer pair by
/// index, followed by the fixed rubric. Precondition: both slices have the
/// same length — guaranteed by construction in this workflow (always 5).
pub fn evaluation_prompt(questions: &[String], answers: &[String]) -> String {
    let mut combined = String::new();
    for (i, (question, answer)) in questions.iter().zip(answers.iter()).enumerate() {
        combined.push_str(&format!(
            "Question {n}: {question}\nAnswer {n}: {answer}\n\n",
            n = i + 1
        ));
    }

    format!(
        "You are a senior technical interviewer.\n\
         \n\
         Evaluate the candidate based on the following Q&A.\n\
         \n\
         Provide:\n\
         1. Overall Sentiment (Positive / Neutral / Negative)\n\
         2. Technical Level (Beginner / Intermediate / Advanced)\n\
         3. Hiring Recommendation (Yes / No)\n\
         4. Short Justification (2-3 lines)\n\
         \n\
         {combined}"
    )
}
