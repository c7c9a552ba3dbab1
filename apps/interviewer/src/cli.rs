//! Line-oriented terminal front end.
//!
//! Holds no workflow logic — every decision is delegated to the
//! [`Controller`] and this module only renders its outcomes. A closed input
//! stream ends the session with an error instead of re-prompting.

use std::io::Write;

use anyhow::{bail, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::interview::QUESTION_COUNT;
use crate::models::CandidateProfile;
use crate::session::{AnswerOutcome, Controller, ProfileOutcome};

const GREETING: &str = "\
Welcome to the AI Hiring Assistant!

Purpose:
  This assistant collects candidate details and conducts
  a technical interview based on your skills.

Privacy notice:
  All candidate data is stored locally and used only for
  recruitment evaluation.";

/// Runs one interview session against the terminal, from greeting to
/// completion or early exit.
pub async fn run_session(mut controller: Controller) -> Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("{GREETING}");
    println!("\nPress Enter to start the interview.");
    read_line(&mut input).await?;
    controller.begin()?;

    let questions = loop {
        let profile = collect_profile(&mut input).await?;
        match controller.submit_profile(profile).await? {
            ProfileOutcome::Exit => {
                println!("\nConversation ended. Thank you!");
                return Ok(());
            }
            ProfileOutcome::Invalid(warning) => println!("\n! {warning}"),
            ProfileOutcome::Questions(questions) => break questions,
        }
    };

    println!("\n-- Technical Interview Round --");
    loop {
        let mut answers = Vec::with_capacity(QUESTION_COUNT);
        for (i, question) in questions.iter().enumerate() {
            println!("\n{question}");
            answers.push(prompt(&mut input, &format!("Answer {}", i + 1)).await?);
        }

        match controller.submit_answers(answers).await? {
            AnswerOutcome::Invalid(warning) => println!("\n! {warning}"),
            AnswerOutcome::Completed { evaluation } => {
                println!("\nInterview completed successfully!");
                println!("\nAI Evaluation:\n{evaluation}");
                break;
            }
        }
    }

    println!("\nThank you for attending the AI interview!");
    println!("Our recruitment team will contact you soon.");
    Ok(())
}

async fn collect_profile<R>(input: &mut Lines<R>) -> Result<CandidateProfile>
where
    R: AsyncBufRead + Unpin,
{
    println!("\n-- Candidate Information --");
    Ok(CandidateProfile {
        full_name: prompt(input, "Full Name").await?,
        email_address: prompt(input, "Email Address").await?,
        phone_number: prompt(input, "Phone Number").await?,
        years_of_experience: prompt_experience(input).await?,
        desired_position: prompt(input, "Desired Position").await?,
        current_location: prompt(input, "Current Location").await?,
        technical_skills: prompt(input, "Technical Skills (comma separated)").await?,
    })
}

/// Re-prompts until the input parses as a whole number of years, 0-50.
async fn prompt_experience<R>(input: &mut Lines<R>) -> Result<u32>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let raw = prompt(input, "Years of Experience (0-50)").await?;
        match raw.parse::<u32>() {
            Ok(years) if years <= 50 => return Ok(years),
            _ => println!("! Please enter a whole number between 0 and 50."),
        }
    }
}

async fn prompt<R>(input: &mut Lines<R>, label: &str) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    print!("{label}: ");
    std::io::stdout().flush()?;
    read_line(input).await
}

/// Reads one trimmed line. End of input is an error — the caller loops on
/// validation failures, so an exhausted stream must not look like an empty
/// submission.
async fn read_line<R>(input: &mut Lines<R>) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    match input.next_line().await? {
        Some(line) => Ok(line.trim().to_string()),
        None => bail!("input closed before the session finished"),
    }
}
