use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::interview::QUESTION_COUNT;

/// The inputs collected at the Collect Info step: six required free-text
/// fields plus years of experience from the bounded numeric prompt.
#[derive(Debug, Clone, Default)]
pub struct CandidateProfile {
    pub full_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub years_of_experience: u32,
    pub desired_position: String,
    pub current_location: String,
    pub technical_skills: String,
}

/// One candidate interaction, in the exact field order both sinks persist.
///
/// The answer columns are fixed at five explicit fields so the CSV schema
/// can never drift between appends — the column set is this struct, not
/// whatever keys a record happens to hold at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "Candidate_ID")]
    pub candidate_id: String,
    #[serde(rename = "Full_Name")]
    pub full_name: String,
    #[serde(rename = "Email_Address")]
    pub email_address: String,
    #[serde(rename = "Phone_Number")]
    pub phone_number: String,
    #[serde(rename = "Years_of_Experience")]
    pub years_of_experience: u32,
    #[serde(rename = "Desired_Position")]
    pub desired_position: String,
    #[serde(rename = "Current_Location")]
    pub current_location: String,
    #[serde(rename = "Technical_Skills")]
    pub technical_skills: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Technical_Answer_1")]
    pub technical_answer_1: String,
    #[serde(rename = "Technical_Answer_2")]
    pub technical_answer_2: String,
    #[serde(rename = "Technical_Answer_3")]
    pub technical_answer_3: String,
    #[serde(rename = "Technical_Answer_4")]
    pub technical_answer_4: String,
    #[serde(rename = "Technical_Answer_5")]
    pub technical_answer_5: String,
    #[serde(rename = "AI_Evaluation")]
    pub ai_evaluation: String,
}

impl CandidateRecord {
    /// Mints a new record from the collected profile. The ID and timestamp
    /// come from local wall-clock time; answers and evaluation stay empty
    /// until the technical round completes.
    pub fn new(profile: CandidateProfile) -> Self {
        let now = Local::now();
        Self {
            candidate_id: format!("CAND_{}", now.format("%Y%m%d%H%M%S")),
            full_name: profile.full_name,
            email_address: profile.email_address,
            phone_number: profile.phone_number,
            years_of_experience: profile.years_of_experience,
            desired_position: profile.desired_position,
            current_location: profile.current_location,
            technical_skills: profile.technical_skills,
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            technical_answer_1: String::new(),
            technical_answer_2: String::new(),
            technical_answer_3: String::new(),
            technical_answer_4: String::new(),
            technical_answer_5: String::new(),
            ai_evaluation: String::new(),
        }
    }

    /// Merges the five answers and the evaluation into the record.
    pub fn complete(&mut self, answers: [String; QUESTION_COUNT], evaluation: String) {
        let [a1, a2, a3, a4, a5] = answers;
        self.technical_answer_1 = a1;
        self.technical_answer_2 = a2;
        self.technical_answer_3 = a3;
        self.technical_answer_4 = a4;
        self.technical_answer_5 = a5;
        self.ai_evaluation = evaluation;
    }

    /// A record may be persisted only once every answer and the evaluation
    /// are non-empty.
    pub fn is_complete(&self) -> bool {
        [
            &self.technical_answer_1,
            &self.technical_answer_2,
            &self.technical_answer_3,
            &self.technical_answer_4,
            &self.technical_answer_5,
            &self.ai_evaluation,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}
