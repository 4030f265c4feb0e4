//! Prompt templates for each debate stage
//!
//! Pure templating: the protocol logic never depends on this wording.

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Opening statement for one side, with optional pre-match notes.
    pub fn opening_statement(side: &str, topic: &str, briefing: &[String]) -> String {
        let mut prompt = format!(
            r#"You are the {side} debater in a formal debate. The topic is: "{topic}".
Deliver a compelling opening statement that sets the tone for your side.
Stay under 500 words, keep a decisive tone, and end with a memorable slogan."#
        );
        if !briefing.is_empty() {
            prompt.push_str("\nReference these pre-match notes:\n");
            prompt.push_str(&bullet_list(briefing));
        }
        prompt
    }

    /// A single cross-examination question from the attacking side.
    pub fn cross_question(
        side: &str,
        topic: &str,
        previous_questions: &[String],
        opponent_highlights: &[String],
    ) -> String {
        let mut prompt = format!(
            r#"You represent the {side} side on the topic "{topic}".
Pose a single, sharp cross-examination question to expose weaknesses in the opponent's stance.
The question must be concise (max 60 words) and cannot contain multiple questions.
"#
        );
        if !previous_questions.is_empty() {
            prompt.push_str("Questions already asked:\n");
            prompt.push_str(&bullet_list(previous_questions));
            prompt.push('\n');
        }
        if !opponent_highlights.is_empty() {
            prompt.push_str("Opponent talking points worth pressing:\n");
            prompt.push_str(&bullet_list(opponent_highlights));
            prompt.push('\n');
        }
        prompt.push_str("Return only the question.");
        prompt
    }

    /// The defending side's answer to one question.
    pub fn cross_answer(
        side: &str,
        topic: &str,
        question: &str,
        prior_answers: &[String],
    ) -> String {
        let mut prompt = format!(
            r#"You are the {side} debater. Topic: "{topic}".
Answer the opponent's question below clearly and briefly. Do not ask questions.
Question: "{question}"
"#
        );
        if !prior_answers.is_empty() {
            prompt.push_str("Earlier answers you gave for cross-examination:\n");
            prompt.push_str(&bullet_list(prior_answers));
            prompt.push('\n');
        }
        prompt.push_str("Limit the answer to 120 words and keep a confident tone.");
        prompt
    }

    /// One free debate turn responding to the opponent's latest point.
    pub fn free_debate(
        side: &str,
        topic: &str,
        last_opponent_point: &str,
        round_number: u32,
    ) -> String {
        format!(
            r#"Free debate round {round_number} on "{topic}".
You speak for the {side} side. Respond directly to the opponent's latest point:
"{last_opponent_point}"
Deliver a tight rebuttal or advancement in fewer than 150 words, end with a forward-looking line."#
        )
    }

    /// Closing statement for one side, reinforcing its key moments.
    pub fn closing_statement(side: &str, topic: &str, key_moments: &[String]) -> String {
        let mut prompt = format!(
            r#"Time for the closing statement for the {side} side on the motion "{topic}".
Summarize your strongest arguments, reclaim momentum, and finish with a decisive closer.
Stay below 400 words."#
        );
        if !key_moments.is_empty() {
            prompt.push_str("\nMoments to incorporate or reinforce:\n");
            prompt.push_str(&bullet_list(key_moments));
        }
        prompt
    }

    /// Judge ballot request over the transcript highlights.
    pub fn judge_ballot(topic: &str, transcript_summary: &str) -> String {
        format!(
            r#"Debate motion: "{topic}".
You are reviewing the transcript highlights below to make a final judgment.
Summarise the decisive factors, apply the scoring criteria from your persona instructions,
and return a single JudgeOutput v1 JSON object.

Transcript highlights:
{transcript_summary}"#
        )
    }

    /// Host interlude for one stage, referencing the given highlights.
    pub fn host_interlude(stage: &str, objective: &str, highlights: &[String]) -> String {
        let highlight_text = bullet_list(highlights);
        format!(
            "You are the charismatic debate host. Stage: {stage}.\n\
             Objective: {objective}\n\
             Keep it under 80 words, inject light humor without derailing the competition.\n\
             Highlights to reference:\n{highlight_text}\n\
             Return a single paragraph."
        )
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .filter(|item| !item.is_empty())
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
