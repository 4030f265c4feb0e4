//! Console output formatter for finished debates

use arena_domain::{DebateResult, Tally, Vote};
use colored::Colorize;

/// Formats debate results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete debate result
    pub fn format(result: &DebateResult) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Debate Arena Results"));
        output.push('\n');

        // Topic and sides
        output.push_str(&format!("{} {}\n\n", "Topic:".cyan().bold(), result.topic));
        output.push_str(&format!(
            "{} {} (affirmative) vs {} (negative), hosted by {}\n",
            "Sides:".cyan().bold(),
            result.assignments.affirmative,
            result.assignments.negative,
            result.assignments.host
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Panel:".cyan().bold(),
            result.assignments.judges.join(", ")
        ));

        // Transcript
        output.push_str(&Self::section_header("Transcript"));
        for turn in &result.transcript {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} · {} ──", turn.stage, turn.speaker_name)
                    .yellow()
                    .bold(),
                turn.content
            ));
        }

        // Host interludes
        output.push_str(&Self::section_header("Host"));
        for interlude in &result.interludes {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", interlude.stage).yellow().bold(),
                interlude.content
            ));
        }

        // Ballots
        output.push_str(&Self::section_header("Ballots"));
        for vote in &result.judge_votes {
            output.push_str(&format!(
                "\n{} votes {}\n{}\n",
                vote.judge_name.bold(),
                Self::vote_label(vote.vote),
                vote.rationale
            ));
        }
        output.push('\n');
        for line in Tally::from_votes(&result.judge_votes).summary_lines() {
            output.push_str(&format!("{}\n", line.green().bold()));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &DebateResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the verdict only (concise output)
    pub fn format_verdict_only(result: &DebateResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Debate Verdict ===".cyan().bold()));
        output.push_str(&format!("{} {}\n\n", "Topic:".bold(), result.topic));
        output.push_str(&format!(
            "{} {} (affirmative) vs {} (negative)\n\n",
            "Sides:".dimmed(),
            result.assignments.affirmative,
            result.assignments.negative
        ));

        for vote in &result.judge_votes {
            output.push_str(&format!(
                "  {} {}\n",
                Self::vote_label(vote.vote),
                vote.judge_name
            ));
        }
        output.push('\n');
        for line in Tally::from_votes(&result.judge_votes).summary_lines() {
            output.push_str(&line);
            output.push('\n');
        }

        // The host's wrap-up narrates the result for the audience
        if let Some(wrap_up) = result
            .interludes
            .iter()
            .rev()
            .find(|interlude| interlude.stage == "wrap_up")
        {
            output.push('\n');
            output.push_str(&wrap_up.content);
            output.push('\n');
        }

        output
    }

    fn vote_label(vote: Vote) -> colored::ColoredString {
        match vote {
            Vote::Affirmative => "affirmative".green().bold(),
            Vote::Negative => "negative".red().bold(),
            Vote::Tie => "tie".yellow().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
