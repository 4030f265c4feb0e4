//! Protocol stage identifiers
//!
//! Stage ids are recorded on every turn and interlude so the protocol
//! position can be reconstructed from the transcript alone.

/// The seven host interludes, in protocol order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterludeStage {
    Introduction,
    PreCrossExamination,
    MidCrossExamination,
    PreFreeDebate,
    PreClosing,
    PreJudging,
    WrapUp,
}

impl InterludeStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterludeStage::Introduction => "introduction",
            InterludeStage::PreCrossExamination => "pre_cross_examination",
            InterludeStage::MidCrossExamination => "mid_cross_examination",
            InterludeStage::PreFreeDebate => "pre_free_debate",
            InterludeStage::PreClosing => "pre_closing",
            InterludeStage::PreJudging => "pre_judging",
            InterludeStage::WrapUp => "wrap_up",
        }
    }

    /// The host's natural-language objective for this interlude.
    pub fn objective(&self) -> &'static str {
        match self {
            InterludeStage::Introduction => {
                "Welcome the audience, announce the motion, and tease the upcoming debate."
            }
            InterludeStage::PreCrossExamination => {
                "React to the opening statements with a witty remark, foreshadow cross-examination."
            }
            InterludeStage::MidCrossExamination => {
                "Comment on the questioning so far and set up the perspective shift."
            }
            InterludeStage::PreFreeDebate => {
                "Encourage energetic exchanges and make a playful observation about the debate heat."
            }
            InterludeStage::PreClosing => {
                "Cue the closing statements with humor and hint at the stakes."
            }
            InterludeStage::PreJudging => {
                "Address the judges, joke about the tough decision, and transition to deliberation."
            }
            InterludeStage::WrapUp => {
                "Celebrate the debate, announce the winner, and leave the audience smiling."
            }
        }
    }
}

impl std::fmt::Display for InterludeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the two cross-examination blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossExamBlock {
    /// Affirmative questions negative
    AffirmativeCross,
    /// Negative questions affirmative
    NegativeCross,
}

impl CrossExamBlock {
    pub fn label(&self) -> &'static str {
        match self {
            CrossExamBlock::AffirmativeCross => "affirmative_cross",
            CrossExamBlock::NegativeCross => "negative_cross",
        }
    }

    /// Stage id for the n-th question of this block (1-indexed).
    pub fn question_stage(&self, turn: u32) -> String {
        format!("{}_q{turn}", self.label())
    }

    /// Stage id for the n-th answer of this block (1-indexed).
    pub fn answer_stage(&self, turn: u32) -> String {
        format!("{}_a{turn}", self.label())
    }
}

/// Stage id for one side's turn in a free debate round (1-indexed).
pub fn free_debate_stage(round: u32, side: &str) -> String {
    format!("free_debate_round{round}_{side}")
}
