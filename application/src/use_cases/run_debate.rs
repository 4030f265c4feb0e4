//! Run Debate use case
//!
//! Drives the full debate protocol end-to-end: assigns sides, runs each
//! stage in the mandated order, records transcript/interlude/vote entries,
//! optionally emits progress events, and returns the session result.
//!
//! Every stage except judging is strictly sequential because each call's
//! prompt is a function of the previous call's output. Judging fans out to
//! all judges concurrently and joins before any vote is appended, so the
//! transcript and vote log never see interleaved writes.

use crate::ports::events::{DebateEvent, EventSink, NoEvents};
use crate::ports::participant::{Completion, Participant, ParticipantError, ParticipantGateway};
use arena_domain::debate::stage::free_debate_stage;
use arena_domain::{
    CrossExamBlock, DebateOptions, DebateRequest, DebateResult, DebateRole, DebateTurn,
    DomainError, HostInterlude, InterludeStage, JudgeVote, Metadata, ParticipantSpec,
    PromptTemplate, RoleAssignments, Tally, Transcript, assign_sides, parse_judge_reply,
};
use futures::future;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can abort a debate session
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("Invalid debate request: {0}")]
    InvalidRequest(#[from] DomainError),

    /// A participant call failed after its internal retries. Not recovered
    /// here: the remainder of the session is abandoned and no partial
    /// result is synthesized.
    #[error(transparent)]
    Participant(#[from] ParticipantError),
}

/// Use case for running one debate session
pub struct RunDebateUseCase<G: ParticipantGateway> {
    gateway: Arc<G>,
}

impl<G: ParticipantGateway> RunDebateUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute without progress events.
    pub async fn execute(&self, request: DebateRequest) -> Result<DebateResult, RunDebateError> {
        self.execute_with_events(request, &NoEvents).await
    }

    /// Execute, forwarding each turn/interlude/vote to `sink` as produced.
    pub async fn execute_with_events(
        &self,
        request: DebateRequest,
        sink: &dyn EventSink,
    ) -> Result<DebateResult, RunDebateError> {
        // StdRng keeps the returned future Send, unlike thread_rng's handle.
        let mut rng = StdRng::from_entropy();
        self.execute_with(request, sink, &mut rng).await
    }

    /// Execute with an injected random source for the side assignment.
    pub async fn execute_with<R: Rng + ?Sized>(
        &self,
        request: DebateRequest,
        sink: &dyn EventSink,
        rng: &mut R,
    ) -> Result<DebateResult, RunDebateError> {
        request.validate()?;

        let DebateRequest {
            topic,
            debaters,
            judges,
            host,
            options,
            metadata,
        } = request;

        let [first, second]: [ParticipantSpec; 2] = debaters
            .try_into()
            .map_err(|rest: Vec<ParticipantSpec>| DomainError::DebaterCount(rest.len()))?;
        let sides = assign_sides(first, second, rng);
        info!(
            affirmative = %sides.affirmative.name,
            negative = %sides.negative.name,
            "Assigned sides"
        );

        let affirmative = self.seat(DebateRole::Affirmative, sides.affirmative, &options)?;
        let negative = self.seat(DebateRole::Negative, sides.negative, &options)?;
        let judges = judges
            .into_iter()
            .map(|spec| self.seat(DebateRole::Judge, spec, &options))
            .collect::<Result<Vec<_>, _>>()?;
        let host_client = self.gateway.connect(&host, &options)?;

        let session = DebateSession {
            topic,
            options,
            affirmative,
            negative,
            judges,
            host: host_client,
            host_name: host.name,
            metadata,
            transcript: Transcript::new(),
            interludes: Vec::new(),
            judge_votes: Vec::new(),
            sink,
        };

        match session.run().await {
            Ok(result) => Ok(result),
            Err(error) => {
                sink.emit(DebateEvent::Error {
                    message: error.to_string(),
                });
                Err(error)
            }
        }
    }

    fn seat(
        &self,
        role: DebateRole,
        spec: ParticipantSpec,
        options: &DebateOptions,
    ) -> Result<SideSeat, ParticipantError> {
        Ok(SideSeat {
            role,
            client: self.gateway.connect(&spec, options)?,
            spec,
        })
    }
}

/// One protocol role bound to a live client
#[derive(Clone)]
struct SideSeat {
    role: DebateRole,
    spec: ParticipantSpec,
    client: Arc<dyn Participant>,
}

/// All cross-stage state of one running session.
///
/// The session is the sole owner of the transcript, interlude, and vote
/// sequences; they only ever grow, and a recorded entry is never mutated.
struct DebateSession<'a> {
    topic: String,
    options: DebateOptions,
    affirmative: SideSeat,
    negative: SideSeat,
    judges: Vec<SideSeat>,
    host: Arc<dyn Participant>,
    host_name: String,
    metadata: Option<serde_json::Value>,
    transcript: Transcript,
    interludes: Vec<HostInterlude>,
    judge_votes: Vec<JudgeVote>,
    sink: &'a dyn EventSink,
}

impl DebateSession<'_> {
    async fn run(mut self) -> Result<DebateResult, RunDebateError> {
        self.host_interlude(
            InterludeStage::Introduction,
            vec![
                format!("Motion: {}", self.topic),
                format!(
                    "Participants: {} vs {}",
                    self.affirmative.spec.name, self.negative.spec.name
                ),
            ],
        )
        .await?;

        self.opening_statements().await?;

        let highlights = vec![
            self.transcript.last_said_by(&self.affirmative.spec.name),
            self.transcript.last_said_by(&self.negative.spec.name),
        ];
        self.host_interlude(InterludeStage::PreCrossExamination, highlights)
            .await?;

        self.cross_examination(CrossExamBlock::AffirmativeCross)
            .await?;

        let highlights = self.transcript.recent_lines(4);
        self.host_interlude(InterludeStage::MidCrossExamination, highlights)
            .await?;

        self.cross_examination(CrossExamBlock::NegativeCross).await?;

        let highlights = self.transcript.recent_lines(4);
        self.host_interlude(InterludeStage::PreFreeDebate, highlights)
            .await?;

        self.free_debate().await?;

        let highlights = self.transcript.recent_lines(4);
        self.host_interlude(InterludeStage::PreClosing, highlights)
            .await?;

        self.closing_statements().await?;

        let highlights = self.transcript.recent_lines(6);
        self.host_interlude(InterludeStage::PreJudging, highlights)
            .await?;

        self.judging().await?;

        let tally = Tally::from_votes(&self.judge_votes);
        self.host_interlude(InterludeStage::WrapUp, tally.summary_lines())
            .await?;

        let assignments = RoleAssignments {
            affirmative: self.affirmative.spec.name,
            negative: self.negative.spec.name,
            host: self.host_name,
            judges: self
                .judges
                .iter()
                .map(|judge| judge.spec.name.clone())
                .collect(),
        };

        Ok(DebateResult {
            topic: self.topic,
            assignments,
            transcript: self.transcript.into_turns(),
            interludes: self.interludes,
            judge_votes: self.judge_votes,
            metadata: self.metadata,
        })
    }

    async fn opening_statements(&mut self) -> Result<(), RunDebateError> {
        info!("Stage: opening statements");
        let affirmative = self.affirmative.clone();
        self.debater_statement(
            "opening_affirmative",
            &affirmative,
            vec![
                "Establish why the motion should be accepted.".to_string(),
                "Highlight core benefits early.".to_string(),
            ],
        )
        .await?;

        let negative = self.negative.clone();
        self.debater_statement(
            "opening_negative",
            &negative,
            vec![
                "Expose vulnerabilities in the motion.".to_string(),
                "Question feasibility and unintended consequences.".to_string(),
            ],
        )
        .await
    }

    async fn debater_statement(
        &mut self,
        stage: &str,
        side: &SideSeat,
        briefing: Vec<String>,
    ) -> Result<(), RunDebateError> {
        let prompt = PromptTemplate::opening_statement(side.role.as_str(), &self.topic, &briefing);
        let context = self.context(stage);
        let completion = side.client.complete(&prompt, context, None).await?;
        self.record_turn(stage.to_string(), side, completion);
        Ok(())
    }

    async fn cross_examination(&mut self, block: CrossExamBlock) -> Result<(), RunDebateError> {
        let (attacker, defender) = match block {
            CrossExamBlock::AffirmativeCross => {
                (self.affirmative.clone(), self.negative.clone())
            }
            CrossExamBlock::NegativeCross => (self.negative.clone(), self.affirmative.clone()),
        };
        info!(block = block.label(), "Stage: cross-examination");

        let mut asked: Vec<String> = Vec::new();
        let mut answers: Vec<String> = Vec::new();
        let opponent_highlights = self.transcript.highlights_for(&defender.spec.name);

        for turn_index in 1..=self.options.max_cross_questions {
            let prompt = PromptTemplate::cross_question(
                attacker.role.as_str(),
                &self.topic,
                &asked,
                &opponent_highlights,
            );
            let mut context = self.context(&format!("{}_question", block.label()));
            context.insert("turn".to_string(), json!(turn_index));
            let completion = attacker.client.complete(&prompt, context, None).await?;
            asked.push(completion.content.clone());
            self.record_turn(block.question_stage(turn_index), &attacker, completion);

            let question = asked
                .last()
                .map(String::as_str)
                .unwrap_or_default();
            let prompt =
                PromptTemplate::cross_answer(defender.role.as_str(), &self.topic, question, &answers);
            let mut context = self.context(&format!("{}_answer", block.label()));
            context.insert("turn".to_string(), json!(turn_index));
            let completion = defender.client.complete(&prompt, context, None).await?;
            answers.push(completion.content.clone());
            self.record_turn(block.answer_stage(turn_index), &defender, completion);
        }

        Ok(())
    }

    async fn free_debate(&mut self) -> Result<(), RunDebateError> {
        info!(
            rounds = self.options.max_freeform_rounds,
            "Stage: free debate"
        );
        let affirmative = self.affirmative.clone();
        let negative = self.negative.clone();
        let mut last_point = self.transcript.last_content();

        for round in 1..=self.options.max_freeform_rounds {
            for side in [&affirmative, &negative] {
                let prompt = PromptTemplate::free_debate(
                    side.role.as_str(),
                    &self.topic,
                    &last_point,
                    round,
                );
                let mut context = Metadata::new();
                context.insert("stage".to_string(), json!("free_debate"));
                context.insert("round".to_string(), json!(round));
                context.insert("role".to_string(), json!(side.role.as_str()));
                let completion = side.client.complete(&prompt, context, None).await?;
                last_point = completion.content.clone();
                self.record_turn(free_debate_stage(round, side.role.as_str()), side, completion);
            }
        }

        Ok(())
    }

    async fn closing_statements(&mut self) -> Result<(), RunDebateError> {
        info!("Stage: closing statements");
        // Reverse of opening order: negative closes first.
        for seat in [self.negative.clone(), self.affirmative.clone()] {
            let key_moments = self.transcript.highlights_for(&seat.spec.name);
            let prompt =
                PromptTemplate::closing_statement(seat.role.as_str(), &self.topic, &key_moments);
            let stage = format!("closing_{}", seat.role.as_str());
            let context = self.context(&stage);
            let completion = seat.client.complete(&prompt, context, None).await?;
            self.record_turn(stage, &seat, completion);
        }
        Ok(())
    }

    /// The only concurrent phase: every judge is invoked at once and the
    /// session suspends until all complete. `try_join_all` is fail-fast —
    /// the first judge error aborts the session and discards the other
    /// replies — and its output preserves the judges' input order, so
    /// votes are appended in that order regardless of completion order.
    async fn judging(&mut self) -> Result<(), RunDebateError> {
        info!(judges = self.judges.len(), "Stage: judging");
        let summary = self.transcript.recent_lines(12).join("\n");
        let topic = self.topic.clone();

        let calls = self.judges.iter().map(|judge| {
            let prompt = PromptTemplate::judge_ballot(&topic, &summary);
            let mut context = Metadata::new();
            context.insert("stage".to_string(), json!("judging"));
            context.insert("topic".to_string(), json!(topic.clone()));
            let client = Arc::clone(&judge.client);
            async move { client.complete(&prompt, context, None).await }
        });
        let outputs = future::try_join_all(calls).await?;

        // All calls returned; appends happen strictly after the join point.
        for (judge, completion) in self.judges.iter().zip(outputs) {
            let verdict = parse_judge_reply(&completion.content);
            debug!(
                judge = %judge.spec.name,
                vote = %verdict.vote,
                "Parsed judge verdict"
            );
            let mut metadata = completion.metadata;
            metadata.extend(verdict.diagnostics());
            let vote = JudgeVote {
                judge_name: judge.spec.name.clone(),
                vote: verdict.vote,
                rationale: verdict.rationale,
                metadata,
            };
            self.sink.emit(DebateEvent::Vote(vote.clone()));
            self.judge_votes.push(vote);
        }

        Ok(())
    }

    async fn host_interlude(
        &mut self,
        stage: InterludeStage,
        highlights: Vec<String>,
    ) -> Result<(), RunDebateError> {
        debug!(stage = stage.as_str(), "Host interlude");
        let prompt = PromptTemplate::host_interlude(stage.as_str(), stage.objective(), &highlights);
        let mut context = self.context(stage.as_str());
        context.insert("highlights".to_string(), json!(highlights));
        let completion = self.host.complete(&prompt, context, None).await?;

        let interlude = HostInterlude {
            stage: stage.as_str().to_string(),
            content: completion.content,
            metadata: completion.metadata,
        };
        self.sink.emit(DebateEvent::Interlude(interlude.clone()));
        self.interludes.push(interlude);
        Ok(())
    }

    fn record_turn(&mut self, stage: String, seat: &SideSeat, completion: Completion) {
        let turn = DebateTurn {
            stage,
            speaker_role: seat.role,
            speaker_name: seat.spec.name.clone(),
            content: completion.content,
            metadata: completion.metadata,
        };
        self.sink.emit(DebateEvent::Turn(turn.clone()));
        self.transcript.append(turn);
    }

    fn context(&self, stage: &str) -> Metadata {
        let mut context = Metadata::new();
        context.insert("stage".to_string(), json!(stage));
        context.insert("topic".to_string(), json!(self.topic.clone()));
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::events::ChannelSink;
    use arena_domain::Vote;
    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // ==================== Test Mocks ====================

    struct MockParticipant {
        name: String,
        fixed_reply: Option<String>,
        fail_stage: Option<String>,
        delay: Option<Duration>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl MockParticipant {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                fixed_reply: None,
                fail_stage: None,
                delay: None,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn with_reply(mut self, reply: &str) -> Self {
            self.fixed_reply = Some(reply.to_string());
            self
        }

        fn failing_at(mut self, stage: &str) -> Self {
            self.fail_stage = Some(stage.to_string());
            self
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Participant for MockParticipant {
        fn name(&self) -> &str {
            &self.name
        }

        async fn complete(
            &self,
            prompt: &str,
            context: Metadata,
            _tags: Option<Metadata>,
        ) -> Result<Completion, ParticipantError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let stage = context
                .get("stage")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if let Some(fail_stage) = &self.fail_stage {
                if stage.starts_with(fail_stage.as_str()) {
                    return Err(ParticipantError::Status {
                        participant: self.name.clone(),
                        status: 500,
                        body: "mock failure".to_string(),
                    });
                }
            }
            self.prompts.lock().unwrap().push(prompt.to_string());
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let content = self
                .fixed_reply
                .clone()
                .unwrap_or_else(|| format!("{} reply {}", self.name, call));
            Ok(Completion {
                content,
                metadata: Metadata::new(),
            })
        }
    }

    #[derive(Default)]
    struct MockGateway {
        overrides: Mutex<HashMap<String, Arc<dyn Participant>>>,
    }

    impl MockGateway {
        fn with(self, name: &str, participant: Arc<dyn Participant>) -> Self {
            self.overrides
                .lock()
                .unwrap()
                .insert(name.to_string(), participant);
            self
        }
    }

    impl ParticipantGateway for MockGateway {
        fn connect(
            &self,
            spec: &ParticipantSpec,
            _options: &DebateOptions,
        ) -> Result<Arc<dyn Participant>, ParticipantError> {
            Ok(self
                .overrides
                .lock()
                .unwrap()
                .get(&spec.name)
                .cloned()
                .unwrap_or_else(|| Arc::new(MockParticipant::new(&spec.name))))
        }
    }

    fn spec(name: &str) -> ParticipantSpec {
        ParticipantSpec::new(name, format!("http://localhost:9000/{name}"))
    }

    fn request(judge_count: usize) -> DebateRequest {
        DebateRequest {
            topic: "Cities should ban private cars".to_string(),
            debaters: vec![spec("alpha"), spec("beta")],
            judges: (0..judge_count)
                .map(|i| spec(&format!("judge{i}")))
                .collect(),
            host: spec("host"),
            options: DebateOptions {
                max_cross_questions: 2,
                max_freeform_rounds: 2,
                request_timeout_seconds: 45,
            },
            metadata: None,
        }
    }

    async fn run_seeded(
        gateway: MockGateway,
        request: DebateRequest,
        seed: u64,
    ) -> Result<DebateResult, RunDebateError> {
        let use_case = RunDebateUseCase::new(Arc::new(gateway));
        let mut rng = StdRng::seed_from_u64(seed);
        use_case.execute_with(request, &NoEvents, &mut rng).await
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn full_session_produces_expected_counts() {
        let result = run_seeded(MockGateway::default(), request(5), 1)
            .await
            .unwrap();

        // 2 openings + 2 blocks of 2 Q/A pairs + 2 rounds of 2 turns + 2 closings
        let debater_turns = result
            .transcript
            .iter()
            .filter(|turn| {
                matches!(
                    turn.speaker_role,
                    DebateRole::Affirmative | DebateRole::Negative
                )
            })
            .count();
        assert_eq!(debater_turns, 2 + 2 * 2 * 2 + 2 * 2 + 2);
        assert_eq!(result.transcript.len(), debater_turns);

        assert_eq!(result.interludes.len(), 7);
        assert_eq!(result.judge_votes.len(), 5);
    }

    #[tokio::test]
    async fn interludes_follow_protocol_order() {
        let result = run_seeded(MockGateway::default(), request(5), 1)
            .await
            .unwrap();

        let stages: Vec<&str> = result
            .interludes
            .iter()
            .map(|interlude| interlude.stage.as_str())
            .collect();
        assert_eq!(
            stages,
            vec![
                "introduction",
                "pre_cross_examination",
                "mid_cross_examination",
                "pre_free_debate",
                "pre_closing",
                "pre_judging",
                "wrap_up",
            ]
        );
    }

    #[tokio::test]
    async fn transcript_stages_follow_protocol_order() {
        let result = run_seeded(MockGateway::default(), request(5), 1)
            .await
            .unwrap();

        let stages: Vec<&str> = result
            .transcript
            .iter()
            .map(|turn| turn.stage.as_str())
            .collect();
        assert_eq!(stages[0], "opening_affirmative");
        assert_eq!(stages[1], "opening_negative");
        assert_eq!(stages[2], "affirmative_cross_q1");
        assert_eq!(stages[3], "affirmative_cross_a1");
        assert!(stages.contains(&"negative_cross_q2"));
        assert!(stages.contains(&"free_debate_round2_negative"));

        // Closing order is the reverse of opening order.
        let closing_negative = stages.iter().position(|s| *s == "closing_negative").unwrap();
        let closing_affirmative = stages
            .iter()
            .position(|s| *s == "closing_affirmative")
            .unwrap();
        assert!(closing_negative < closing_affirmative);
        assert_eq!(closing_affirmative, stages.len() - 1);
    }

    #[tokio::test]
    async fn side_assignment_is_a_seeded_permutation() {
        let first = run_seeded(MockGateway::default(), request(5), 42)
            .await
            .unwrap();
        let second = run_seeded(MockGateway::default(), request(5), 42)
            .await
            .unwrap();
        assert_eq!(first.assignments, second.assignments);

        let mut names = vec![
            first.assignments.affirmative.clone(),
            first.assignments.negative.clone(),
        ];
        names.sort();
        assert_eq!(names, vec!["alpha", "beta"]);

        let mut orders = std::collections::HashSet::new();
        for seed in 0..16 {
            let result = run_seeded(MockGateway::default(), request(5), seed)
                .await
                .unwrap();
            orders.insert(result.assignments.affirmative);
        }
        assert_eq!(orders.len(), 2);
    }

    #[tokio::test]
    async fn votes_keep_input_order_despite_completion_order() {
        let delays = [50u64, 5, 40, 1, 20];
        let mut gateway = MockGateway::default();
        for (i, delay) in delays.iter().enumerate() {
            let payload = format!(
                r#"{{"winner": "affirmative", "summary": "ballot {i}"}}"#
            );
            gateway = gateway.with(
                &format!("judge{i}"),
                Arc::new(
                    MockParticipant::new(&format!("judge{i}"))
                        .with_reply(&payload)
                        .with_delay(Duration::from_millis(*delay)),
                ),
            );
        }

        let result = run_seeded(gateway, request(5), 1).await.unwrap();
        for (i, vote) in result.judge_votes.iter().enumerate() {
            assert_eq!(vote.judge_name, format!("judge{i}"));
            assert_eq!(vote.rationale, format!("ballot {i}"));
        }
    }

    #[tokio::test]
    async fn judge_replies_use_both_parser_tiers() {
        let gateway = MockGateway::default()
            .with(
                "judge0",
                Arc::new(MockParticipant::new("judge0").with_reply(
                    r#"{"winner": "negative", "summary": {"overall": "Sharper answers."}}"#,
                )),
            )
            .with(
                "judge1",
                Arc::new(
                    MockParticipant::new("judge1")
                        .with_reply("Negative\nThey failed to rebut."),
                ),
            );

        let result = run_seeded(gateway, request(5), 1).await.unwrap();

        let structured = &result.judge_votes[0];
        assert_eq!(structured.vote, Vote::Negative);
        assert_eq!(structured.rationale, "Sharper answers.");
        assert_eq!(structured.metadata["format"], "structured");

        let legacy = &result.judge_votes[1];
        assert_eq!(legacy.vote, Vote::Negative);
        assert_eq!(legacy.rationale, "They failed to rebut.");
        assert_eq!(legacy.metadata["format"], "legacy_text");
    }

    #[tokio::test]
    async fn wrap_up_interlude_receives_tally_summary() {
        let host = Arc::new(MockParticipant::new("host"));
        let mut gateway = MockGateway::default().with("host", host.clone());
        for i in 0..5 {
            let winner = if i < 3 { "affirmative" } else { "negative" };
            gateway = gateway.with(
                &format!("judge{i}"),
                Arc::new(MockParticipant::new(&format!("judge{i}")).with_reply(&format!(
                    r#"{{"winner": "{winner}", "summary": "s"}}"#
                ))),
            );
        }

        run_seeded(gateway, request(5), 1).await.unwrap();

        let prompts = host.prompts();
        let wrap_up = prompts.last().unwrap();
        assert!(wrap_up.contains("Stage: wrap_up"));
        assert!(wrap_up.contains("Affirmative leads the ballot 3-2."));
        assert!(wrap_up.contains("Final tally — Affirmative: 3, Negative: 2"));
    }

    #[tokio::test]
    async fn cross_questions_thread_prior_questions() {
        let alpha = Arc::new(MockParticipant::new("alpha"));
        let gateway = MockGateway::default().with("alpha", alpha.clone());

        let result = run_seeded(gateway, request(5), 1).await.unwrap();

        // Find alpha's first cross-exam question content and check it is
        // referenced in the prompt for its second question.
        let block = if result.assignments.affirmative == "alpha" {
            "affirmative_cross"
        } else {
            "negative_cross"
        };
        let first_question = result
            .transcript
            .iter()
            .find(|turn| turn.stage == format!("{block}_q1"))
            .unwrap();

        let second_prompt = alpha
            .prompts()
            .iter()
            .find(|prompt| {
                prompt.contains("Questions already asked")
                    && prompt.contains(&first_question.content)
            })
            .cloned();
        assert!(second_prompt.is_some());
    }

    #[tokio::test]
    async fn failure_at_free_debate_aborts_and_emits_error_event() {
        let gateway = MockGateway::default()
            .with(
                "beta",
                Arc::new(MockParticipant::new("beta").failing_at("free_debate")),
            );
        let use_case = RunDebateUseCase::new(Arc::new(gateway));
        let (sink, mut receiver) = ChannelSink::channel();

        let mut rng = StdRng::seed_from_u64(1);
        let outcome = use_case
            .execute_with(request(5), &sink, &mut rng)
            .await;
        assert!(matches!(
            outcome,
            Err(RunDebateError::Participant(ParticipantError::Status {
                status: 500,
                ..
            }))
        ));
        drop(sink);

        let mut events = Vec::new();
        while let Some(event) = receiver.recv().await {
            events.push(event);
        }
        assert!(matches!(events.last(), Some(DebateEvent::Error { .. })));
        assert!(
            !events
                .iter()
                .any(|event| matches!(event, DebateEvent::Vote(_)))
        );
    }

    #[tokio::test]
    async fn events_mirror_the_result() {
        let use_case = RunDebateUseCase::new(Arc::new(MockGateway::default()));
        let (sink, mut receiver) = ChannelSink::channel();

        let mut rng = StdRng::seed_from_u64(3);
        let result = use_case
            .execute_with(request(5), &sink, &mut rng)
            .await
            .unwrap();
        drop(sink);

        let mut turns = 0;
        let mut interludes = 0;
        let mut votes = 0;
        while let Some(event) = receiver.recv().await {
            match event {
                DebateEvent::Turn(_) => turns += 1,
                DebateEvent::Interlude(_) => interludes += 1,
                DebateEvent::Vote(_) => votes += 1,
                DebateEvent::Error { .. } => panic!("unexpected error event"),
            }
        }
        assert_eq!(turns, result.transcript.len());
        assert_eq!(interludes, result.interludes.len());
        assert_eq!(votes, result.judge_votes.len());
    }

    #[tokio::test]
    async fn invalid_request_is_rejected_before_any_call() {
        let mut bad = request(5);
        bad.judges.truncate(3);
        let outcome = run_seeded(MockGateway::default(), bad, 1).await;
        assert!(matches!(
            outcome,
            Err(RunDebateError::InvalidRequest(DomainError::JudgeCount(3)))
        ));
    }
}
