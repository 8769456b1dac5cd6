//! Interactive runner for the voting flow

use std::process::ExitCode;

use crate::application::voting::{VoteOutcome, VotingFlow};
use crate::domain::speech::Language;
use crate::domain::voting::CandidateRoster;
use crate::infrastructure::{CpalMicrophone, GoogleSpeechListener, TranslateTtsSpeaker};

use super::presenter::Presenter;

/// Options for the voting flow, after config merging
#[derive(Debug, Clone)]
pub struct VoteOptions {
    /// Preset dialogue language, skipping spoken selection
    pub language: Option<Language>,
    pub listen_secs: u64,
    pub speech_api_key: Option<String>,
}

/// Run the voice-guided voting dialogue
pub async fn run_vote(options: VoteOptions) -> ExitCode {
    let presenter = Presenter::new();

    presenter.banner("AGORA - Voice Voting Assistant");
    presenter.info("Starting the voice assistant. Speak after each prompt.");

    let speaker = TranslateTtsSpeaker::new();
    let microphone = CpalMicrophone::new(options.listen_secs);
    let listener = GoogleSpeechListener::new(microphone, options.speech_api_key);

    let voting = VotingFlow::new(speaker, listener, CandidateRoster::default());

    match voting.run(options.language).await {
        VoteOutcome::Recorded(id) => {
            // The only record of a cast vote is this console line
            let name = voting
                .roster()
                .get(id)
                .map(|c| c.name(Language::English))
                .unwrap_or_default();
            presenter.success(&format!("Recorded vote for candidate {}: {}", id, name));
        }
        VoteOutcome::Cancelled => {
            presenter.info("Vote cancelled. No vote recorded.");
        }
        VoteOutcome::Abandoned => {
            presenter.warn("No choice detected. No vote recorded.");
        }
    }

    ExitCode::SUCCESS
}
