//! Voting flow use case
//!
//! Linear spoken dialogue:
//! select language, explain, read candidates, collect choice, confirm,
//! then record or cancel. Every listen step is bounded to three attempts;
//! synthesis failures are reported and skipped, never fatal.

use crate::domain::speech::Language;
use crate::domain::voting::{CandidateId, CandidateRoster, ConfirmIntent};

use super::ports::{Listener, Speaker};

/// Fixed number of listen attempts per spoken question
pub const LISTEN_ATTEMPTS: usize = 3;

/// Terminal state of one voting session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// Vote confirmed for this candidate
    Recorded(CandidateId),
    /// Voter denied confirmation, or confirmation went unanswered
    Cancelled,
    /// No usable choice after the bounded attempts
    Abandoned,
}

/// Voting dialogue over the speech synthesis and recognition ports.
pub struct VotingFlow<S, L>
where
    S: Speaker,
    L: Listener,
{
    speaker: S,
    listener: L,
    roster: CandidateRoster,
}

impl<S, L> VotingFlow<S, L>
where
    S: Speaker,
    L: Listener,
{
    pub fn new(speaker: S, listener: L, roster: CandidateRoster) -> Self {
        Self {
            speaker,
            listener,
            roster,
        }
    }

    pub fn roster(&self) -> &CandidateRoster {
        &self.roster
    }

    /// Run the whole dialogue. A preset language skips spoken selection.
    pub async fn run(&self, preset_language: Option<Language>) -> VoteOutcome {
        let language = match preset_language {
            Some(language) => language,
            None => self.select_language().await,
        };

        self.say(language, prompts::explain(language)).await;
        self.read_candidates(language).await;

        let Some(choice) = self.collect_choice(language).await else {
            self.say(language, prompts::apology(language)).await;
            return VoteOutcome::Abandoned;
        };

        if self.confirm_vote(language, choice).await {
            self.say(language, prompts::recorded(language)).await;
            VoteOutcome::Recorded(choice)
        } else {
            self.say(language, prompts::cancelled(language)).await;
            VoteOutcome::Cancelled
        }
    }

    /// Speak a line; a failed synthesis is reported and the dialogue goes on.
    async fn say(&self, language: Language, text: &str) {
        if let Err(e) = self.speaker.speak(text, language).await {
            eprintln!("Warning: speech synthesis failed: {}", e);
        }
    }

    /// Bilingual welcome, then up to three attempts to hear a language name.
    /// Defaults to English when nothing matches.
    async fn select_language(&self) -> Language {
        self.say(Language::English, prompts::WELCOME_EN).await;
        self.say(Language::Hindi, prompts::WELCOME_HI).await;

        let heard = self
            .prompt_until(Language::English, prompts::LANGUAGE_REPROMPT, |t| {
                Language::from_spoken(t)
            })
            .await;

        match heard {
            Some(language) => {
                self.say(language, prompts::language_selected(language)).await;
                language
            }
            None => {
                self.say(Language::English, prompts::LANGUAGE_DEFAULT).await;
                Language::English
            }
        }
    }

    async fn read_candidates(&self, language: Language) {
        self.say(language, prompts::candidates_intro(language)).await;
        for candidate in self.roster.iter() {
            let line = prompts::candidate_line(language, candidate.id(), candidate.name(language));
            self.say(language, &line).await;
        }
    }

    /// Ask for a candidate number; a response matches when it contains the
    /// digit string of a defined id.
    async fn collect_choice(&self, language: Language) -> Option<CandidateId> {
        self.say(language, prompts::choice_prompt(language)).await;
        self.prompt_until(language, prompts::choice_reprompt(language), |t| {
            self.roster.match_spoken(t)
        })
        .await
    }

    /// Speak the chosen candidate back and ask for yes/no. Three
    /// unclassifiable attempts count as a refusal.
    async fn confirm_vote(&self, language: Language, choice: CandidateId) -> bool {
        if let Some(candidate) = self.roster.get(choice) {
            let line = prompts::confirm_prompt(language, choice, candidate.name(language));
            self.say(language, &line).await;
        }

        let intent = self
            .prompt_until(language, prompts::confirm_reprompt(language), |t| {
                ConfirmIntent::classify(t, language)
            })
            .await;

        matches!(intent, Some(ConfirmIntent::Affirm))
    }

    /// Bounded-retry spoken prompt: listen up to [`LISTEN_ATTEMPTS`] times,
    /// running each transcript through `matcher`. Silence, recognition
    /// failures, and unmatched transcripts all consume an attempt and speak
    /// the re-prompt.
    async fn prompt_until<T>(
        &self,
        language: Language,
        reprompt: &str,
        matcher: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        for _ in 0..LISTEN_ATTEMPTS {
            match self.listener.listen(language).await {
                Ok(Some(heard)) => {
                    if let Some(matched) = matcher(&heard) {
                        return Some(matched);
                    }
                }
                Ok(None) => {}
                Err(e) => eprintln!("Warning: listening failed: {}", e),
            }
            self.say(language, reprompt).await;
        }
        None
    }
}

/// The spoken prompt catalog for both languages.
mod prompts {
    use crate::domain::speech::Language;
    use crate::domain::voting::CandidateId;

    pub const WELCOME_EN: &str =
        "Welcome to Agora Voice Assistant. For English, say English. For Hindi, say Hindi.";
    pub const WELCOME_HI: &str =
        "आगोरा वॉइस असिस्टेंट में आपका स्वागत है। अंग्रेज़ी के लिए English बोलिए। हिंदी के लिए Hindi बोलिए।";
    pub const LANGUAGE_REPROMPT: &str = "Please say English or Hindi again.";
    pub const LANGUAGE_DEFAULT: &str = "Defaulting to English.";

    pub fn language_selected(language: Language) -> &'static str {
        match language {
            Language::English => "You selected English.",
            Language::Hindi => "आपने हिंदी चुनी है।",
        }
    }

    pub fn explain(language: Language) -> &'static str {
        match language {
            Language::English => {
                "I will guide you through the voting process. I will read the names of the \
                 candidates, then you will speak the number of the candidate you want to vote for."
            }
            Language::Hindi => {
                "मैं आपको वोटिंग की प्रक्रिया में मार्गदर्शन करुंगी। मैं उम्मीदवारों के नाम पढ़ूंगी, \
                 फिर आप उस उम्मीदवार का नंबर बोलिए जिसे आप वोट देना चाहते हैं।"
            }
        }
    }

    pub fn candidates_intro(language: Language) -> &'static str {
        match language {
            Language::English => "Here are the candidates.",
            Language::Hindi => "यह रहे उम्मीदवार।",
        }
    }

    pub fn candidate_line(language: Language, id: CandidateId, name: &str) -> String {
        match language {
            Language::English => format!("Number {}: {}", id, name),
            Language::Hindi => format!("नंबर {}: {}", id, name),
        }
    }

    pub fn choice_prompt(language: Language) -> &'static str {
        match language {
            Language::English => "Please say the number of the candidate you want to vote for.",
            Language::Hindi => "कृपया उम्मीदवार का नंबर बोलिए।",
        }
    }

    pub fn choice_reprompt(language: Language) -> &'static str {
        match language {
            Language::English => "I didn't understand. Please say the number clearly.",
            Language::Hindi => "मुझे समझ नहीं आया। कृपया नंबर स्पष्ट बोलिए।",
        }
    }

    pub fn apology(language: Language) -> &'static str {
        match language {
            Language::English => "Could not detect your choice. Please try again later.",
            Language::Hindi => "आपकी पसंद समझ नहीं आई। कृपया बाद में पुनः प्रयास करें।",
        }
    }

    pub fn confirm_prompt(language: Language, id: CandidateId, name: &str) -> String {
        match language {
            Language::English => format!(
                "You chose number {}, {}. Do you want to confirm this vote?",
                id, name
            ),
            Language::Hindi => format!(
                "आपने नंबर {}, {} चुना है। क्या आप इसे पुष्टि करना चाहते हैं?",
                id, name
            ),
        }
    }

    pub fn confirm_reprompt(language: Language) -> &'static str {
        match language {
            Language::English => "Please say yes or no.",
            Language::Hindi => "कृपया हां या नहीं बोलिए।",
        }
    }

    pub fn recorded(language: Language) -> &'static str {
        match language {
            Language::English => "Your vote has been recorded. Thank you.",
            Language::Hindi => "आपका वोट दर्ज कर लिया गया है। धन्यवाद।",
        }
    }

    pub fn cancelled(language: Language) -> &'static str {
        match language {
            Language::English => "Vote cancelled. No vote recorded.",
            Language::Hindi => "वोट रद्द कर दिया गया। कोई वोट दर्ज नहीं हुआ।",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ListenError, SpeakError};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Listener that replays a script; once exhausted it hears only mumbling.
    #[derive(Clone)]
    struct ScriptedListener {
        responses: Arc<Mutex<VecDeque<Result<Option<String>, ListenError>>>>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedListener {
        fn new(responses: Vec<Result<Option<String>, ListenError>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into_iter().collect())),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn hearing(lines: &[&str]) -> Self {
            Self::new(lines.iter().map(|l| Ok(Some(l.to_string()))).collect())
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Listener for ScriptedListener {
        async fn listen(&self, _language: Language) -> Result<Option<String>, ListenError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Some("mumble".to_string())))
        }
    }

    /// Speaker that records every line instead of playing audio.
    #[derive(Clone, Default)]
    struct RecordingSpeaker {
        spoken: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingSpeaker {
        fn lines(&self) -> Vec<String> {
            self.spoken.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Speaker for RecordingSpeaker {
        async fn speak(&self, text: &str, _language: Language) -> Result<(), SpeakError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    /// Speaker whose synthesis always fails.
    struct BrokenSpeaker;

    #[async_trait]
    impl Speaker for BrokenSpeaker {
        async fn speak(&self, _text: &str, _language: Language) -> Result<(), SpeakError> {
            Err(SpeakError::RequestFailed("offline".to_string()))
        }
    }

    fn flow(
        speaker: &RecordingSpeaker,
        listener: &ScriptedListener,
    ) -> VotingFlow<RecordingSpeaker, ScriptedListener> {
        VotingFlow::new(speaker.clone(), listener.clone(), CandidateRoster::default())
    }

    #[tokio::test]
    async fn choice_collection_stops_after_exactly_three_attempts() {
        let speaker = RecordingSpeaker::default();
        // Every attempt hears something, nothing contains a candidate digit
        let listener = ScriptedListener::new(vec![]);

        let outcome = flow(&speaker, &listener).run(Some(Language::English)).await;

        assert_eq!(outcome, VoteOutcome::Abandoned);
        assert_eq!(listener.calls(), LISTEN_ATTEMPTS);
    }

    #[tokio::test]
    async fn spoken_digit_selects_candidate() {
        let speaker = RecordingSpeaker::default();
        let listener = ScriptedListener::hearing(&["i pick number 2", "yes"]);

        let outcome = flow(&speaker, &listener).run(Some(Language::English)).await;

        assert_eq!(outcome, VoteOutcome::Recorded(2));
        assert_eq!(listener.calls(), 2);
    }

    #[tokio::test]
    async fn unanswered_confirmation_records_nothing() {
        let speaker = RecordingSpeaker::default();
        // Choice succeeds, then three attempts that are neither yes nor no
        let listener = ScriptedListener::hearing(&["2", "maybe", "later", "hmm"]);

        let outcome = flow(&speaker, &listener).run(Some(Language::English)).await;

        assert_eq!(outcome, VoteOutcome::Cancelled);
        assert_eq!(listener.calls(), 1 + LISTEN_ATTEMPTS);
    }

    #[tokio::test]
    async fn denied_confirmation_cancels() {
        let speaker = RecordingSpeaker::default();
        let listener = ScriptedListener::hearing(&["1", "no"]);

        let outcome = flow(&speaker, &listener).run(Some(Language::English)).await;

        assert_eq!(outcome, VoteOutcome::Cancelled);
        let lines = speaker.lines();
        assert!(lines.iter().any(|l| l.contains("Vote cancelled")));
    }

    #[tokio::test]
    async fn silence_and_errors_consume_attempts() {
        let speaker = RecordingSpeaker::default();
        let listener = ScriptedListener::new(vec![
            Ok(None),
            Err(ListenError::CaptureFailed("no mic".to_string())),
            Ok(None),
        ]);

        let outcome = flow(&speaker, &listener).run(Some(Language::English)).await;

        assert_eq!(outcome, VoteOutcome::Abandoned);
        assert_eq!(listener.calls(), LISTEN_ATTEMPTS);
    }

    #[tokio::test]
    async fn spoken_hindi_drives_hindi_dialogue() {
        let speaker = RecordingSpeaker::default();
        let listener = ScriptedListener::hearing(&["hindi", "2", "हां"]);

        let outcome = flow(&speaker, &listener).run(None).await;

        assert_eq!(outcome, VoteOutcome::Recorded(2));
        let lines = speaker.lines();
        assert!(lines.iter().any(|l| l == "आपने हिंदी चुनी है।"));
        assert!(lines.iter().any(|l| l.contains("भारत ज्योति साहू")));
    }

    #[tokio::test]
    async fn language_defaults_to_english_after_three_misses() {
        let speaker = RecordingSpeaker::default();
        let listener = ScriptedListener::hearing(&["what", "pardon", "french", "1", "yes"]);

        let outcome = flow(&speaker, &listener).run(None).await;

        assert_eq!(outcome, VoteOutcome::Recorded(1));
        assert!(speaker.lines().iter().any(|l| l == "Defaulting to English."));
    }

    #[tokio::test]
    async fn broken_speaker_is_not_fatal() {
        let listener = ScriptedListener::hearing(&["2", "yes"]);
        let voting = VotingFlow::new(BrokenSpeaker, listener.clone(), CandidateRoster::default());

        let outcome = voting.run(Some(Language::English)).await;

        assert_eq!(outcome, VoteOutcome::Recorded(2));
    }

    #[tokio::test]
    async fn candidates_read_in_roster_order() {
        let speaker = RecordingSpeaker::default();
        let listener = ScriptedListener::hearing(&["3", "yes"]);

        flow(&speaker, &listener).run(Some(Language::English)).await;

        let lines = speaker.lines();
        let first = lines.iter().position(|l| l.starts_with("Number 1:")).unwrap();
        let second = lines.iter().position(|l| l.starts_with("Number 2:")).unwrap();
        let third = lines.iter().position(|l| l.starts_with("Number 3:")).unwrap();
        assert!(first < second && second < third);
    }
}
