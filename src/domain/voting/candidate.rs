//! Candidate roster

use crate::domain::speech::Language;

/// Candidate identifier spoken by the voter
pub type CandidateId = u8;

/// A candidate with a display name per supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    id: CandidateId,
    name_en: String,
    name_hi: String,
}

impl Candidate {
    pub fn new(id: CandidateId, name_en: impl Into<String>, name_hi: impl Into<String>) -> Self {
        Self {
            id,
            name_en: name_en.into(),
            name_hi: name_hi.into(),
        }
    }

    pub fn id(&self) -> CandidateId {
        self.id
    }

    /// Display name in the given language
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::English => &self.name_en,
            Language::Hindi => &self.name_hi,
        }
    }
}

/// Immutable, insertion-ordered candidate table, fixed at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRoster {
    candidates: Vec<Candidate>,
}

impl CandidateRoster {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Candidates in enumeration (insertion) order
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Match a spoken choice: a transcript is accepted iff it contains the
    /// decimal digit string of a defined candidate id. First roster match wins.
    pub fn match_spoken(&self, transcript: &str) -> Option<CandidateId> {
        self.candidates
            .iter()
            .find(|c| transcript.contains(&c.id().to_string()))
            .map(|c| c.id())
    }
}

impl Default for CandidateRoster {
    fn default() -> Self {
        Self::new(vec![
            Candidate::new(1, "Sankar Mridha", "संकर मृदा"),
            Candidate::new(2, "Bharat Jyoti Sahu", "भारत ज्योति साहू"),
            Candidate::new(3, "Anukampa Behera", "अनुकम्पा बेहेरा"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_order_and_names() {
        let roster = CandidateRoster::default();
        let ids: Vec<CandidateId> = roster.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(roster.get(2).unwrap().name(Language::English), "Bharat Jyoti Sahu");
        assert_eq!(roster.get(2).unwrap().name(Language::Hindi), "भारत ज्योति साहू");
    }

    #[test]
    fn match_spoken_digit_anywhere() {
        let roster = CandidateRoster::default();
        assert_eq!(roster.match_spoken("number 2 please"), Some(2));
        assert_eq!(roster.match_spoken("2"), Some(2));
        assert_eq!(roster.match_spoken("i vote for candidate 3"), Some(3));
    }

    #[test]
    fn match_spoken_no_digit() {
        let roster = CandidateRoster::default();
        assert_eq!(roster.match_spoken("the second one"), None);
        assert_eq!(roster.match_spoken(""), None);
        assert_eq!(roster.match_spoken("number 7"), None);
    }

    #[test]
    fn match_spoken_first_roster_match_wins() {
        let roster = CandidateRoster::default();
        // "12" contains both "1" and "2"; roster order decides
        assert_eq!(roster.match_spoken("12"), Some(1));
    }

    #[test]
    fn get_unknown_id() {
        assert!(CandidateRoster::default().get(9).is_none());
    }
}
