//! Attribute enrichers. One constrained LLM question per attribute.
//!
//! Answers come back as `Outcome`s; the normalizer degrades them to defaults.

use crate::domain::{ChatMessage, Outcome, TaskKind};
use crate::ports::LlmPort;
use crate::shared::config::OutreachSettings;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct AttributeEnricher {
    llm: Arc<dyn LlmPort>,
    settings: Arc<OutreachSettings>,
}

impl AttributeEnricher {
    pub fn new(llm: Arc<dyn LlmPort>, settings: Arc<OutreachSettings>) -> Self {
        Self { llm, settings }
    }

    fn gender_prompt(first_name: &str) -> String {
        format!(
            "Is the name '{}' typically female? Respond with 'True' if it is female, \
             and 'False' if it is male or if the gender of the name is ambiguous.",
            first_name
        )
    }

    fn mission_prompt(company: &str) -> String {
        format!(
            "Respond with the mission of the tech company {}. Respond with ONLY the mission \
             of this company in the format 'to __'. Be specific. If you are unsure, respond \
             only with 'False'",
            company
        )
    }

    /// `Some(true)` / `Some(false)` for a literal true/false (any case), `None` otherwise.
    pub fn parse_gender_answer(answer: &str) -> Option<bool> {
        match answer.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// Lower-cased mission, or `None` for "false" / an empty answer.
    pub fn parse_mission_answer(answer: &str) -> Option<String> {
        let answer = answer.trim().to_lowercase();
        if answer.is_empty() || answer == "false" {
            None
        } else {
            Some(answer)
        }
    }

    /// Whether `first_name` is typically female. Unrecognised answers are
    /// logged and reported as `Empty`.
    pub async fn is_female_name(&self, first_name: &str) -> Outcome<bool> {
        let model = self.settings.models.model_for(TaskKind::Classify);
        let messages = [ChatMessage::system(Self::gender_prompt(first_name))];
        let answer = match self.llm.complete(model, &messages).await {
            Ok(a) => a,
            Err(e) => return Outcome::Failed(e),
        };
        match Self::parse_gender_answer(&answer) {
            Some(female) => {
                debug!(first_name, female, "gender classified");
                Outcome::Found(female)
            }
            None => {
                warn!(first_name, answer = %answer, "invalid response for gender");
                Outcome::Empty
            }
        }
    }

    /// The employer's mission statement ("to ..."), or `Empty` when the model does not know.
    pub async fn company_mission(&self, company: &str) -> Outcome<String> {
        let model = self.settings.models.model_for(TaskKind::Lookup);
        let messages = [ChatMessage::system(Self::mission_prompt(company))];
        match self.llm.complete(model, &messages).await {
            Ok(answer) => Self::parse_mission_answer(&answer).map_or(Outcome::Empty, Outcome::Found),
            Err(e) => Outcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::llm::ScriptedLlmAdapter;

    fn enricher(llm: ScriptedLlmAdapter) -> (AttributeEnricher, Arc<ScriptedLlmAdapter>) {
        let llm = Arc::new(llm);
        let e = AttributeEnricher::new(llm.clone(), Arc::new(OutreachSettings::default()));
        (e, llm)
    }

    #[test]
    fn test_parse_gender_answer() {
        assert_eq!(AttributeEnricher::parse_gender_answer("True"), Some(true));
        assert_eq!(AttributeEnricher::parse_gender_answer(" FALSE\n"), Some(false));
        assert_eq!(AttributeEnricher::parse_gender_answer("Probably"), None);
        assert_eq!(AttributeEnricher::parse_gender_answer("True."), None);
    }

    #[test]
    fn test_parse_mission_answer() {
        assert_eq!(
            AttributeEnricher::parse_mission_answer("To Organize The World's Information"),
            Some("to organize the world's information".to_string())
        );
        assert_eq!(AttributeEnricher::parse_mission_answer("False"), None);
        assert_eq!(AttributeEnricher::parse_mission_answer("  "), None);
    }

    #[tokio::test]
    async fn test_gender_uses_classify_model() {
        let (e, llm) = enricher(ScriptedLlmAdapter::new().reply("'Ana'", "True"));
        assert!(matches!(e.is_female_name("Ana").await, Outcome::Found(true)));
        assert_eq!(llm.calls()[0].model, "gpt-3.5-turbo");
    }

    #[tokio::test]
    async fn test_invalid_gender_answer_degrades_to_false() {
        let (e, _) = enricher(ScriptedLlmAdapter::new().reply("'Sam'", "It depends"));
        let outcome = e.is_female_name("Sam").await;
        assert!(matches!(outcome, Outcome::Empty));
        assert!(!outcome.or_default_logged("gender"));
    }

    #[tokio::test]
    async fn test_gender_transport_failure_degrades_to_false() {
        let (e, _) = enricher(ScriptedLlmAdapter::new().fail("typically female", "503"));
        let outcome = e.is_female_name("Ana").await;
        assert!(matches!(outcome, Outcome::Failed(_)));
        assert!(!outcome.or_default_logged("gender"));
    }

    #[tokio::test]
    async fn test_mission_lookup() {
        let (e, llm) = enricher(
            ScriptedLlmAdapter::new()
                .reply("company Acme", "To make anvils smarter")
                .reply("company Initech", "False"),
        );
        assert_eq!(
            e.company_mission("Acme").await.or_default_logged("mission"),
            "to make anvils smarter"
        );
        assert!(matches!(e.company_mission("Initech").await, Outcome::Empty));
        assert_eq!(llm.calls()[0].model, "gpt-4o");
    }
}
