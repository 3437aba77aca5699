/// Replies the pet picks from when chatted with.
///
/// Each entry may contain a `{name}` placeholder for the pet's name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhrasePool {
    pub responses: Vec<String>,
}

impl PhrasePool {
    pub const NAME_PLACEHOLDER: &'static str = "{name}";

    pub fn new(responses: Vec<String>) -> Self {
        Self { responses }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Returns response `index` with the pet's name filled in.
    pub fn render(&self, index: usize, pet_name: &str) -> Option<String> {
        self.responses
            .get(index)
            .map(|phrase| phrase.replace(Self::NAME_PLACEHOLDER, pet_name))
    }
}

impl Default for PhrasePool {
    fn default() -> Self {
        Self::new(
            [
                "*{name} wags tail happily*",
                "*{name} tilts head curiously*",
                "*{name} looks excited*",
                "I love when you talk to me!",
                "That's interesting! Tell me more!",
                "*{name} jumps around playfully*",
                "You're the best owner ever!",
                "*{name} nuzzles against you*",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_name() {
        let pool = PhrasePool::default();
        assert_eq!(pool.len(), 8);
        assert_eq!(
            pool.render(0, "Rex").as_deref(),
            Some("*Rex wags tail happily*")
        );
        assert_eq!(
            pool.render(3, "Rex").as_deref(),
            Some("I love when you talk to me!")
        );
        assert_eq!(pool.render(8, "Rex"), None);
    }
}
