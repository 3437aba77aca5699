//! Asynchronous abstraction for producing the pet's side of a chat.
//!
//! Runtime users plug in [`ResponseProvider`] implementations so replies can
//! come from the canned phrase pool, scripted fixtures, or something smarter.

use async_trait::async_trait;
use rand::Rng;

use pet_content::PhrasePool;
use pet_core::Pet;

/// Trait for producing the pet's reply to a user message.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Reply text for `text`, given the pet at the time of the reply.
    async fn respond(&self, pet: &Pet, text: &str) -> String;
}

/// Picks a random line from a [`PhrasePool`], ignoring what was said.
#[derive(Debug, Clone, Default)]
pub struct PhraseResponseProvider {
    pool: PhrasePool,
}

impl PhraseResponseProvider {
    pub fn new(pool: PhrasePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PhrasePool {
        &self.pool
    }

    fn pick(&self, pet_name: &str) -> String {
        if self.pool.is_empty() {
            return format!("*{pet_name} stays quiet*");
        }
        let index = rand::thread_rng().gen_range(0..self.pool.len());
        self.pool.render(index, pet_name).unwrap_or_default()
    }
}

#[async_trait]
impl ResponseProvider for PhraseResponseProvider {
    async fn respond(&self, pet: &Pet, _text: &str) -> String {
        self.pick(&pet.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pet_core::PetConfig;

    #[tokio::test]
    async fn replies_come_from_the_pool() {
        let provider = PhraseResponseProvider::default();
        let mut pet = Pet::new(&PetConfig::default());
        pet.name = "Rex".into();

        let expected: Vec<String> = (0..provider.pool().len())
            .filter_map(|i| provider.pool().render(i, "Rex"))
            .collect();

        for _ in 0..20 {
            let reply = provider.respond(&pet, "hi").await;
            assert!(expected.contains(&reply), "unexpected reply {reply:?}");
        }
    }

    #[tokio::test]
    async fn empty_pool_still_replies() {
        let provider = PhraseResponseProvider::new(PhrasePool::new(Vec::new()));
        let mut pet = Pet::new(&PetConfig::default());
        pet.name = "Rex".into();

        assert_eq!(provider.respond(&pet, "hi").await, "*Rex stays quiet*");
    }
}
