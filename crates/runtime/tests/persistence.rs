use std::sync::Arc;

use pet_core::{
    CareAction, Message, Operation, PetColor, PetConfig, PetKind, PetState, Sender,
};
use pet_runtime::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, Runtime, RuntimeConfig,
    StateRepository,
};

fn sample_state() -> PetState {
    let mut state = PetState::new(&PetConfig::default());
    state.game_started = true;
    state.pet.name = "Rex".into();
    state.pet.kind = PetKind::Dragon;
    state.pet.color = PetColor::Teal;
    state.pet.level = 3;
    state.pet.experience = 42;
    state.pet.inventory = vec![
        "stylish-hat".into(),
        "premium-food".into(),
        "stylish-hat".into(),
    ];
    state.messages = vec![
        Message::new("a", Sender::User, "hi", "2024-05-01T10:00:00+00:00"),
        Message::new("b", Sender::Pet, "*Rex looks excited*", "2024-05-01T10:00:01+00:00"),
    ];
    state
}

#[test]
fn json_record_round_trips_field_for_field() {
    let state = sample_state();

    let json = serde_json::to_string(&state).expect("serialize");
    let restored: PetState = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, state);
    assert_eq!(restored.pet.inventory, state.pet.inventory);
    assert_eq!(restored.messages, state.messages);
}

#[test]
fn json_record_uses_storage_field_names() {
    let value = serde_json::to_value(sample_state()).expect("serialize");

    assert_eq!(value["gameStarted"], true);
    assert_eq!(value["pet"]["type"], "dragon");
    assert_eq!(value["pet"]["color"], "teal");
    assert_eq!(value["pet"]["hunger"], 100);
    assert_eq!(value["messages"][1]["sender"], "pet");
}

#[test]
fn out_of_range_stats_are_clamped_on_load() {
    let mut value = serde_json::to_value(sample_state()).expect("serialize");
    value["pet"]["hunger"] = serde_json::json!(250);
    value["pet"]["energy"] = serde_json::json!(-4);

    let state: PetState = serde_json::from_value(value).expect("deserialize");
    assert_eq!(state.pet.vitals.hunger(), 100);
    assert_eq!(state.pet.vitals.energy(), 0);
}

#[tokio::test]
async fn record_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let runtime = Runtime::builder()
        .repository(FileStateRepository::new(dir.path()).expect("repo"))
        .enable_ticker(false)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    handle.execute(Operation::StartGame).await.unwrap();
    handle
        .execute(Operation::CreatePet {
            name: "Rex".into(),
            kind: PetKind::Dog,
            color: PetColor::Red,
        })
        .await
        .unwrap();
    handle.perform(CareAction::Clean).await.unwrap();
    handle.purchase("stylish-hat").await.unwrap();
    let before = handle.query_state().await.unwrap();
    runtime.shutdown().await.expect("shutdown");

    let runtime = Runtime::builder()
        .repository(FileStateRepository::new(dir.path()).expect("repo"))
        .enable_ticker(false)
        .build()
        .await
        .expect("runtime should build");
    let after = runtime.handle().query_state().await.unwrap();

    assert_eq!(after, before);
    assert_eq!(after.pet.name, "Rex");
    assert_eq!(after.pet.inventory, vec!["stylish-hat"]);
}

#[tokio::test]
async fn corrupted_record_starts_fresh() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = FileStateRepository::new(dir.path()).expect("repo");
    std::fs::write(repo.path(), "not json").unwrap();

    let runtime = Runtime::builder()
        .repository(repo)
        .enable_ticker(false)
        .build()
        .await
        .expect("runtime should build");

    assert_eq!(
        runtime.handle().query_state().await.unwrap(),
        PetState::new(&PetConfig::default())
    );
}

#[tokio::test]
async fn stored_record_is_restored_on_build() {
    let repo = Arc::new(InMemoryStateRepo::with_state(sample_state()));

    let runtime = Runtime::builder()
        .shared_repository(repo.clone())
        .enable_ticker(false)
        .build()
        .await
        .expect("runtime should build");

    assert_eq!(runtime.handle().query_state().await.unwrap(), sample_state());
    assert_eq!(repo.save_count(), 0);
}

#[tokio::test]
async fn fresh_record_uses_configured_starting_coins() {
    let config = RuntimeConfig {
        pet_config: PetConfig::with_starting_coins(120),
        enable_ticker: false,
        ..RuntimeConfig::default()
    };

    let runtime = Runtime::builder()
        .config(config)
        .build()
        .await
        .expect("runtime should build");

    let state = runtime.handle().query_state().await.unwrap();
    assert_eq!(state.pet.coins, 120);
    assert!(!state.game_started);
}

/// Repository whose every write fails.
struct BrokenRepo;

impl StateRepository for BrokenRepo {
    fn save(&self, _state: &PetState) -> pet_runtime::repository::Result<()> {
        Err(RepositoryError::LockPoisoned)
    }

    fn load(&self) -> pet_runtime::repository::Result<Option<PetState>> {
        Ok(None)
    }

    fn clear(&self) -> pet_runtime::repository::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn save_failures_do_not_block_play() {
    let runtime = Runtime::builder()
        .shared_repository(Arc::new(BrokenRepo))
        .enable_ticker(false)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();

    handle.execute(Operation::StartGame).await.expect("start");
    handle
        .execute(Operation::CreatePet {
            name: "Rex".into(),
            kind: PetKind::Cat,
            color: PetColor::Blue,
        })
        .await
        .expect("adopt");
    handle.perform(CareAction::Feed).await.expect("feed");

    let state = handle.query_state().await.unwrap();
    assert!(state.is_active());
    assert_eq!(state.pet.experience, 5);
}
