//! Frontend abstraction and the line-oriented terminal implementation.

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use pet_core::{EngineError, Operation, Sender};
use pet_runtime::{Event, RuntimeError, RuntimeHandle, StateEvent, Topic};

use crate::command::Command;
use crate::config::FrontendConfig;
use crate::render;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to the pet only through a [`RuntimeHandle`]; they never
/// own the runtime.
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend until the user quits.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}

/// What the REPL should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(Option<String>),
    Quit,
}

/// Terminal frontend reading commands from stdin.
pub struct TerminalFrontend {
    config: FrontendConfig,
}

impl TerminalFrontend {
    pub fn new(config: FrontendConfig) -> Self {
        Self { config }
    }

    /// Executes one command and returns the text to print.
    pub async fn dispatch(&self, handle: &RuntimeHandle, command: Command) -> Result<Flow> {
        let output = match command {
            Command::Start => {
                handle.execute(Operation::StartGame).await?;
                Some(render::status(&handle.query_state().await?))
            }
            Command::Adopt { name, kind, color } => {
                handle
                    .execute(Operation::CreatePet { name, kind, color })
                    .await?;
                let state = handle.query_state().await?;
                Some(format!(
                    "Say hello to {}, your new {}!\n{}",
                    state.pet.name,
                    state.pet.kind,
                    render::status(&state)
                ))
            }
            // Confirmations arrive as notifications.
            Command::Care(action) => {
                handle.perform(action).await?;
                None
            }
            Command::Say(text) => {
                handle.send_chat(text).await?;
                None
            }
            Command::Buy(item_id) => {
                handle.purchase(item_id).await?;
                None
            }
            Command::Shop(category) => {
                let coins = handle.query_state().await?.pet.coins;
                Some(render::shop(handle.catalog(), category, coins))
            }
            Command::Status => Some(render::status(&handle.query_state().await?)),
            Command::Chat => {
                let pet_name = handle.query_state().await?.pet.name;
                let messages = handle.recent_messages(self.config.message_capacity).await?;
                Some(render::transcript(&messages, &pet_name))
            }
            Command::Help => Some(render::help()),
            Command::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(output))
    }

    /// Prints notifications and the pet's chat replies as they arrive.
    fn spawn_printer(handle: &RuntimeHandle) -> JoinHandle<()> {
        let mut notifications = handle.subscribe(Topic::Notification);
        let mut states = handle.subscribe(Topic::State);

        tokio::spawn(async move {
            loop {
                let line = tokio::select! {
                    event = notifications.recv() => match event {
                        Ok(Event::Notification(notification)) => {
                            Some(render::notification(&notification))
                        }
                        Ok(_) => None,
                        Err(RecvError::Lagged(skipped)) => {
                            debug!(skipped, "Notification printer lagged");
                            None
                        }
                        Err(RecvError::Closed) => break,
                    },
                    event = states.recv() => match event {
                        Ok(Event::State(StateEvent::MessageAdded { message }))
                            if message.sender == Sender::Pet =>
                        {
                            Some(format!("> {}", message.text))
                        }
                        Ok(_) | Err(RecvError::Lagged(_)) => None,
                        Err(RecvError::Closed) => break,
                    },
                };
                if let Some(line) = line {
                    println!("{line}");
                }
            }
        })
    }
}

/// Error text for the REPL, or `None` when a notification already said it.
fn describe_error(error: &anyhow::Error) -> Option<String> {
    match error.downcast_ref::<RuntimeError>() {
        Some(RuntimeError::Engine(EngineError::InsufficientFunds { .. })) => None,
        Some(RuntimeError::NotActive { .. }) => {
            Some("You need to adopt a pet first (`start`, then `adopt`).".to_string())
        }
        _ => Some(format!("error: {error}")),
    }
}

#[async_trait]
impl Frontend for TerminalFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        let printer = Self::spawn_printer(&handle);

        println!("{}", render::status(&handle.query_state().await?));
        println!("Type `help` for commands.");

        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            stdout.write_all(b"pet> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let flow = match Command::parse(&line) {
                Ok(Some(command)) => {
                    debug!(?command, "Dispatching command");
                    self.dispatch(&handle, command).await
                }
                Ok(None) => continue,
                Err(error) => Err(error),
            };

            match flow {
                Ok(Flow::Continue(Some(output))) => println!("{output}"),
                Ok(Flow::Continue(None)) => {}
                Ok(Flow::Quit) => break,
                Err(error) => {
                    if let Some(text) = describe_error(&error) {
                        println!("{text}");
                    }
                }
            }
        }

        printer.abort();
        info!("Terminal frontend exited");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pet_core::{CareAction, PetColor, PetKind};
    use pet_runtime::Runtime;

    async fn setup() -> (Runtime, TerminalFrontend) {
        let runtime = Runtime::builder()
            .enable_ticker(false)
            .build()
            .await
            .expect("runtime should build");
        (runtime, TerminalFrontend::new(FrontendConfig::default()))
    }

    async fn run(frontend: &TerminalFrontend, handle: &RuntimeHandle, line: &str) -> Result<Flow> {
        let command = Command::parse(line)?.expect("non-empty command");
        frontend.dispatch(handle, command).await
    }

    #[tokio::test]
    async fn start_adopt_and_feed() {
        let (runtime, frontend) = setup().await;
        let handle = runtime.handle();

        let Flow::Continue(Some(text)) = run(&frontend, &handle, "start").await.unwrap() else {
            panic!("start should print the adoption prompt");
        };
        assert!(text.contains("adopt"));

        let Flow::Continue(Some(text)) = run(&frontend, &handle, "adopt Rex dog red").await.unwrap()
        else {
            panic!("adopt should print the pet");
        };
        assert!(text.starts_with("Say hello to Rex, your new dog!"));

        assert_eq!(
            run(&frontend, &handle, "feed").await.unwrap(),
            Flow::Continue(None)
        );
        let state = handle.query_state().await.unwrap();
        assert_eq!(state.pet.kind, PetKind::Dog);
        assert_eq!(state.pet.color, PetColor::Red);
        assert_eq!(state.pet.experience, CareAction::Feed.experience());
    }

    #[tokio::test]
    async fn care_before_adoption_explains() {
        let (runtime, frontend) = setup().await;
        let error = run(&frontend, &runtime.handle(), "play").await.unwrap_err();
        assert_eq!(
            describe_error(&error).as_deref(),
            Some("You need to adopt a pet first (`start`, then `adopt`).")
        );
    }

    #[tokio::test]
    async fn insufficient_funds_is_left_to_the_notification() {
        let (runtime, frontend) = setup().await;
        let handle = runtime.handle();
        run(&frontend, &handle, "start").await.unwrap();
        run(&frontend, &handle, "adopt Rex").await.unwrap();

        run(&frontend, &handle, "buy stylish-hat").await.unwrap();

        let error = run(&frontend, &handle, "buy cozy-sweater").await.unwrap_err();
        assert_eq!(describe_error(&error), None);
    }

    #[tokio::test]
    async fn quit_stops_the_loop() {
        let (runtime, frontend) = setup().await;
        assert_eq!(
            run(&frontend, &runtime.handle(), "quit").await.unwrap(),
            Flow::Quit
        );
    }
}
