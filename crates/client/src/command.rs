//! Parsing of REPL input lines.

use anyhow::{Result, anyhow, bail};

use pet_content::ItemCategory;
use pet_core::{CareAction, PetColor, PetKind};

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Adopt {
        name: String,
        kind: PetKind,
        color: PetColor,
    },
    Care(CareAction),
    Say(String),
    Shop(Option<ItemCategory>),
    Buy(String),
    Status,
    Chat,
    Help,
    Quit,
}

impl Command {
    /// Parses a line; blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        let Some((word, rest)) = split_word(line) else {
            return Ok(None);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "start" => Self::Start,
            "adopt" => parse_adopt(rest)?,
            "feed" => Self::Care(CareAction::Feed),
            "play" => Self::Care(CareAction::Play),
            "clean" => Self::Care(CareAction::Clean),
            "rest" => Self::Care(CareAction::Rest),
            "say" => {
                if rest.is_empty() {
                    bail!("usage: say <text>");
                }
                Self::Say(rest.to_string())
            }
            "shop" => match rest {
                "" | "all" => Self::Shop(None),
                category => Self::Shop(Some(
                    category
                        .parse()
                        .map_err(|_| anyhow!("unknown shop category {category:?}"))?,
                )),
            },
            "buy" => {
                if rest.is_empty() {
                    bail!("usage: buy <item-id>");
                }
                Self::Buy(rest.to_string())
            }
            "status" | "stats" => Self::Status,
            "chat" => Self::Chat,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?} (try `help`)"),
        };

        Ok(Some(command))
    }
}

fn split_word(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    })
}

fn parse_adopt(args: &str) -> Result<Command> {
    let mut parts = args.split_whitespace();
    let name = parts
        .next()
        .ok_or_else(|| anyhow!("usage: adopt <name> [kind] [color]"))?
        .to_string();
    let kind = match parts.next() {
        Some(kind) => kind
            .parse()
            .map_err(|_| anyhow!("unknown pet kind {kind:?}"))?,
        None => PetKind::default(),
    };
    let color = match parts.next() {
        Some(color) => color
            .parse()
            .map_err(|_| anyhow!("unknown color {color:?}"))?,
        None => PetColor::default(),
    };
    Ok(Command::Adopt { name, kind, color })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn parses_adopt_with_defaults() {
        assert_eq!(
            Command::parse("adopt Rex Dog red").unwrap(),
            Some(Command::Adopt {
                name: "Rex".into(),
                kind: PetKind::Dog,
                color: PetColor::Red
            })
        );
        assert_eq!(
            Command::parse("adopt Mochi").unwrap(),
            Some(Command::Adopt {
                name: "Mochi".into(),
                kind: PetKind::Cat,
                color: PetColor::Blue
            })
        );
        assert!(Command::parse("adopt").is_err());
        assert!(Command::parse("adopt Rex unicorn").is_err());
    }

    #[test]
    fn parses_care_and_chat() {
        assert_eq!(
            Command::parse("FEED").unwrap(),
            Some(Command::Care(CareAction::Feed))
        );
        assert_eq!(
            Command::parse("say  hello there ").unwrap(),
            Some(Command::Say("hello there".into()))
        );
        assert!(Command::parse("say").is_err());
    }

    #[test]
    fn parses_shop_filters() {
        assert_eq!(Command::parse("shop").unwrap(), Some(Command::Shop(None)));
        assert_eq!(
            Command::parse("shop clothing").unwrap(),
            Some(Command::Shop(Some(ItemCategory::Clothing)))
        );
        assert!(Command::parse("shop weapons").is_err());
        assert_eq!(
            Command::parse("buy lucky-charm").unwrap(),
            Some(Command::Buy("lucky-charm".into()))
        );
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(Command::parse("dance").is_err());
    }
}
