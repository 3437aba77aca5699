//! Plain-text rendering of the pet, the shop and the chat log.

use std::fmt::Write;

use strum::IntoEnumIterator;

use pet_content::{ItemCategory, ItemEffect, ShopCatalog, ShopItem};
use pet_core::{Message, Notification, PetColor, PetKind, PetState, Sender, SessionPhase, StatKind};

const BAR_WIDTH: usize = 10;

/// Fixed-width gauge for a 0..=100 stat.
pub fn bar(value: u8) -> String {
    let filled = (usize::from(value.min(100)) * BAR_WIDTH).div_ceil(100);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn status(state: &PetState) -> String {
    match state.phase() {
        SessionPhase::NotStarted => {
            return "Welcome to the pet center! Type `start` to begin.".to_string();
        }
        SessionPhase::Adopting => {
            return "Choose your pet: `adopt <name> [kind] [color]` (see `help`).".to_string();
        }
        SessionPhase::Active => {}
    }

    let pet = &state.pet;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} the {} {} - level {} ({}/{} xp)",
        pet.name,
        pet.color,
        pet.kind,
        pet.level,
        pet.experience,
        pet.experience_threshold()
    );
    let _ = writeln!(
        out,
        "Mood: {}  Coins: {}  Day {} (age {})",
        pet.mood(),
        pet.coins,
        pet.days,
        pet.age()
    );
    for stat in StatKind::ALL {
        let value = pet.vitals.get(stat);
        let flag = if pet.vitals.is_low(stat) { " !" } else { "" };
        let _ = writeln!(out, "  {:<12} {} {:>3}{flag}", stat.as_ref(), bar(value), value);
    }
    if pet.inventory.is_empty() {
        out.push_str("Inventory: (empty)");
    } else {
        let _ = write!(out, "Inventory: {}", pet.inventory.join(", "));
    }
    out
}

fn effects(item: &ShopItem) -> String {
    item.effects
        .iter()
        .map(|effect| match effect {
            ItemEffect::Stat { stat, amount } => format!("{amount:+} {stat}"),
            ItemEffect::Coins { amount } => format!("+{amount} coins"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn shop(catalog: &ShopCatalog, category: Option<ItemCategory>, coins: u32) -> String {
    let items = catalog.by_category(category);
    if items.is_empty() {
        return "Nothing for sale here.".to_string();
    }

    let mut out = format!("You have {coins} coins.\n");
    for item in items {
        let marker = if item.price <= coins { ' ' } else { 'x' };
        let _ = writeln!(
            out,
            "{marker} {:<16} {:>3}c  [{}] {} ({})",
            item.id,
            item.price,
            item.category,
            item.description,
            effects(item)
        );
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn message(message: &Message, pet_name: &str) -> String {
    let who = match message.sender {
        Sender::User => "You",
        Sender::Pet => pet_name,
    };
    format!("{who}: {}", message.text)
}

pub fn transcript(messages: &[Message], pet_name: &str) -> String {
    if messages.is_empty() {
        return format!("No messages yet. Say hi to {pet_name} with `say <text>`.");
    }
    messages
        .iter()
        .map(|m| message(m, pet_name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn notification(notification: &Notification) -> String {
    let prefix = if notification.is_warning() { "(!)" } else { "(*)" };
    format!("{prefix} {}", notification.message())
}

pub fn help() -> String {
    let kinds: Vec<String> = PetKind::iter().map(|k| k.to_string()).collect();
    let colors: Vec<String> = PetColor::iter().map(|c| c.to_string()).collect();
    format!(
        "Commands:\n  \
         start                          leave the welcome screen\n  \
         adopt <name> [kind] [color]    adopt a pet\n  \
         feed | play | clean | rest     care for your pet\n  \
         say <text>                     talk to your pet\n  \
         shop [category]                list items (food, toy, clothing, special)\n  \
         buy <item-id>                  buy an item\n  \
         status                         show your pet\n  \
         chat                           show recent messages\n  \
         help                           show this help\n  \
         quit                           save and exit\n\
         Kinds: {}\nColors: {}",
        kinds.join(", "),
        colors.join(", ")
    )
}
