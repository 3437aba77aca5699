//! Multi-step flows built from engine operations.
//!
//! Each flow runs inside a single worker command, so it is applied to the
//! record as one unit.

use pet_content::{ItemEffect, ShopCatalog};
use pet_core::{
    CareAction, EngineError, Message, Notification, PetEngine, PetFields, StatKind,
};

use crate::chat::{REPLY_ENERGY_COST, REPLY_HAPPINESS_BONUS};

/// Stats lowered by each decay tick.
pub(crate) const DECAYING_STATS: [StatKind; 3] =
    [StatKind::Hunger, StatKind::Happiness, StatKind::Cleanliness];

/// Care button press: stat change, experience with level check, confirmation.
pub(crate) fn care(engine: &mut PetEngine<'_>, action: CareAction) -> Result<PetFields, EngineError> {
    let amount = action.amount();
    let mut fields = match action {
        CareAction::Feed => engine.feed(amount),
        CareAction::Play => engine.play(amount),
        CareAction::Clean => engine.clean(amount),
        CareAction::Rest => engine.rest(amount),
    };
    fields |= engine.gain_experience(action.experience());

    let pet_name = engine.state().pet.name.clone();
    engine.notify(Notification::CareCompleted { pet_name, action });
    Ok(fields)
}

/// Buys `item_id`: pays first, then applies effects and stores the item.
///
/// Nothing but the refusal notification happens when the balance is short.
pub(crate) fn purchase(
    engine: &mut PetEngine<'_>,
    catalog: &ShopCatalog,
    item_id: &str,
) -> Result<PetFields, EngineError> {
    let item = catalog.get(item_id).ok_or_else(|| EngineError::UnknownItem {
        item_id: item_id.to_string(),
    })?;

    let mut fields = engine.decrease_coins(item.price)?;
    for effect in &item.effects {
        fields |= match *effect {
            ItemEffect::Stat { stat, amount } => engine.increase(stat, amount),
            ItemEffect::Coins { amount } => engine.increase_coins(amount),
        };
    }
    fields |= engine.add_to_inventory(item.id.clone());

    let pet_name = engine.state().pet.name.clone();
    engine.notify(Notification::Purchased {
        pet_name,
        item_id: item.id.clone(),
    });
    Ok(fields)
}

/// Appends the pet's reply; talking cheers the pet up and tires it a little.
pub(crate) fn pet_reply(engine: &mut PetEngine<'_>, message: Message) -> PetFields {
    let mut fields = engine.add_message(message);
    fields |= engine.increase(StatKind::Happiness, REPLY_HAPPINESS_BONUS);
    fields |= engine.decrease(StatKind::Energy, REPLY_ENERGY_COST);
    fields
}

/// One decay tick.
pub(crate) fn decay(engine: &mut PetEngine<'_>, amount: i32) -> PetFields {
    DECAYING_STATS
        .into_iter()
        .fold(PetFields::empty(), |fields, stat| {
            fields | engine.decrease(stat, amount)
        })
}
