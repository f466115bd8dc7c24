use launchpad_core::{Address, Launchpad, LaunchpadEvent, ObjectId};

/// Sum of every position `owner` holds in `coin_id`
pub fn token_holdings(launchpad: &Launchpad, owner: &Address, coin_id: ObjectId) -> u64 {
    launchpad
        .positions_of(owner)
        .iter()
        .filter(|p| p.coin_id == coin_id)
        .map(|p| p.balance)
        .sum()
}

/// Sum of a coin's unminted reserve and circulating supply
pub fn token_accounting(launchpad: &Launchpad, coin_id: ObjectId) -> u64 {
    match launchpad.coin_info(coin_id) {
        Ok(info) => info.token_reserve + info.total_supply,
        Err(_) => 0, // Unknown coin
    }
}

pub fn event_kinds(events: &[LaunchpadEvent]) -> Vec<&'static str> {
    events.iter().map(LaunchpadEvent::kind).collect()
}
