//! Departure selection: turns a bag of sensor readings and a slot mapping
//! into a deterministically ordered departure list.

use crate::store::StateStore;
use linien_card_types::{CardConfig, Departure, Slot};
use log::debug;

/// Best-effort integer parse of a sensor state value.
///
/// Mirrors the lenient host-side conversion: leading whitespace and an
/// optional sign are accepted, parsing stops at the first non-digit, and
/// anything unparseable yields `0` ("now"). A genuine zero is therefore
/// indistinguishable from garbage; kept that way for compatibility with the
/// sensors feeding the card.
pub fn parse_minutes(raw: &str) -> i32 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits[..end].parse::<i32>() {
        Ok(minutes) if negative => -minutes,
        Ok(minutes) => minutes,
        Err(_) => 0,
    }
}

/// Build the departure for one slot, or `None` when the slot is silently
/// omitted: sensor missing, not available, or without a usable `line`.
pub fn departure_for_slot<S: StateStore + ?Sized>(
    store: &S,
    config: &CardConfig,
    slot: Slot,
) -> Option<Departure> {
    let entity_id = config.sensor_for_slot(slot);

    let reading = match store.reading(&entity_id) {
        Some(reading) => reading,
        None => {
            debug!("slot {slot}: no reading for {entity_id}");
            return None;
        }
    };

    if !reading.state.is_available() {
        debug!("slot {slot}: {entity_id} is not available");
        return None;
    }

    let line = match reading.line() {
        Some(line) => line,
        None => {
            debug!("slot {slot}: {entity_id} has no line attribute");
            return None;
        }
    };

    Some(Departure {
        line: line.to_string(),
        destination: reading.destination().to_string(),
        minutes_until: parse_minutes(reading.state.value().unwrap_or_default()),
        departure_time: reading.departure_time().to_string(),
        is_delayed: reading.is_delayed(),
        is_scheduled: reading.is_scheduled(),
        source_slot: slot,
    })
}

/// Collect the departures for all seven slots and sort them ascending by
/// minutes until departure.
///
/// The sort is stable, so departures with equal times keep their slot
/// order.
pub fn collect_departures<S: StateStore + ?Sized>(
    store: &S,
    config: &CardConfig,
) -> Vec<Departure> {
    let mut departures: Vec<Departure> = Slot::ALL
        .iter()
        .filter_map(|&slot| departure_for_slot(store, config, slot))
        .collect();
    departures.sort_by_key(|departure| departure.minutes_until);
    departures
}
