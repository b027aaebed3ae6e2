//! Plain-text rendering of the counter list

use tally_store::AppState;

const SHORT_ID_LEN: usize = 8;

/// Render counters one per line, prefixed with their 1-based position
pub fn render(state: &AppState, show_ids: bool) -> String {
    if state.is_empty() {
        return "(no counters)\n".to_string();
    }

    state
        .counters
        .iter()
        .enumerate()
        .map(|(index, counter)| {
            let id = counter.id.as_str();
            let id = if show_ids {
                id
            } else {
                id.get(..SHORT_ID_LEN).unwrap_or(id)
            };
            format!("#{:<3} {:>6}  {}\n", index + 1, counter.count, id)
        })
        .collect()
}
