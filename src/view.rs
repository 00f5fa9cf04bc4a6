//! Text rendering of the search page.

pub mod card;
pub mod list;
pub mod search_box;

use crate::constants::{LOADING, PAGE_TITLE};
use crate::controller::SearchState;

/// Title, search box and either the loading line or the results
pub fn render_page(state: &SearchState) -> String {
    let body = if state.loading {
        LOADING.to_string()
    } else {
        list::render(&state.trips)
    };
    format!(
        "{PAGE_TITLE}\n{}\n\n{body}\n",
        search_box::render(&state.search_query)
    )
}
