mod detail;
mod list;

pub use self::{
    detail::{DetailOutcome, DetailState, DetailView, FetchToken},
    list::{ListOutcome, ListView, LoadState, LoadToken, SEARCH_SETTLE_MS},
};
