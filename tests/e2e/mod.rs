mod listing;
mod setup;
