pub mod status_json;

pub use status_json::{match_status, match_status_json, MatchStatusResponse, PlayerStatus};
