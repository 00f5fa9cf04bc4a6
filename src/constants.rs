pub const CONFIG_DIR: &str = ".config/tripsearch";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_BASE_URL: &str = "http://localhost:4001";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DESCRIPTION_MAX_LEN: usize = 100;
pub const THUMBNAIL_SLOTS: usize = 3;

pub const PAGE_TITLE: &str = "Where to go?";
pub const SEARCH_LABEL: &str = "Search attractions";
pub const SEARCH_PLACEHOLDER: &str = "Find a place and let's go ...";
pub const LOADING: &str = "Loading...";
pub const NO_TRIPS_FOUND: &str = "No attractions found";
pub const NO_IMAGE: &str = "no image";
pub const READ_MORE: &str = "read more";
pub const LINK_COPIED: &str = "Link copied";
pub const BROWSE_HELP: &str = "Type to search. Commands: :tag <name>, :copy <n>, :open <n>, :clear, :wait, :quit (:q)";

/// Standard message
#[derive(Debug)]
pub enum Message {
    ConfigSaved(String),
    UnknownCommand(String),
    Failed(String),
}

impl Message {
    pub fn to_formatted_string(&self) -> String {
        match self {
            Message::ConfigSaved(path) => format!("Config saved: {}", path),
            Message::UnknownCommand(command) => {
                format!("Unknown command '{}'. {}", command, BROWSE_HELP)
            }
            Message::Failed(error) => format!("Failed: {}", error),
        }
    }
}
