//! Shared configuration constants for the lexicon
//!
//! Default values and fixed tables used throughout the codebase so that
//! the pipeline, the client and the stores agree on the same literals.

/// Wiktionary action API endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://en.wiktionary.org/w/api.php";

/// Origin that site-relative links are resolved against
pub const DEFAULT_SITE_ORIGIN: &str = "https://en.wiktionary.org";

/// Language section extracted from multilingual entry pages
pub const DEFAULT_TARGET_LABEL: &str = "Latin";

/// Heading level of language sections (`<h2>Latin</h2>`)
pub const DEFAULT_SECTION_HEADING_LEVEL: u8 = 2;

/// Heading level that opens a new subsection (Etymology, Noun, ...)
pub const DEFAULT_SUBSECTION_HEADING_LEVEL: u8 = 3;

/// Search history capacity
///
/// Oldest entries are evicted from the front once the list grows past this.
pub const DEFAULT_HISTORY_CAPACITY: usize = 15;

/// Number of fetched page bodies kept in memory
pub const DEFAULT_PAGE_CACHE_CAPACITY: usize = 64;

/// Timeout for a single API request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Placeholder href for links whose navigation was replaced by an action
pub const NOOP_HREF: &str = "javascript:void(0)";

/// Storage key for the last submitted query
pub const LAST_QUERY_KEY: &str = "lastRequest";

/// Storage key for the bounded search history
pub const HISTORY_KEY: &str = "searchHistory";

/// Storage key for the favourites set
pub const FAVOURITES_KEY: &str = "favourites";

/// Message shown when there is nothing to display yet
pub const IDLE_MESSAGE: &str = "Use the search bar to find a word";

/// Heading of the transport failure panel
pub const REQUEST_ERROR_MESSAGE: &str = "There was an error with your request";

/// Class marking tables that list inflected forms
pub const INFLECTION_TABLE_CLASS: &str = "inflection-table";

/// Class of the horizontal-scroll wrapper placed around every table
pub const TABLE_SCROLL_CLASS: &str = "table-scroll";

/// Separator that replaces `<br>` inside inflection table cells
pub const CELL_LINE_SEPARATOR: &str = ", ";

/// Background colours used by Wiktionary declension tables and their replacements
///
/// `rgb(84, 158, 160)` is `#549EA0`, `rgb(64, 224, 208)` is `#40E0D0`.
pub const BACKGROUND_COLOR_REMAP: [((u8, u8, u8), &str); 2] =
    [((84, 158, 160), "#aaa"), ((64, 224, 208), "#ccc")];

/// User agent sent with API requests (Wikimedia asks clients to identify themselves)
pub const USER_AGENT: &str = concat!("latin-lexicon/", env!("CARGO_PKG_VERSION"));
