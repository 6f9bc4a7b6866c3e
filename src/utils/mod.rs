pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{decode_page_name, is_absolute_http, resolve_against_origin};
