pub mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use fetch_utils::fetch_html;
pub use http_client::create_http_client_with_timeout;
pub use urls::build_season_url;
