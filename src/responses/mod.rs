pub mod assets;
pub mod errors;
pub mod html;

pub use errors::{html_error_response, ResultResp};

pub use assets::static_asset;
pub use html::{html_response_with_status, see_other};
