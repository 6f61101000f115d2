pub mod intro;

pub use intro::intro_page;
