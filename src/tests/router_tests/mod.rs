mod error_tests;
mod navigation_tests;
mod page_tests;
