mod json_tests;
mod page_tests;
mod reload_tests;
