/// Unit-level tests against the public library API
mod basic_tests;
mod toggle_properties;
