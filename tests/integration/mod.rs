/// Integration tests covering persistence and the dashboard server
mod basic_integration;
mod persistence_failures;
