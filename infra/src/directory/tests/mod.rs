//! Unit tests for account directory module

mod factory_tests;
mod supabase_tests;
