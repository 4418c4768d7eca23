//! Unit tests for SMS module

mod mock_tests;
