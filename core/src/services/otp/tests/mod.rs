
mod sweeper_tests;
mod verifier_tests;
