
mod config_tests;
mod policy_tests;
mod property_tests;
