//! Integration tests for trimr

mod helpers;

mod cli_test;
mod clock_test;
