#![cfg(test)]

//! Test bootstrap: logging initialization for unit tests.
