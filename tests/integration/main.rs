//! Integration test binary.

mod helpers;

mod bindings_test;
mod repl_test;
