//! Engine scenario tests over the reference dataset

mod engine_test;
