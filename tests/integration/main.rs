//! Integration tests for flowdedup.

mod pipeline_test;
