//! Tests for the testbench layer.
