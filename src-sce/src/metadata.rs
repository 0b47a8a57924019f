//! Tests for metadata-driven optimization of the benchmark catalog
