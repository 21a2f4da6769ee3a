//! kaipop-rs
//! =========
//!
//! Workspace facade over [`kaipop_core`]. The library lives in
//! `crates/kaipop-core`; this package hosts the `kai_report` demo.
//!
//! ```text
//! cargo run --example kai_report
//! RUST_LOG=kaipop_core=debug cargo run --example kai_report
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use kaipop_core::*;
