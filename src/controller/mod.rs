//! HTTP endpoints
//!
//! Controllers own an explicit route table. Each handler makes at most one
//! repository call and hands the result back unchanged.

mod order_controller;

pub use order_controller::{BASE_PATH, HELLO_MESSAGE, OrderController};
