#![allow(warnings)]

pub mod common;
pub mod mcu;
