#![allow(dead_code)]

pub mod commands;
