// src/models/mod.rs

pub mod answer_key;
pub mod submission;
