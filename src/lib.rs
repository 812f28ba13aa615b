//! TalentScout - Hiring Assistant
//!
//! This crate implements a guided dialogue that collects a candidate profile
//! through validated prompts and then generates technical interview questions
//! tailored to the candidate's declared tech stack.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
