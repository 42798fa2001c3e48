//! Evaldesk - LLM-Routed Technology Evaluation Assistant

pub mod core;
pub mod llm;
pub mod route;
