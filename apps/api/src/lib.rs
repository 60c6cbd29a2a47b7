//! AI Archeologist: reconstructs obscure or slang-laden text fragments into
//! modern English with a language model, then gathers contextual links from a
//! web search.
//!
//! Both delivery surfaces, the web form (`archeologist`) and the console
//! runner (`archeologist-report`), go through [`reconstruction::pipeline::Pipeline`].

pub mod batch;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod logging;
pub mod models;
pub mod reconstruction;
pub mod render;
pub mod routes;
pub mod search_client;
pub mod state;
