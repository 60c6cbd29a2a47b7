// Reconstruction core: prompt → completion → parse → query → search → report.
// All LLM calls go through llm_client, all lookups through search_client.

pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod query;
pub mod report;
