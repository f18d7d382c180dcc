// Roadmap: form/result controller, Gemini-backed generator, page views.
// All LLM calls go through llm_client — no direct model API calls here.

pub mod controller;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod views;
