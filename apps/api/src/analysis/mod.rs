// Resume analysis: prompt templates, the dispatcher that runs one analysis
// per request, and its HTTP handlers.
// All generation calls go through llm_client, never to Gemini directly.

pub mod dispatcher;
pub mod handlers;
pub mod mode;
pub mod prompts;
pub mod template;
