//! Boundary to the hosted language model
//!
//! - `CompletionProvider` - the one call the assistant makes
//! - `GeminiProvider` - Google Generative Language API implementation
//! - `ModelRouter` - picks a model by question complexity

mod gemini;
mod provider;
mod router;

pub use gemini::{GeminiProvider, DEFAULT_BASE_URL};
pub use provider::{CompletionProvider, CompletionRequest};
pub use router::{Complexity, ModelRouter, ModelRoutes};
