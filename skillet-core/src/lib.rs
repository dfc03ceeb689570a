pub mod error;
pub mod extract;
pub mod generate;
pub mod llm;
pub mod prompts;
pub mod types;

pub use error::GenerateError;
pub use extract::extract_json_object;
pub use generate::generate_recipe;
pub use types::{GenerationMode, GenerationRequest, NutritionalInfo, Recipe};
