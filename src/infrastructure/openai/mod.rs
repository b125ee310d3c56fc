pub mod idea_generator;

pub use idea_generator::OpenAiIdeaGenerator;
