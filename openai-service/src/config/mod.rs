pub mod default_config;
pub mod openai_config;
