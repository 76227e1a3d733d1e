pub mod config;
pub mod errors;
pub mod handlers;
pub mod llm;
pub mod models;
pub mod pptx;
pub mod storage;
pub mod templates_structs;
pub mod validate;
