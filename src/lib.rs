pub mod catalog;
pub mod cli;
pub mod config;
pub mod matching;
pub mod normalizer;
pub mod recipe;
pub mod recipe_loader;
