pub mod file_pipeline;
