pub mod http;


pub use http::AnalysisBackend;
