pub mod query_file;
pub mod tsv_sink;

pub use query_file::open_query_file;
pub use tsv_sink::TsvSink;
