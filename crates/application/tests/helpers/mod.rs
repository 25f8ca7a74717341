mod mock_record_sink;

pub use mock_record_sink::MockRecordSink;
