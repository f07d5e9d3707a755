pub mod file_event_source;
pub mod http_event_source;
