pub mod helpers;
pub mod mock_transport;
pub mod recording_sink;

pub use helpers::*;
pub use mock_transport::MockTransport;
pub use recording_sink::RecordingSink;
