pub mod error;
pub mod frame_history_queue;
pub mod message_kind;
pub mod message_queues;
pub mod message_record;
