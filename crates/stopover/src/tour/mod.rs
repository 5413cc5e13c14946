pub mod oracle;
pub mod sequencer;
pub mod tour_order;
