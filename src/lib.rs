// In-memory hotel room inventory driven by a line-oriented command protocol

pub mod booking_ledger;
pub mod command;
pub mod command_loop;
pub mod config;
pub mod hotel;
pub mod response;
pub mod room_catalog;
pub mod server;
pub mod waiting_queue;

// Re-export key types for convenience
pub use booking_ledger::{BookingId, BookingLedger, BookingRecord};
pub use command::{Command, CommandError};
pub use command_loop::{evaluate, run, Step};
pub use config::{HotelConfig, RoomBlock};
pub use hotel::Hotel;
pub use response::Response;
pub use room_catalog::{CatalogError, Room, RoomCatalog, RoomNumber, RoomType};
pub use waiting_queue::{WaitingEntry, WaitingQueue};
