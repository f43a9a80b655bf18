// Hotel context: owns the catalog, the ledger and the waiting list,
// and is the only place where a command touches more than one of them.

use tracing::info;

use crate::{
    booking_ledger::{BookingId, BookingLedger},
    command::Command,
    config::HotelConfig,
    response::Response,
    room_catalog::{CatalogError, RoomCatalog, RoomNumber, RoomType},
    waiting_queue::WaitingQueue,
};

#[derive(Debug)]
pub struct Hotel {
    catalog: RoomCatalog,
    ledger: BookingLedger,
    waiting: WaitingQueue,
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new(&HotelConfig::default())
    }
}

impl Hotel {
    pub fn new(config: &HotelConfig) -> Self {
        let mut catalog = RoomCatalog::new();
        for block in &config.room_blocks {
            for number in block.numbers() {
                catalog.insert(number, block.room_type, block.price);
            }
        }
        info!(rooms = catalog.len(), "hotel initialized");

        Self {
            catalog,
            ledger: BookingLedger::new(),
            waiting: WaitingQueue::new(),
        }
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    pub fn waiting(&self) -> &WaitingQueue {
        &self.waiting
    }

    // Books a room and records it in the history. A failed booking mints no id.
    pub fn book(
        &mut self,
        room_number: RoomNumber,
        guest_name: &str,
        check_in_date: &str,
    ) -> Result<BookingId, CatalogError> {
        self.catalog.book(room_number, guest_name, check_in_date)?;
        Ok(self.ledger.append(room_number, guest_name, check_in_date))
    }

    pub fn checkout(&mut self, room_number: RoomNumber) -> Result<String, CatalogError> {
        self.catalog.checkout(room_number)
    }

    // Applies one command. Exit carries no response and is handled by the caller.
    pub fn execute(&mut self, command: Command) -> Option<Response> {
        let response = match command {
            Command::Book {
                room_number,
                guest_name,
                check_in_date,
            } => match self.book(room_number, &guest_name, &check_in_date) {
                Ok(booking_id) => Response::Booked {
                    room_number,
                    guest_name,
                    booking_id,
                },
                Err(e) => Response::error(e),
            },
            Command::Checkout { room_number } => match self.checkout(room_number) {
                Ok(guest_name) => Response::CheckedOut {
                    room_number,
                    guest_name,
                },
                Err(e) => Response::error(e),
            },
            Command::DisplayAll => {
                if self.catalog.is_empty() {
                    Response::Empty("No rooms available".to_string())
                } else {
                    Response::Rooms(self.catalog.list_all().into_iter().cloned().collect())
                }
            }
            Command::Available { room_type } => {
                let rooms: Vec<_> = match room_type.parse::<RoomType>() {
                    Ok(parsed) => self
                        .catalog
                        .list_available_by_type(parsed)
                        .into_iter()
                        .cloned()
                        .collect(),
                    Err(_) => Vec::new(),
                };

                if rooms.is_empty() {
                    Response::Empty(format!("No {room_type} rooms available"))
                } else {
                    Response::Available(rooms)
                }
            }
            Command::Search { room_number } => match self.catalog.find(room_number) {
                Some(room) => Response::Found(room.clone()),
                None => Response::error("Room not found"),
            },
            Command::Waitlist {
                name,
                room_type,
                date,
            } => {
                self.waiting.enqueue(&name, &room_type, &date);
                Response::Waitlisted { name }
            }
            Command::ShowWait => {
                if self.waiting.is_empty() {
                    Response::Empty("No guests in waiting list".to_string())
                } else {
                    Response::Waiting(self.waiting.list_all().into_iter().cloned().collect())
                }
            }
            Command::History => {
                if self.ledger.is_empty() {
                    Response::Empty("No booking history".to_string())
                } else {
                    Response::History(self.ledger.list_all().into_iter().cloned().collect())
                }
            }
            Command::Exit => return None,
        };

        Some(response)
    }
}
