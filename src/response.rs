// Response lines: `TAG|field|field...`, list payloads as `;`-terminated records of `,`-separated fields

use std::fmt;

use crate::{
    booking_ledger::{BookingId, BookingRecord},
    room_catalog::{Room, RoomNumber},
    waiting_queue::WaitingEntry,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Booked {
        room_number: RoomNumber,
        guest_name: String,
        booking_id: BookingId,
    },
    CheckedOut {
        room_number: RoomNumber,
        guest_name: String,
    },
    Waitlisted {
        name: String,
    },
    Restarted,
    Rooms(Vec<Room>),
    Available(Vec<Room>),
    Found(Room),
    Waiting(Vec<WaitingEntry>),
    History(Vec<BookingRecord>),
    Empty(String),
    Error(String),
}

impl Response {
    pub fn error(err: impl fmt::Display) -> Self {
        Response::Error(err.to_string())
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Response::Booked { .. }
            | Response::CheckedOut { .. }
            | Response::Waitlisted { .. }
            | Response::Restarted => "SUCCESS",
            Response::Rooms(_) => "ROOMS",
            Response::Available(_) => "AVAILABLE",
            Response::Found(_) => "FOUND",
            Response::Waiting(_) => "WAITING",
            Response::History(_) => "HISTORY",
            Response::Empty(_) => "EMPTY",
            Response::Error(_) => "ERROR",
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|", self.tag())?;

        match self {
            Response::Booked {
                room_number,
                guest_name,
                booking_id,
            } => write!(
                f,
                "Room {room_number} booked successfully for {guest_name}|Booking ID: {booking_id}"
            ),
            Response::CheckedOut {
                room_number,
                guest_name,
            } => write!(
                f,
                "Room {room_number} checked out successfully|Guest: {guest_name}"
            ),
            Response::Waitlisted { name } => write!(f, "Added {name} to waiting list"),
            Response::Restarted => f.write_str("Hotel system restarted"),
            Response::Rooms(rooms) => rooms.iter().try_for_each(|room| {
                write!(
                    f,
                    "{},{},{},{},{};",
                    room.number(),
                    room.room_type,
                    room.price,
                    room.status(),
                    room.guest_name().unwrap_or_default()
                )
            }),
            Response::Available(rooms) => rooms.iter().try_for_each(|room| {
                write!(f, "{},{},{};", room.number(), room.room_type, room.price)
            }),
            Response::Found(room) => write!(
                f,
                "{},{},{},{},{},{}",
                room.number(),
                room.room_type,
                room.price,
                room.status(),
                room.guest_name().unwrap_or_default(),
                room.check_in_date().unwrap_or_default()
            ),
            Response::Waiting(entries) => entries.iter().try_for_each(|entry| {
                write!(f, "{},{},{};", entry.name, entry.room_type, entry.date)
            }),
            Response::History(records) => records.iter().try_for_each(|record| {
                write!(
                    f,
                    "{},{},{},{};",
                    record.booking_id, record.room_number, record.guest_name, record.check_in_date
                )
            }),
            Response::Empty(message) | Response::Error(message) => f.write_str(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room_catalog::{Occupancy, RoomType};

    fn booked(number: RoomNumber, room_type: RoomType, price: u32, guest: &str) -> Room {
        let mut room = Room::new(number, room_type, price);
        room.occupancy = Some(Occupancy {
            guest_name: guest.to_string(),
            check_in_date: "2024-01-01".to_string(),
        });
        room
    }

    #[test]
    fn test_rooms_line() {
        let response = Response::Rooms(vec![
            Room::new(101, RoomType::Single, 1000),
            booked(201, RoomType::Double, 2000, "John"),
        ]);
        assert_eq!(
            response.to_string(),
            "ROOMS|101,Single,1000,Available,;201,Double,2000,Booked,John;"
        );
    }

    #[test]
    fn test_found_line_for_vacant_and_booked_room() {
        assert_eq!(
            Response::Found(Room::new(101, RoomType::Single, 1000)).to_string(),
            "FOUND|101,Single,1000,Available,,"
        );
        assert_eq!(
            Response::Found(booked(301, RoomType::Suite, 5000, "Ann")).to_string(),
            "FOUND|301,Suite,5000,Booked,Ann,2024-01-01"
        );
    }

    #[test]
    fn test_success_lines() {
        let booked = Response::Booked {
            room_number: 101,
            guest_name: "Alice".to_string(),
            booking_id: 1,
        };
        assert_eq!(
            booked.to_string(),
            "SUCCESS|Room 101 booked successfully for Alice|Booking ID: 1"
        );

        let checked_out = Response::CheckedOut {
            room_number: 101,
            guest_name: "Alice".to_string(),
        };
        assert_eq!(
            checked_out.to_string(),
            "SUCCESS|Room 101 checked out successfully|Guest: Alice"
        );
    }

    #[test]
    fn test_list_lines() {
        let waiting = Response::Waiting(vec![WaitingEntry {
            name: "Zed".to_string(),
            room_type: "Suite".to_string(),
            date: "2024-06-01".to_string(),
        }]);
        assert_eq!(waiting.to_string(), "WAITING|Zed,Suite,2024-06-01;");

        let history = Response::History(vec![
            BookingRecord {
                booking_id: 2,
                room_number: 202,
                guest_name: "Bob".to_string(),
                check_in_date: "2024-01-02".to_string(),
            },
            BookingRecord {
                booking_id: 1,
                room_number: 101,
                guest_name: "Alice".to_string(),
                check_in_date: "2024-01-01".to_string(),
            },
        ]);
        assert_eq!(
            history.to_string(),
            "HISTORY|2,202,Bob,2024-01-02;1,101,Alice,2024-01-01;"
        );

        let available = Response::Available(vec![Room::new(301, RoomType::Suite, 5000)]);
        assert_eq!(available.to_string(), "AVAILABLE|301,Suite,5000;");
    }

    #[test]
    fn test_error_and_empty_lines() {
        assert_eq!(
            Response::error("Room not found").to_string(),
            "ERROR|Room not found"
        );
        assert_eq!(
            Response::Empty("No booking history".to_string()).to_string(),
            "EMPTY|No booking history"
        );
    }
}
