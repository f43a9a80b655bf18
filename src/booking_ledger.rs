// Booking ledger: append-only history of completed bookings, newest first

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::room_catalog::RoomNumber;

pub type BookingId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: BookingId,
    pub room_number: RoomNumber,
    pub guest_name: String,
    pub check_in_date: String,
}

#[derive(Debug)]
struct Node {
    record: BookingRecord,
    next: Option<Box<Node>>,
}

#[derive(Debug)]
pub struct BookingLedger {
    head: Option<Box<Node>>,
    next_id: BookingId,
    len: usize,
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self {
            head: None,
            next_id: 1,
            len: 0,
        }
    }
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // Records a booking at the head of the list and returns its freshly minted id
    pub fn append(
        &mut self,
        room_number: RoomNumber,
        guest_name: &str,
        check_in_date: &str,
    ) -> BookingId {
        let booking_id = self.next_id;
        self.next_id += 1;

        let node = Box::new(Node {
            record: BookingRecord {
                booking_id,
                room_number,
                guest_name: guest_name.to_string(),
                check_in_date: check_in_date.to_string(),
            },
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
        debug!(booking_id, room = room_number, "booking recorded");

        booking_id
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn list_all(&self) -> Vec<&BookingRecord> {
        self.iter().collect()
    }
}

// Drop iteratively so a long history cannot overflow the stack
impl Drop for BookingLedger {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a BookingRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.record
        })
    }
}
