// Room catalog: binary search tree of rooms keyed by room number
// The tree never rebalances, its shape is purely a function of insertion order

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub type RoomNumber = i32;

// Error types for catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Room {0} does not exist")]
    NotFound(RoomNumber),

    #[error("Room {0} is already booked")]
    AlreadyBooked(RoomNumber),

    #[error("Room {0} is not booked")]
    NotBooked(RoomNumber),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown room type {0}")]
pub struct UnknownRoomType(pub String);

impl FromStr for RoomType {
    type Err = UnknownRoomType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Single" => Ok(RoomType::Single),
            "Double" => Ok(RoomType::Double),
            "Suite" => Ok(RoomType::Suite),
            other => Err(UnknownRoomType(other.to_string())),
        }
    }
}

// Guest currently holding a room. Present iff the room is booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub guest_name: String,
    pub check_in_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    pub room_type: RoomType,
    pub price: u32,
    pub occupancy: Option<Occupancy>,
}

impl Room {
    pub fn new(number: RoomNumber, room_type: RoomType, price: u32) -> Self {
        Self {
            number,
            room_type,
            price,
            occupancy: None,
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn is_booked(&self) -> bool {
        self.occupancy.is_some()
    }

    pub fn guest_name(&self) -> Option<&str> {
        self.occupancy.as_ref().map(|o| o.guest_name.as_str())
    }

    pub fn check_in_date(&self) -> Option<&str> {
        self.occupancy.as_ref().map(|o| o.check_in_date.as_str())
    }

    pub fn status(&self) -> &'static str {
        if self.is_booked() {
            "Booked"
        } else {
            "Available"
        }
    }
}

#[derive(Debug)]
struct Node {
    room: Room,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(room: Room) -> Self {
        Self {
            room,
            left: None,
            right: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct RoomCatalog {
    root: Option<Box<Node>>,
    size: usize,
}

impl RoomCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    // Inserts a vacant room. An existing room with the same number is left untouched.
    pub fn insert(&mut self, number: RoomNumber, room_type: RoomType, price: u32) {
        let room = Room::new(number, room_type, price);
        self.root = Self::insert_node(self.root.take(), room, &mut self.size);
    }

    fn insert_node(node: Option<Box<Node>>, room: Room, size: &mut usize) -> Option<Box<Node>> {
        match node {
            None => {
                *size += 1;
                Some(Box::new(Node::new(room)))
            }
            Some(mut n) => {
                match room.number.cmp(&n.room.number) {
                    Ordering::Less => n.left = Self::insert_node(n.left.take(), room, size),
                    Ordering::Greater => n.right = Self::insert_node(n.right.take(), room, size),
                    Ordering::Equal => {
                        debug!(room = room.number, "duplicate room number ignored");
                    }
                }
                Some(n)
            }
        }
    }

    pub fn find(&self, number: RoomNumber) -> Option<&Room> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match number.cmp(&node.room.number) {
                Ordering::Equal => return Some(&node.room),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    fn find_mut(&mut self, number: RoomNumber) -> Option<&mut Room> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match number.cmp(&node.room.number) {
                Ordering::Equal => return Some(&mut node.room),
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    pub fn book(
        &mut self,
        number: RoomNumber,
        guest_name: &str,
        check_in_date: &str,
    ) -> Result<(), CatalogError> {
        let room = self
            .find_mut(number)
            .ok_or(CatalogError::NotFound(number))?;

        if room.is_booked() {
            return Err(CatalogError::AlreadyBooked(number));
        }

        room.occupancy = Some(Occupancy {
            guest_name: guest_name.to_string(),
            check_in_date: check_in_date.to_string(),
        });
        debug!(room = number, guest = guest_name, "room booked");

        Ok(())
    }

    // Vacates a booked room and hands back the departing guest's name
    pub fn checkout(&mut self, number: RoomNumber) -> Result<String, CatalogError> {
        let room = self
            .find_mut(number)
            .ok_or(CatalogError::NotFound(number))?;

        let occupancy = room
            .occupancy
            .take()
            .ok_or(CatalogError::NotBooked(number))?;
        debug!(room = number, guest = %occupancy.guest_name, "room checked out");

        Ok(occupancy.guest_name)
    }

    pub fn list_all(&self) -> Vec<&Room> {
        let mut result = Vec::with_capacity(self.size);
        Self::in_order(&self.root, &|_: &Room| true, &mut result);
        result
    }

    pub fn list_available_by_type(&self, room_type: RoomType) -> Vec<&Room> {
        let mut result = Vec::new();
        let keep = |room: &Room| room.room_type == room_type && !room.is_booked();
        Self::in_order(&self.root, &keep, &mut result);
        result
    }

    fn in_order<'a, F>(node: &'a Option<Box<Node>>, keep: &F, result: &mut Vec<&'a Room>)
    where
        F: Fn(&Room) -> bool,
    {
        if let Some(n) = node {
            Self::in_order(&n.left, keep, result);
            if keep(&n.room) {
                result.push(&n.room);
            }
            Self::in_order(&n.right, keep, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_catalog() -> RoomCatalog {
        let mut catalog = RoomCatalog::new();
        for n in 101..=105 {
            catalog.insert(n, RoomType::Single, 1000);
        }
        for n in 201..=205 {
            catalog.insert(n, RoomType::Double, 2000);
        }
        for n in 301..=303 {
            catalog.insert(n, RoomType::Suite, 5000);
        }
        catalog
    }

    #[test]
    fn test_find_known_and_unknown_rooms() {
        let catalog = standard_catalog();

        for n in (101..=105).chain(201..=205).chain(301..=303) {
            let room = catalog.find(n).expect("room should exist");
            assert_eq!(room.number(), n);
        }

        for n in [0, -1, 100, 106, 200, 206, 304, 999] {
            assert!(catalog.find(n).is_none(), "room {n} should not exist");
        }
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut catalog = standard_catalog();
        catalog.book(102, "Alice", "2024-01-01").unwrap();

        catalog.insert(102, RoomType::Suite, 9999);

        assert_eq!(catalog.len(), 13);
        let room = catalog.find(102).unwrap();
        assert_eq!(room.room_type, RoomType::Single);
        assert_eq!(room.price, 1000);
        assert_eq!(room.guest_name(), Some("Alice"));
    }

    #[test]
    fn test_out_of_order_insert_keeps_in_order_listing() {
        let mut catalog = RoomCatalog::new();
        for n in [205, 101, 303, 102, 201] {
            catalog.insert(n, RoomType::Double, 2000);
        }

        let numbers: Vec<_> = catalog.list_all().iter().map(|r| r.number()).collect();
        assert_eq!(numbers, vec![101, 102, 201, 205, 303]);
        assert!(catalog.find(201).is_some());
    }

    #[test]
    fn test_book_and_checkout_transitions() {
        let mut catalog = standard_catalog();

        assert_eq!(catalog.book(201, "Bob", "2024-02-01"), Ok(()));
        let room = catalog.find(201).unwrap();
        assert!(room.is_booked());
        assert_eq!(room.check_in_date(), Some("2024-02-01"));

        // Second booking must fail and leave the first guest in place
        assert_eq!(
            catalog.book(201, "Carol", "2024-02-02"),
            Err(CatalogError::AlreadyBooked(201))
        );
        assert_eq!(catalog.find(201).unwrap().guest_name(), Some("Bob"));

        assert_eq!(catalog.checkout(201), Ok("Bob".to_string()));
        let room = catalog.find(201).unwrap();
        assert!(!room.is_booked());
        assert_eq!(room.guest_name(), None);
        assert_eq!(room.check_in_date(), None);

        assert_eq!(catalog.checkout(201), Err(CatalogError::NotBooked(201)));
    }

    #[test]
    fn test_missing_room_errors() {
        let mut catalog = standard_catalog();

        assert_eq!(
            catalog.book(999, "Alice", "2024-01-01"),
            Err(CatalogError::NotFound(999))
        );
        assert_eq!(catalog.checkout(999), Err(CatalogError::NotFound(999)));
        assert_eq!(
            CatalogError::NotFound(999).to_string(),
            "Room 999 does not exist"
        );
    }

    #[test]
    fn test_list_all_is_ascending_regardless_of_bookings() {
        let mut catalog = standard_catalog();
        catalog.book(303, "Dan", "2024-03-03").unwrap();
        catalog.book(104, "Eve", "2024-03-04").unwrap();

        let rooms = catalog.list_all();
        assert_eq!(rooms.len(), 13);
        assert!(rooms.windows(2).all(|w| w[0].number() < w[1].number()));
        assert_eq!(rooms.iter().filter(|r| r.is_booked()).count(), 2);
    }

    #[test]
    fn test_available_by_type_filters_booked_rooms() {
        let mut catalog = standard_catalog();
        catalog.book(302, "Frank", "2024-04-01").unwrap();

        let suites: Vec<_> = catalog
            .list_available_by_type(RoomType::Suite)
            .iter()
            .map(|r| r.number())
            .collect();
        assert_eq!(suites, vec![301, 303]);

        catalog.book(301, "Grace", "2024-04-02").unwrap();
        catalog.book(303, "Heidi", "2024-04-03").unwrap();
        assert!(catalog.list_available_by_type(RoomType::Suite).is_empty());
        assert_eq!(catalog.list_available_by_type(RoomType::Single).len(), 5);
    }

    #[test]
    fn test_room_type_parsing() {
        assert_eq!("Double".parse::<RoomType>(), Ok(RoomType::Double));
        assert_eq!(
            "suite".parse::<RoomType>(),
            Err(UnknownRoomType("suite".to_string()))
        );
    }
}
