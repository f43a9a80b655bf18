// Initial inventory configuration

use serde::{Deserialize, Serialize};

use crate::room_catalog::{RoomNumber, RoomType};

// A run of consecutively numbered rooms sharing a type and price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBlock {
    pub room_type: RoomType,
    pub first_number: RoomNumber,
    pub count: u32,
    pub price: u32,
}

impl RoomBlock {
    // Stops early rather than wrapping if the block runs past the largest room number
    pub fn numbers(&self) -> impl Iterator<Item = RoomNumber> + '_ {
        (0..self.count).map_while(move |offset| {
            RoomNumber::try_from(offset)
                .ok()
                .and_then(|offset| self.first_number.checked_add(offset))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelConfig {
    // Inserted in order, which determines the tree shape
    pub room_blocks: Vec<RoomBlock>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            room_blocks: vec![
                RoomBlock {
                    room_type: RoomType::Single,
                    first_number: 101,
                    count: 5,
                    price: 1000,
                },
                RoomBlock {
                    room_type: RoomType::Double,
                    first_number: 201,
                    count: 5,
                    price: 2000,
                },
                RoomBlock {
                    room_type: RoomType::Suite,
                    first_number: 301,
                    count: 3,
                    price: 5000,
                },
            ],
        }
    }
}

impl HotelConfig {
    pub fn room_count(&self) -> usize {
        self.room_blocks.iter().map(|b| b.count as usize).sum()
    }
}
