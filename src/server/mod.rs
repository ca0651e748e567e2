pub mod dto;
pub mod error;
pub mod matches;
pub mod pub_sub;

pub type UserId = String;
pub type GameId = String;
