pub mod health;
pub mod matches;
pub mod participants;
pub mod teams;
