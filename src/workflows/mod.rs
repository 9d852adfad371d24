pub mod intake;
pub mod roster;
