// Relic native item registry library

pub mod account;
pub mod registry;
