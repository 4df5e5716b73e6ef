#![allow(unexpected_cfgs)]
//! Token lock, LP lock and vesting program.

mod entrypoint;
mod error;
mod events;
mod instructions;
mod pda;
mod processor;
mod token;
