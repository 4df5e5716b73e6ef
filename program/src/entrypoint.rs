//! Solana program entry point.
//!
//! Deserializes the runtime's account blob and hands it to
//! [`process_instruction`]. Pulls in pinocchio's bump allocator (instruction
//! data carries strings and beneficiary lists) and its panic handler.

use crate::processor::process_instruction;

pinocchio::entrypoint!(process_instruction);
