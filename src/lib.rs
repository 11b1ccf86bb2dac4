//! Parlour - Terminal Casino Minigame Gallery
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod big_small;
pub mod big_small_logic;
pub mod build_info;
pub mod cards;
pub mod coin;
pub mod constants;
pub mod dice;
pub mod input;
pub mod save_manager;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
