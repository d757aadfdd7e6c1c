//! # brighthealth-entity
//!
//! Domain entity models for the Bright Health auth service. `User` maps a
//! `users` table row; the remaining structs are the inputs used to create
//! and change one.

pub mod user;
