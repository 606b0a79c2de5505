//! # Joke Provider Client
//!
//! Unauthenticated clients for the three public joke APIs deskhand exposes:
//! the Chuck Norris API, icanhazdadjoke, and the yo-mama jokes API.

mod client;
pub mod consts;
mod endpoints;
pub mod models;

pub use client::{JokeClient, JokeEndpoints};
pub use models::{ChuckNorrisJoke, DadJoke, YoMamaJoke};
