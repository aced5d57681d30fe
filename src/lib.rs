//! Daily canteen survey backend.
//!
//! Accepts one rating submission per identified voter per calendar day,
//! aggregates per-criterion averages over date ranges, and serves a comment
//! feed with like/dislike reactions.
//!
//! # API
//!
//! - `POST /api/votes`: submit today's vote (`voterId` or a provider
//!   `idToken`, `notas` scores, optional `comment`)
//! - `GET /api/ratings?from=&to=`: per-criterion averages over a window
//! - `GET /api/comments?from=&to=&q=&minLikes=`: filtered, engagement-sorted
//!   comment feed
//! - `POST /api/comments/:id/react`: like/dislike a comment
//!
//! # Configuration
//!
//! Environment (`.env` supported): `MONGO_URI`, `DB_NAME`, `SERVER_ADDR`,
//! `CORS_ORIGIN`, `ID_TOKEN_SECRET`, `ID_TOKEN_AUDIENCE`. Set
//! `STORAGE=memory` to run against the in-process store instead of MongoDB.

pub mod controllers;
pub mod db;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod survey;
pub mod utils;
