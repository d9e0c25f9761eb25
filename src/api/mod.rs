//! STAC API Module
//! HTTP surface: request pipeline, auth gate and resource routes

pub mod auth;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
