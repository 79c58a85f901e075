pub mod analytics;
pub mod auth;
pub mod branding;
pub mod contact;
pub mod content;
pub mod navigation;
pub mod services;
pub mod translations;
pub mod vehicles;
