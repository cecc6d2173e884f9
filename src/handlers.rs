pub mod health;
pub mod pages;
pub mod precipitation;
pub mod stations;
