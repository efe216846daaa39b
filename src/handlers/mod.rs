pub mod health;
pub mod weather;
pub mod forecast;

pub use health::health_handler;
pub use weather::current_weather_handler;
pub use forecast::forecast_handler;
