/// OpenWeatherMap API endpoints
pub const GEO_API: &str = "https://api.openweathermap.org/geo/1.0";
pub const WEATHER_API: &str = "https://api.openweathermap.org/data/2.5";

// Geocoding (city name -> coordinates)
pub const DIRECT: &str = "/direct";

// Forecast (5 day / 3 hour)
pub const FORECAST: &str = "/forecast";
