//! OpenWeatherMap icon code to Material Symbols ligature.

/// Shown for any code not in the table
pub const DEFAULT_ICON: &str = "thermostat";

/// Map an icon code (`01d`, `10n`, ...) to a Material Symbols icon name.
pub fn icon_name(code: &str) -> &'static str {
    match code {
        "01d" => "clear_day",
        "01n" => "clear_night",
        "02d" => "partly_cloudy_day",
        "02n" => "partly_cloudy_night",
        "03d" | "03n" => "cloudy",
        "04d" | "04n" => "broken_cloudy",
        "09d" | "09n" => "rainy",
        "10d" => "rainy_light",
        "10n" => "rainy_night",
        "11d" | "11n" => "thunderstorm",
        // snow
        "13d" | "13n" => "ac_unit",
        "50d" | "50n" => "foggy",
        _ => DEFAULT_ICON,
    }
}
