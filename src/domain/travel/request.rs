//! Travel request value objects.
//!
//! A [`TravelRequest`] is the caller-supplied input to one recommendation
//! run: where the trip starts, where it ends, and which optional
//! preferences shape the recommendation.

use serde::{Deserialize, Serialize};

/// Optional preferences for a travel request.
///
/// All fields are optional; absent preferences contribute no clause to the
/// composed task description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelPreferences {
    /// Maximum walking distance in kilometers
    pub max_walking_distance: Option<f64>,

    /// Maximum acceptable travel time in minutes
    pub max_travel_time: Option<f64>,

    /// Whether weather comfort matters to the traveler
    #[serde(default)]
    pub prioritize_weather: bool,

    /// Whether air quality matters to the traveler
    #[serde(default)]
    pub prioritize_air_quality: bool,
}

impl TravelPreferences {
    /// Creates empty preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum walking distance in kilometers.
    pub fn with_max_walking_distance(mut self, km: f64) -> Self {
        self.max_walking_distance = Some(km);
        self
    }

    /// Sets the maximum travel time in minutes.
    pub fn with_max_travel_time(mut self, minutes: f64) -> Self {
        self.max_travel_time = Some(minutes);
        self
    }

    /// Marks weather comfort as a priority.
    pub fn with_weather_priority(mut self) -> Self {
        self.prioritize_weather = true;
        self
    }

    /// Marks air quality as a priority.
    pub fn with_air_quality_priority(mut self) -> Self {
        self.prioritize_air_quality = true;
        self
    }

    /// Returns true if no preference is set.
    pub fn is_empty(&self) -> bool {
        self.max_walking_distance.is_none()
            && self.max_travel_time.is_none()
            && !self.prioritize_weather
            && !self.prioritize_air_quality
    }
}

/// A structured travel request. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRequest {
    /// Starting location (e.g., "Berkeley, CA")
    pub origin: String,

    /// Ending location (e.g., "San Francisco, CA")
    pub destination: String,

    /// Traveler preferences
    #[serde(default)]
    pub preferences: TravelPreferences,
}

impl TravelRequest {
    /// Creates a request with no preferences.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            preferences: TravelPreferences::default(),
        }
    }

    /// Attaches preferences to the request.
    pub fn with_preferences(mut self, preferences: TravelPreferences) -> Self {
        self.preferences = preferences;
        self
    }
}
