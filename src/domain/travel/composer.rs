//! Request composer - deterministic task description rendering.
//!
//! Turns a [`TravelRequest`] into the natural-language task handed to the
//! reasoning engine. Identical requests must produce byte-identical text:
//! the recommendation run is only reproducible up to this boundary, so
//! nothing here may depend on time, randomness, or map iteration order.

use super::request::TravelRequest;

/// Renders travel requests into natural-language task descriptions.
///
/// Present preferences are rendered in a fixed clause order: walking
/// distance, travel time, weather priority, air quality priority.
pub struct RequestComposer;

impl RequestComposer {
    /// Composes the task description for a request.
    pub fn compose(request: &TravelRequest) -> String {
        let mut query = format!(
            "I need eco-friendly travel recommendations from {} to {}.",
            request.origin, request.destination
        );

        let prefs = &request.preferences;
        if prefs.is_empty() {
            return query;
        }

        query.push_str(" My preferences are:");

        if let Some(km) = prefs.max_walking_distance {
            query.push_str(&format!(" I'm willing to walk up to {} km.", km));
        }

        if let Some(minutes) = prefs.max_travel_time {
            query.push_str(&format!(" I need to arrive within {} minutes.", minutes));
        }

        if prefs.prioritize_weather {
            query.push_str(" Weather comfort is important to me.");
        }

        if prefs.prioritize_air_quality {
            query.push_str(" Air quality is important for my health.");
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::travel::TravelPreferences;
    use proptest::prelude::*;

    #[test]
    fn compose_without_preferences_is_single_sentence() {
        let request = TravelRequest::new("Berkeley, CA", "San Francisco, CA");

        assert_eq!(
            RequestComposer::compose(&request),
            "I need eco-friendly travel recommendations from Berkeley, CA to San Francisco, CA."
        );
    }

    #[test]
    fn compose_renders_all_preferences_in_order() {
        let request = TravelRequest::new("A", "B").with_preferences(
            TravelPreferences::new()
                .with_max_walking_distance(2.0)
                .with_max_travel_time(45.0)
                .with_weather_priority()
                .with_air_quality_priority(),
        );

        assert_eq!(
            RequestComposer::compose(&request),
            "I need eco-friendly travel recommendations from A to B. \
             My preferences are: \
             I'm willing to walk up to 2 km. \
             I need to arrive within 45 minutes. \
             Weather comfort is important to me. \
             Air quality is important for my health."
        );
    }

    #[test]
    fn compose_skips_absent_preferences() {
        let request = TravelRequest::new("Berkeley, CA", "San Francisco, CA").with_preferences(
            TravelPreferences::new()
                .with_max_walking_distance(2.0)
                .with_air_quality_priority(),
        );

        let text = RequestComposer::compose(&request);

        assert!(text.contains("I'm willing to walk up to 2 km."));
        assert!(text.contains("Air quality is important for my health."));
        assert!(!text.contains("arrive within"));
        assert!(!text.contains("Weather comfort"));
    }

    #[test]
    fn compose_renders_fractional_distances() {
        let request = TravelRequest::new("A", "B")
            .with_preferences(TravelPreferences::new().with_max_walking_distance(1.5));

        assert!(RequestComposer::compose(&request).contains("walk up to 1.5 km."));
    }

    #[test]
    fn compose_keeps_clause_order_stable() {
        let request = TravelRequest::new("A", "B").with_preferences(
            TravelPreferences::new()
                .with_air_quality_priority()
                .with_weather_priority()
                .with_max_travel_time(30.0),
        );

        let text = RequestComposer::compose(&request);
        let time_pos = text.find("arrive within").unwrap();
        let weather_pos = text.find("Weather comfort").unwrap();
        let air_pos = text.find("Air quality").unwrap();

        assert!(time_pos < weather_pos);
        assert!(weather_pos < air_pos);
    }

    proptest! {
        #[test]
        fn compose_is_deterministic(
            origin in "[A-Za-z ,.]{1,30}",
            destination in "[A-Za-z ,.]{1,30}",
            walking in proptest::option::of(0.1f64..50.0),
            time in proptest::option::of(1.0f64..600.0),
            weather in proptest::bool::ANY,
            air in proptest::bool::ANY,
        ) {
            let mut prefs = TravelPreferences::new();
            prefs.max_walking_distance = walking;
            prefs.max_travel_time = time;
            prefs.prioritize_weather = weather;
            prefs.prioritize_air_quality = air;

            let request = TravelRequest::new(origin, destination).with_preferences(prefs);
            let first = RequestComposer::compose(&request);
            let second = RequestComposer::compose(&request.clone());

            prop_assert_eq!(first, second);
        }

        #[test]
        fn compose_always_starts_with_base_sentence(
            origin in "[A-Za-z ]{1,20}",
            destination in "[A-Za-z ]{1,20}",
        ) {
            let request = TravelRequest::new(origin.clone(), destination.clone());
            let text = RequestComposer::compose(&request);

            let expected_prefix = format!(
                "I need eco-friendly travel recommendations from {} to {}.",
                origin, destination
            );
            prop_assert!(text.starts_with(&expected_prefix));
        }
    }
}
