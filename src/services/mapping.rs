//! Static translation tables from hospital environment attributes to the
//! catalog's categorical vocabulary.
//!
//! Every lookup is total: unknown or missing input resolves to the table's
//! documented default, never an error.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Mood used when the interior tone is missing or unrecognized.
pub const DEFAULT_MOOD: &str = "중립";
/// Genre used when the department is missing or unrecognized.
pub const DEFAULT_GENRE: &str = "추상화";
/// Medium used when the installation space is missing or unrecognized.
pub const DEFAULT_MEDIUM: &str = "미디어아트";
/// Mood used when the weather condition is missing or unrecognized,
/// including the "Unknown" sentinel from a failed weather lookup.
pub const DEFAULT_WEATHER_MOOD: &str = "중립";
/// Region used when the department is missing or unrecognized.
pub const DEFAULT_REGION: &str = "서양";
/// Message used when the department is missing or unrecognized.
pub const DEFAULT_MESSAGE: &str = "감정 표현";

static INTERIOR_TONE_TO_MOOD: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("화이트", "따뜻함"),
        ("베이지", "따뜻함"),
        ("브라운", "차가움"),
        ("블랙", "차가움"),
    ])
});

static DEPARTMENT_TO_GENRE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("피부과", "인물화"),
        ("소아과", "풍경화"),
        ("성형외과", "인물화"),
        ("치과", "정물화"),
        ("산부인과", "미디어아트"),
    ])
});

static INSTALLATION_SPACE_TO_MEDIUM: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("로비", "미디어아트"),
        ("대기실", "풍경화"),
        ("병실", "인물화"),
        ("복도", "설치미술"),
    ])
});

static WEATHER_TO_MOOD: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Clear", "따뜻함"),
        ("Partly cloudy", "우울함"),
        ("Cloudy", "우울함"),
        ("Overcast", "우울함"),
        ("Mist", "신비로움"),
        ("Patchy rain possible", "신비로움"),
        ("Rain", "신비로움"),
        ("Light rain", "신비로움"),
        ("Heavy rain", "우울함"),
        ("Snow", "차가움"),
        ("Blizzard", "차가움"),
        ("Fog", "신비로움"),
        ("Thunderstorm", "신비로움"),
    ])
});

static DEPARTMENT_TO_REGION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("피부과", "서양"),
        ("소아과", "동양"),
        ("성형외과", "서양"),
        ("치과", "아프리카"),
        ("산부인과", "남미"),
    ])
});

static DEPARTMENT_TO_MESSAGE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("피부과", "감정 표현"),
        ("소아과", "개념"),
        ("성형외과", "사회 비판"),
        ("치과", "실험"),
        ("산부인과", "개념"),
    ])
});

/// Raw environment attributes for one recommendation request.
///
/// `patient_age` and `patient_gender` are part of the interface but no
/// table consults them.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentInput {
    pub interior_tone: String,
    pub department: String,
    pub installation_space: String,
    pub patient_age: String,
    pub patient_gender: String,
}

/// Environment attributes translated into the catalog vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedFeatures {
    pub mood: &'static str,
    pub genre: &'static str,
    pub medium: &'static str,
    pub mood_weather: &'static str,
    pub region: &'static str,
    pub message: &'static str,
}

/// Translate raw environment attributes plus a weather condition into the
/// catalog vocabulary. Pure and deterministic.
pub fn map_environment(input: &EnvironmentInput, weather: &str) -> MappedFeatures {
    MappedFeatures {
        mood: lookup(&INTERIOR_TONE_TO_MOOD, &input.interior_tone, DEFAULT_MOOD),
        genre: lookup(&DEPARTMENT_TO_GENRE, &input.department, DEFAULT_GENRE),
        medium: lookup(
            &INSTALLATION_SPACE_TO_MEDIUM,
            &input.installation_space,
            DEFAULT_MEDIUM,
        ),
        mood_weather: lookup(&WEATHER_TO_MOOD, weather, DEFAULT_WEATHER_MOOD),
        region: lookup(&DEPARTMENT_TO_REGION, &input.department, DEFAULT_REGION),
        message: lookup(&DEPARTMENT_TO_MESSAGE, &input.department, DEFAULT_MESSAGE),
    }
}

fn lookup(
    table: &HashMap<&'static str, &'static str>,
    key: &str,
    default: &'static str,
) -> &'static str {
    table.get(key).copied().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(interior_tone: &str, department: &str, installation_space: &str) -> EnvironmentInput {
        EnvironmentInput {
            interior_tone: interior_tone.to_string(),
            department: department.to_string(),
            installation_space: installation_space.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_known_interior_tones_map_to_documented_moods() {
        let cases = [
            ("화이트", "따뜻함"),
            ("베이지", "따뜻함"),
            ("브라운", "차가움"),
            ("블랙", "차가움"),
        ];
        for (tone, mood) in cases {
            let mapped = map_environment(&input(tone, "", ""), "");
            assert_eq!(mapped.mood, mood, "tone {}", tone);
        }
    }

    #[test]
    fn test_unknown_interior_tone_falls_back_to_neutral() {
        assert_eq!(map_environment(&input("핑크", "", ""), "").mood, DEFAULT_MOOD);
        assert_eq!(map_environment(&input("", "", ""), "").mood, DEFAULT_MOOD);
    }

    #[test]
    fn test_department_drives_genre_region_and_message_together() {
        let cases = [
            ("피부과", "인물화", "서양", "감정 표현"),
            ("소아과", "풍경화", "동양", "개념"),
            ("성형외과", "인물화", "서양", "사회 비판"),
            ("치과", "정물화", "아프리카", "실험"),
            ("산부인과", "미디어아트", "남미", "개념"),
        ];
        for (department, genre, region, message) in cases {
            let mapped = map_environment(&input("", department, ""), "");
            assert_eq!(mapped.genre, genre, "department {}", department);
            assert_eq!(mapped.region, region, "department {}", department);
            assert_eq!(mapped.message, message, "department {}", department);
        }
    }

    #[test]
    fn test_unknown_department_yields_all_three_defaults() {
        let mapped = map_environment(&input("", "정형외과", ""), "");
        assert_eq!(mapped.genre, DEFAULT_GENRE);
        assert_eq!(mapped.region, DEFAULT_REGION);
        assert_eq!(mapped.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn test_installation_space_maps_to_medium() {
        let cases = [
            ("로비", "미디어아트"),
            ("대기실", "풍경화"),
            ("병실", "인물화"),
            ("복도", "설치미술"),
        ];
        for (space, medium) in cases {
            assert_eq!(map_environment(&input("", "", space), "").medium, medium);
        }
        assert_eq!(map_environment(&input("", "", "옥상"), "").medium, DEFAULT_MEDIUM);
    }

    #[test]
    fn test_weather_conditions_map_to_documented_moods() {
        let cases = [
            ("Clear", "따뜻함"),
            ("Partly cloudy", "우울함"),
            ("Heavy rain", "우울함"),
            ("Rain", "신비로움"),
            ("Fog", "신비로움"),
            ("Snow", "차가움"),
            ("Blizzard", "차가움"),
        ];
        for (condition, mood) in cases {
            let mapped = map_environment(&input("", "", ""), condition);
            assert_eq!(mapped.mood_weather, mood, "condition {}", condition);
        }
    }

    #[test]
    fn test_unknown_weather_falls_back_to_neutral() {
        // "Unknown" is the sentinel a failed weather lookup produces; it has
        // no table entry on purpose.
        assert_eq!(
            map_environment(&input("", "", ""), "Unknown").mood_weather,
            DEFAULT_WEATHER_MOOD
        );
        assert_eq!(
            map_environment(&input("", "", ""), "Drizzle").mood_weather,
            DEFAULT_WEATHER_MOOD
        );
    }

    #[test]
    fn test_patient_fields_are_ignored() {
        let plain = input("화이트", "피부과", "로비");
        let with_patient = EnvironmentInput {
            patient_age: "34".to_string(),
            patient_gender: "여성".to_string(),
            ..plain.clone()
        };

        assert_eq!(map_environment(&plain, "Clear"), map_environment(&with_patient, "Clear"));
    }
}
