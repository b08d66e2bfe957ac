//! Keyword chat responder
//!
//! Answers free-text farming questions from the current reading and its
//! classification. Topics are an ordered table of `(keywords, answer)`
//! pairs, the first topic with a keyword contained in the question answers.

use rust_decimal::Decimal;

use crate::analysis::RuleContext;
use crate::models::{
    FarmingConditions, FieldWorkSuitability, GrowingConditions, RiskLevel, SoilMoisture,
    WeatherSnapshot,
};

/// One entry of the topic table
pub struct ChatTopic {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub answer: fn(&RuleContext<'_>) -> String,
}

impl ChatTopic {
    fn matches(&self, question: &str) -> bool {
        self.keywords.iter().any(|keyword| question.contains(keyword))
    }
}

impl std::fmt::Debug for ChatTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatTopic").field("name", &self.name).finish()
    }
}

// Harvest sits before planting so "harvest my plants" is a harvest question
pub static CHAT_TOPICS: &[ChatTopic] = &[
    ChatTopic {
        name: "irrigation",
        keywords: &["irrigat", "water", "drought", "dry"],
        answer: irrigation_answer,
    },
    ChatTopic {
        name: "pests",
        keywords: &["pest", "insect", "bug", "aphid", "worm"],
        answer: pest_answer,
    },
    ChatTopic {
        name: "disease",
        keywords: &["disease", "fung", "mold", "mould", "blight"],
        answer: disease_answer,
    },
    ChatTopic {
        name: "harvest",
        keywords: &["harvest", "pick", "reap"],
        answer: harvest_answer,
    },
    ChatTopic {
        name: "planting",
        keywords: &["plant", "sow", "seed", "transplant"],
        answer: planting_answer,
    },
    ChatTopic {
        name: "frost",
        keywords: &["frost", "freez", "cold"],
        answer: frost_answer,
    },
    ChatTopic {
        name: "rain",
        keywords: &["rain", "precipitation", "storm", "wet"],
        answer: rain_answer,
    },
    ChatTopic {
        name: "field work",
        keywords: &["field", "tractor", "spray", "plow", "plough"],
        answer: field_work_answer,
    },
    ChatTopic {
        name: "weather",
        keywords: &["weather", "temperature", "forecast", "humid", "wind", "today"],
        answer: weather_answer,
    },
];

/// Answer a farming question from the snapshot and its classification
pub fn answer_question(
    question: &str,
    snapshot: &WeatherSnapshot,
    conditions: &FarmingConditions,
) -> String {
    let ctx = RuleContext::new(snapshot, conditions);
    let question = question.trim().to_lowercase();

    if question.is_empty() {
        return fallback_answer(&ctx);
    }

    match CHAT_TOPICS.iter().find(|topic| topic.matches(&question)) {
        Some(topic) => (topic.answer)(&ctx),
        None => fallback_answer(&ctx),
    }
}

/// Name of the topic a question would be routed to
pub fn match_topic(question: &str) -> Option<&'static str> {
    let question = question.trim().to_lowercase();
    CHAT_TOPICS
        .iter()
        .find(|topic| topic.matches(&question))
        .map(|topic| topic.name)
}

fn irrigation_answer(ctx: &RuleContext<'_>) -> String {
    let current = ctx.current();
    if ctx.conditions.irrigation_needed {
        format!(
            "Yes, irrigate. Soil moisture is {} at {}°C and {}% humidity. \
             Water early in the morning or in the evening to reduce evaporation.",
            ctx.conditions.soil_moisture,
            current.temperature_celsius.round_dp(1),
            current.humidity_percent
        )
    } else {
        format!(
            "No irrigation needed right now. Soil moisture is {}. \
             Check the soil again tomorrow before watering.",
            ctx.conditions.soil_moisture
        )
    }
}

fn pest_answer(ctx: &RuleContext<'_>) -> String {
    match ctx.conditions.pest_risk {
        RiskLevel::High => "Pest risk is High. Warm, humid weather favors rapid pest \
             reproduction. Inspect crops daily and use traps or organic controls."
            .to_string(),
        RiskLevel::Medium => "Pest risk is Medium. Check the undersides of leaves \
             every few days and watch for early infestations."
            .to_string(),
        RiskLevel::Low => {
            "Pest risk is Low. Routine weekly scouting is enough for now.".to_string()
        }
    }
}

fn disease_answer(ctx: &RuleContext<'_>) -> String {
    let humidity = ctx.current().humidity_percent;
    match ctx.conditions.disease_risk {
        RiskLevel::High => format!(
            "Disease risk is High with {}% humidity. Improve air circulation, \
             avoid overhead watering and consider a preventive fungicide.",
            humidity
        ),
        RiskLevel::Medium => format!(
            "Disease risk is Medium with {}% humidity. Water at the base of plants \
             and remove any infected leaves.",
            humidity
        ),
        RiskLevel::Low => "Disease risk is Low. Keep up normal field hygiene.".to_string(),
    }
}

fn harvest_answer(ctx: &RuleContext<'_>) -> String {
    let current = ctx.current();
    let suitability = ctx.conditions.field_work_suitability;
    if suitability >= FieldWorkSuitability::Good && current.precipitation_mm.is_zero() {
        format!(
            "Good time to harvest. Field conditions are {} and there is no rain.",
            suitability
        )
    } else {
        format!(
            "Better to wait before harvesting. Field conditions are {} with {}mm of rain.",
            suitability,
            current.precipitation_mm.round_dp(1)
        )
    }
}

fn planting_answer(ctx: &RuleContext<'_>) -> String {
    let temp = ctx.current().temperature_celsius;
    let mild = temp >= Decimal::from(15) && temp <= Decimal::from(25);
    if mild && ctx.conditions.soil_moisture == SoilMoisture::Optimal {
        format!(
            "Conditions are right for planting: {}°C with optimal soil moisture. \
             Sow seasonal crops and transplant seedlings.",
            temp.round_dp(1)
        )
    } else {
        format!(
            "Not ideal for planting. It is {}°C and soil moisture is {}. \
             Planting works best between 15°C and 25°C with optimal soil.",
            temp.round_dp(1),
            ctx.conditions.soil_moisture
        )
    }
}

fn frost_answer(ctx: &RuleContext<'_>) -> String {
    // Same freezing line as the frost-critical alert, which includes the current reading
    let now = ctx.current().temperature_celsius;
    if now < Decimal::from(2) {
        return format!(
            "Frost danger: it is {}°C right now. Cover crops with frost cloth \
             and move potted plants indoors.",
            now.round_dp(1)
        );
    }

    let coldest = ctx.window.min_temps().min();
    match coldest {
        Some(low) if low < Decimal::from(2) => format!(
            "Frost danger: lows of {}°C are forecast. Cover crops with frost cloth \
             and move potted plants indoors.",
            low.round_dp(1)
        ),
        Some(low) if low <= Decimal::from(5) => format!(
            "Frost is possible with lows of {}°C. Cover sensitive plants before sunset.",
            low.round_dp(1)
        ),
        Some(low) => format!(
            "No frost expected. The lowest forecast temperature is {}°C.",
            low.round_dp(1)
        ),
        None => format!(
            "No forecast is available for the coming days. It is {}°C right now.",
            ctx.current().temperature_celsius.round_dp(1)
        ),
    }
}

fn rain_answer(ctx: &RuleContext<'_>) -> String {
    let now = ctx.current().precipitation_mm.round_dp(1);
    match ctx.window.total_precip_mm() {
        Some(total) => format!(
            "Current precipitation is {}mm. About {}mm of rain is forecast over the next 48 hours.",
            now,
            total.round_dp(1)
        ),
        None => format!("Current precipitation is {}mm. No forecast is available.", now),
    }
}

fn field_work_answer(ctx: &RuleContext<'_>) -> String {
    let suitability = ctx.conditions.field_work_suitability;
    let wind = ctx.current().wind_speed_kph.round_dp(1);
    if suitability >= FieldWorkSuitability::Good {
        format!(
            "Field work suitability is {}. Wind is {} km/h, a good day for field operations.",
            suitability, wind
        )
    } else {
        format!(
            "Field work suitability is {}. Wind is {} km/h and soil moisture is {}, \
             so postpone spraying and heavy machinery.",
            suitability, wind, ctx.conditions.soil_moisture
        )
    }
}

fn weather_answer(ctx: &RuleContext<'_>) -> String {
    let current = ctx.current();
    format!(
        "It is {}°C with {}% humidity, {} km/h wind, {}mm precipitation and UV index {}.",
        current.temperature_celsius.round_dp(1),
        current.humidity_percent,
        current.wind_speed_kph.round_dp(1),
        current.precipitation_mm.round_dp(1),
        current.uv_index.round_dp(1)
    )
}

fn fallback_answer(ctx: &RuleContext<'_>) -> String {
    let verdict = match ctx.conditions.growing_conditions {
        GrowingConditions::Excellent | GrowingConditions::Good => "favorable",
        GrowingConditions::Fair | GrowingConditions::Poor => "challenging",
    };
    let topics: Vec<&str> = CHAT_TOPICS.iter().map(|topic| topic.name).collect();
    format!(
        "Growing conditions are {} ({}). Ask me about {}.",
        ctx.conditions.growing_conditions,
        verdict,
        topics.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classify;
    use crate::models::{CurrentConditions, DailyForecast};

    fn reading(temp: i64, humidity: i32, precip: i64, wind: i64) -> CurrentConditions {
        CurrentConditions {
            temperature_celsius: Decimal::from(temp),
            humidity_percent: humidity,
            precipitation_mm: Decimal::from(precip),
            wind_speed_kph: Decimal::from(wind),
            uv_index: Decimal::from(6),
        }
    }

    fn day(min: i64, precip: i64) -> DailyForecast {
        DailyForecast {
            date: None,
            max_temp_celsius: Decimal::from(min + 10),
            min_temp_celsius: Decimal::from(min),
            avg_temp_celsius: Decimal::from(min + 5),
            total_precip_mm: Decimal::from(precip),
            max_wind_kph: Decimal::from(10),
            avg_humidity_percent: 60,
        }
    }

    fn ask(question: &str, snapshot: &WeatherSnapshot) -> String {
        answer_question(question, snapshot, &classify(&snapshot.current))
    }

    #[test]
    fn test_irrigation_answer_follows_classification() {
        let hot_dry = WeatherSnapshot::new(reading(32, 30, 0, 10), vec![day(15, 0)]);
        assert!(ask("Should I water my crops?", &hot_dry).starts_with("Yes, irrigate"));

        let mild = WeatherSnapshot::new(reading(20, 60, 0, 5), vec![day(15, 0)]);
        assert!(ask("should i irrigate", &mild).starts_with("No irrigation needed"));
    }

    #[test]
    fn test_first_matching_topic_wins() {
        assert_eq!(match_topic("Water or pests first?"), Some("irrigation"));
        assert_eq!(match_topic("When can I harvest my plants?"), Some("harvest"));
        assert_eq!(match_topic("WHEN TO SOW?"), Some("planting"));
        assert_eq!(match_topic("what is the capital of France"), None);
    }

    #[test]
    fn test_empty_and_unknown_questions_fall_back() {
        let snapshot = WeatherSnapshot::new(reading(20, 60, 0, 5), vec![day(15, 0)]);
        let empty = ask("   ", &snapshot);
        let unknown = ask("tell me a joke", &snapshot);

        assert_eq!(empty, unknown);
        assert!(empty.starts_with("Growing conditions are Excellent (favorable)"));
        assert!(empty.contains("field work"));
    }

    #[test]
    fn test_frost_answer_reads_forecast() {
        let snapshot =
            WeatherSnapshot::new(reading(10, 60, 0, 5), vec![day(8, 0), day(1, 0), day(4, 0)]);
        assert!(ask("Is frost coming?", &snapshot).starts_with("Frost danger: lows of 1°C"));

        let today_only = WeatherSnapshot::new(reading(10, 60, 0, 5), vec![day(8, 0)]);
        assert!(ask("any frost?", &today_only).starts_with("No forecast is available"));
    }

    #[test]
    fn test_frost_answer_reads_current_temperature() {
        let snapshot =
            WeatherSnapshot::new(reading(1, 60, 0, 5), vec![day(10, 0), day(10, 0), day(10, 0)]);
        let alerts = crate::analysis::analyze(&snapshot).alerts;
        assert!(alerts.iter().any(|a| a.id == "frost-critical"));

        assert_eq!(
            ask("Is frost coming?", &snapshot),
            "Frost danger: it is 1°C right now. Cover crops with frost cloth \
             and move potted plants indoors."
        );
    }

    #[test]
    fn test_rain_answer_sums_window() {
        let days = vec![day(10, 50), day(10, 7), day(10, 5)];
        let snapshot = WeatherSnapshot::new(reading(20, 60, 0, 5), days);
        assert_eq!(
            ask("will it rain?", &snapshot),
            "Current precipitation is 0mm. About 12mm of rain is forecast over the next 48 hours."
        );
    }

    #[test]
    fn test_pest_answer_uses_risk() {
        let snapshot = WeatherSnapshot::new(reading(27, 75, 0, 5), vec![day(15, 0)]);
        assert!(ask("any insects?", &snapshot).starts_with("Pest risk is High"));
    }

    #[test]
    fn test_answers_are_deterministic() {
        let snapshot = WeatherSnapshot::new(reading(24, 70, 1, 12), vec![day(12, 3), day(11, 4)]);
        for question in ["weather?", "spray today?", "disease", "harvest?"] {
            assert_eq!(ask(question, &snapshot), ask(question, &snapshot));
        }
    }
}
