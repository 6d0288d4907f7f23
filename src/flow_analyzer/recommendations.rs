use crate::config::AgentConfig;
use crate::shared_data::{Priority, Recommendation, RecommendationKind};
use crate::time_patterns::{format_time, pattern_for, TrafficBand, TrafficClock};

const WEEKLY_INSIGHT: &str =
    "Weekends (Friday-Saturday) typically have 30% less traffic during morning hours.";

/// Advisory messages for the given clock, in generation order:
/// immediate (heavy hours only), today's best, tomorrow's best, weekly insight (weekdays only).
pub fn generate_optimal_travel_times(
    clock: TrafficClock,
    config: &AgentConfig,
) -> Vec<Recommendation> {
    let is_weekend = config.is_weekend(clock.weekday);
    let pattern = pattern_for(is_weekend);
    let mut recommendations = Vec::new();

    if pattern.classify(clock.hour) == TrafficBand::Heavy {
        if let Some(next_optimal) = pattern.next_light_hour(clock.hour) {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Immediate,
                message: format!(
                    "Heavy traffic detected. Consider waiting until {} for 60-80% faster travel.",
                    format_time(next_optimal)
                ),
                time_savings: "12-18 minutes".to_string(),
                priority: Priority::High,
            });
        }
    }

    let best_today: Vec<String> = pattern
        .very_light
        .iter()
        .take(3)
        .map(|&hour| format_time(hour))
        .collect();
    recommendations.push(Recommendation {
        kind: RecommendationKind::TodayOptimal,
        message: format!("Best times to travel today: {}", best_today.join(", ")),
        time_savings: "Up to 20 minutes".to_string(),
        priority: Priority::Medium,
    });

    let tomorrow_pattern = pattern_for(config.is_tomorrow_weekend(clock.weekday));
    let best_tomorrow: Vec<String> = tomorrow_pattern
        .very_light
        .iter()
        .take(2)
        .map(|&hour| format_time(hour))
        .collect();
    recommendations.push(Recommendation {
        kind: RecommendationKind::Tomorrow,
        message: format!(
            "Tomorrow's optimal travel times: {}",
            best_tomorrow.join(" or ")
        ),
        time_savings: "15-25 minutes".to_string(),
        priority: Priority::Low,
    });

    if !is_weekend {
        recommendations.push(Recommendation {
            kind: RecommendationKind::WeeklyInsight,
            message: WEEKLY_INSIGHT.to_string(),
            time_savings: "8-12 minutes".to_string(),
            priority: Priority::Info,
        });
    }

    recommendations
}
