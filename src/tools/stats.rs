/// Tool for the dashboard summary
///
/// This module implements the habit_stats MCP tool: the aggregate counters
/// shown above the habit list, plus optional insights.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analytics::{AnalyticsEngine, HabitStats};
use crate::store::HabitStore;
use crate::tools::ToolError;

/// Parameters for the stats tool
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct StatsParams {
    /// Append insights and recommendations (default: true)
    pub include_insights: Option<bool>,
}

/// Response from the stats tool
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: HabitStats,
    pub insights: Vec<String>,
    pub message: String,
}

/// Summarize the collection
pub fn get_habit_stats(
    store: &HabitStore,
    analytics: &AnalyticsEngine,
    params: StatsParams,
) -> Result<StatsResponse, ToolError> {
    let stats = analytics.summarize(store.habits());
    let insights = if params.include_insights.unwrap_or(true) {
        analytics.generate_insights(store.habits())
    } else {
        Vec::new()
    };

    let mut message = format!(
        "📊 **Dashboard**\n- Habits: {}\n- Completed today: {}/{}\n- Total streaks: {}\n- Average streak: {}",
        stats.total_habits,
        stats.completed_today,
        stats.total_habits,
        stats.total_streak_sum,
        stats.rounded_average_streak()
    );

    if !stats.categories.is_empty() {
        message.push_str(&format!("\n- Categories: {}", stats.categories.join(", ")));
    }

    if !insights.is_empty() {
        message.push_str("\n\n💡 **Insights**\n");
        message.push_str(
            &insights
                .iter()
                .map(|i| format!("- {}", i))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    Ok(StatsResponse {
        stats,
        insights,
        message,
    })
}
