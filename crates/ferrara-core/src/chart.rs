//! Customer satisfaction doughnut chart
//!
//! The chart itself is drawn by Chart.js on the page. This module owns the
//! static distribution and serializes the configuration object handed to the
//! `Chart` constructor.

use crate::error::{Result, SiteError};
use crate::theme::Palette;
use serde::Serialize;

/// Category labels, best rating first
pub const CATEGORY_LABELS: [&str; 5] = [
    "Excellent (5 Stars)",
    "Very Good (4 Stars)",
    "Good (3 Stars)",
    "Fair (2 Stars)",
    "Poor (1 Star)",
];

/// Percentage of customers per category, best rating first
pub const DEFAULT_DISTRIBUTION: [u32; 5] = [85, 12, 2, 1, 0];

/// Body of the tooltip label callback (`function(context) { ... }`)
///
/// Functions cannot travel through JSON, so the host attaches this to
/// `options.plugins.tooltip.callbacks.label` after parsing the config.
pub const TOOLTIP_LABEL_CALLBACK: &str = "return context.label + ': ' + context.parsed + '%';";

/// Check a distribution has one entry per category and sums to 100
pub fn validate_distribution(distribution: &[u32]) -> Result<()> {
    if distribution.len() != CATEGORY_LABELS.len() {
        return Err(SiteError::Validation(format!(
            "Chart distribution needs {} entries, got {}",
            CATEGORY_LABELS.len(),
            distribution.len()
        )));
    }

    let total: u32 = distribution.iter().sum();
    if total != 100 {
        return Err(SiteError::Validation(format!(
            "Chart distribution must sum to 100, got {}",
            total
        )));
    }

    Ok(())
}

/// Chart.js configuration object
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<u32>,
    pub background_color: Vec<String>,
    pub border_color: String,
    pub border_width: u32,
    pub hover_offset: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub elements: Elements,
    pub animation: Animation,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub position: String,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub color: String,
    pub font: Font,
    pub padding: u32,
    pub use_point_style: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Elements {
    pub arc: Arc,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arc {
    pub border_width: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub animate_rotate: bool,
    pub duration: u32,
}

/// The satisfaction chart shown in the reviews section
#[derive(Debug, Clone)]
pub struct SatisfactionChart {
    distribution: Vec<u32>,
    palette: Palette,
}

impl SatisfactionChart {
    /// Create a chart over a validated distribution
    pub fn new(distribution: Vec<u32>) -> Result<Self> {
        validate_distribution(&distribution)?;
        Ok(Self {
            distribution,
            palette: Palette::default(),
        })
    }

    /// Percentages, best rating first
    pub fn distribution(&self) -> &[u32] {
        &self.distribution
    }

    /// Build the Chart.js configuration
    pub fn config(&self) -> ChartConfig {
        let p = &self.palette;
        ChartConfig {
            kind: "doughnut".to_string(),
            data: ChartData {
                labels: CATEGORY_LABELS.iter().map(|l| l.to_string()).collect(),
                datasets: vec![Dataset {
                    data: self.distribution.clone(),
                    background_color: [p.gold, p.light_gold, p.dark_gold, p.gray, p.dark_gray]
                        .iter()
                        .map(|c| c.to_string())
                        .collect(),
                    border_color: p.background.to_string(),
                    border_width: 2,
                    hover_offset: 10,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: true,
                plugins: Plugins {
                    legend: Legend {
                        position: "bottom".to_string(),
                        labels: LegendLabels {
                            color: p.light_gold.to_string(),
                            font: Font { size: 12 },
                            padding: 20,
                            use_point_style: true,
                        },
                    },
                    tooltip: Tooltip {
                        background_color: p.background_rgba(0.9),
                        title_color: p.gold.to_string(),
                        body_color: p.light_gold.to_string(),
                        border_color: p.gold.to_string(),
                        border_width: 1,
                    },
                },
                elements: Elements {
                    arc: Arc { border_width: 2 },
                },
                animation: Animation {
                    animate_rotate: true,
                    duration: 2000,
                },
            },
        }
    }

    /// Configuration as a JSON string
    pub fn config_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.config())?)
    }
}

impl Default for SatisfactionChart {
    fn default() -> Self {
        Self {
            distribution: DEFAULT_DISTRIBUTION.to_vec(),
            palette: Palette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_distribution_is_valid() {
        assert!(validate_distribution(&DEFAULT_DISTRIBUTION).is_ok());
    }

    #[test]
    fn test_distribution_rejects_wrong_shape() {
        assert!(SatisfactionChart::new(vec![50, 50]).is_err());
        assert!(SatisfactionChart::new(vec![80, 10, 5, 1, 1]).is_err());
    }

    #[test]
    fn test_config_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&SatisfactionChart::default().config_json().unwrap()).unwrap();

        assert_eq!(json["type"], "doughnut");
        assert_eq!(json["data"]["labels"][0], "Excellent (5 Stars)");
        assert_eq!(json["data"]["datasets"][0]["data"], json!([85, 12, 2, 1, 0]));
        assert_eq!(
            json["data"]["datasets"][0]["backgroundColor"],
            json!(["#FFD700", "#E5E4E2", "#B8860B", "#808080", "#404040"])
        );
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "#080808");
        assert_eq!(json["data"]["datasets"][0]["hoverOffset"], 10);
        assert_eq!(json["options"]["maintainAspectRatio"], true);
        assert_eq!(json["options"]["plugins"]["legend"]["position"], "bottom");
        assert_eq!(json["options"]["plugins"]["legend"]["labels"]["usePointStyle"], true);
        assert_eq!(
            json["options"]["plugins"]["tooltip"]["backgroundColor"],
            "rgba(8, 8, 8, 0.9)"
        );
        assert_eq!(json["options"]["animation"]["animateRotate"], true);
        assert_eq!(json["options"]["animation"]["duration"], 2000);
    }
}
