use shared::protocol::EnhanceResponse;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricLine {
    pub label: &'static str,
    pub value: String,
}

impl MetricLine {
    pub fn display(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// An enhance response laid out for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResult {
    /// Enhanced prompt split on line breaks; each entry is one visual line.
    pub output_lines: Vec<String>,
    pub framework_label: String,
    pub metrics: Vec<MetricLine>,
    pub notes: Vec<String>,
}

impl RenderedResult {
    pub fn from_response(response: &EnhanceResponse) -> Self {
        Self {
            output_lines: response
                .enhanced_prompt
                .split('\n')
                .map(|line| line.trim_end_matches('\r').to_string())
                .collect(),
            framework_label: format!("Framework: {}", response.selected_framework),
            metrics: response
                .quality
                .labeled()
                .into_iter()
                .map(|(label, value)| MetricLine {
                    label,
                    value: format!("{}/10", format_score(value)),
                })
                .collect(),
            notes: response.explain.clone(),
        }
    }

    pub fn plain_text(&self) -> String {
        self.output_lines.join("\n")
    }
}

fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::QualityScore;

    use super::*;

    fn response(text: &str, context_richness: f64) -> EnhanceResponse {
        EnhanceResponse {
            enhanced_prompt: text.to_string(),
            selected_framework: "Framework One".to_string(),
            quality: QualityScore {
                overall: 8.0,
                clarity: 9.0,
                specificity: 7.0,
                context_richness,
                actionability: 8.0,
            },
            explain: Vec::new(),
        }
    }

    #[test]
    fn splits_line_breaks_and_labels_metrics() {
        let rendered = RenderedResult::from_response(&response("Line1\r\nLine2", 8.0));
        assert_eq!(rendered.output_lines, ["Line1", "Line2"]);
        assert_eq!(rendered.plain_text(), "Line1\nLine2");
        assert_eq!(rendered.framework_label, "Framework: Framework One");

        let lines: Vec<_> = rendered.metrics.iter().map(MetricLine::display).collect();
        assert_eq!(
            lines,
            [
                "Overall: 8/10",
                "Clarity: 9/10",
                "Specificity: 7/10",
                "Context: 8/10",
                "Actionability: 8/10",
            ]
        );
    }

    #[test]
    fn fractional_scores_keep_their_fraction() {
        let rendered = RenderedResult::from_response(&response("x", 7.5));
        assert_eq!(rendered.metrics[3].value, "7.5/10");
    }
}
