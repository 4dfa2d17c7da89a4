//! Result cards for the Ask view.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::dataset::MockPrediction;
use crate::tui::components::content::ContentBuilder;

/// Writes one card per prediction, separated by a rule.
pub fn prediction_cards(builder: &mut ContentBuilder, predictions: &[&MockPrediction]) {
    let rule = "─".repeat(builder.width().min(48));
    for (i, prediction) in predictions.iter().enumerate() {
        if i > 0 {
            builder.push(Line::from(Span::styled(
                rule.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        card(builder, prediction);
    }
}

fn card(builder: &mut ContentBuilder, prediction: &MockPrediction) {
    builder.push(Line::from(vec![
        Span::styled(
            format!("[{}] ", prediction.domain),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            prediction.horizon.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    builder.paragraph_styled(
        &prediction.question,
        Style::default().add_modifier(Modifier::BOLD),
    );
    builder.paragraph_styled(
        &prediction.probability,
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    );
    builder.muted(&prediction.confidence);
    builder.paragraph(&prediction.reasoning);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(id: u32, domain: &str) -> MockPrediction {
        MockPrediction {
            id,
            question: format!("Question {id}?"),
            domain: domain.into(),
            probability: "Yes: 60%".into(),
            confidence: "Confidence: Medium".into(),
            reasoning: "Because.".into(),
            horizon: "Next 24 hours".into(),
        }
    }

    #[test]
    fn test_cards_in_order_with_rules() {
        let a = prediction(1, "Sports");
        let b = prediction(2, "Markets");
        let mut builder = ContentBuilder::new(60);
        prediction_cards(&mut builder, &[&a, &b]);
        let text: Vec<String> = builder
            .finish()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(text[0], "[Sports] Next 24 hours");
        assert_eq!(text[1], "Question 1?");
        assert_eq!(text[2], "Yes: 60%");
        assert!(text[5].starts_with('─'));
        assert_eq!(text[6], "[Markets] Next 24 hours");
        assert_eq!(text.len(), 11);
    }

    #[test]
    fn test_no_predictions_no_lines() {
        let mut builder = ContentBuilder::new(60);
        prediction_cards(&mut builder, &[]);
        assert!(builder.is_empty());
    }
}
