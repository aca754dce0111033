#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

fn wrap_line(line: &str, max_line_length: usize) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![" ".to_string()];
    }

    let mut wrapped: Vec<String> = vec![];
    let mut char_count = 0;
    let mut current_words: Vec<&str> = vec![];

    for word in line.split(' ') {
        if word.len() + char_count + 1 > max_line_length && !current_words.is_empty() {
            wrapped.push(current_words.join(" ").trim_end().to_string());
            current_words = vec![word];
            char_count = word.len() + 1;
        } else {
            current_words.push(word);
            char_count += word.len() + 1;
        }
    }

    if !current_words.is_empty() {
        wrapped.push(current_words.join(" ").trim_end().to_string());
    }

    return wrapped;
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, alignment: BubbleAlignment, window_max_width: usize) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Unicode character border + padding.
            bubble_padding: 8,
            // left border + left padding + (text, not counted) + right padding + right border +
            // scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'a>> {
        let display_lines = self.display_lines();
        let max_line_length = self.get_max_line_length(&display_lines);

        let mut lines: Vec<Line> = vec![];
        for logical_line in display_lines {
            for wrapped in wrap_line(&logical_line, max_line_length) {
                lines.push(self.bubble_line(wrapped, max_line_length));
            }
        }

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    /// The logical lines of the bubble before wrapping: the message text,
    /// followed by the diagram references the visuals selection settled on.
    fn display_lines(&self) -> Vec<String> {
        let mut lines = self
            .message
            .text
            .split('\n')
            .map(|line| {
                return line.to_string();
            })
            .collect::<Vec<String>>();

        let links = self
            .message
            .visuals
            .links(&Config::get(ConfigKey::AssetBaseUrl));
        if !links.is_empty() {
            lines.push("".to_string());
            for link in links {
                lines.push(link.display());
            }
        }

        return lines;
    }

    fn get_max_line_length(&self, display_lines: &[String]) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;

        let mut max_line_length = display_lines
            .iter()
            .map(|line| {
                return line.len();
            })
            .max()
            .unwrap();

        if max_line_length > (self.window_max_width - line_border_width) {
            max_line_length = self.window_max_width - line_border_width;
        }

        let username = &self.message.author.to_string();
        if max_line_length < username.len() {
            max_line_length = username.len();
        }

        return max_line_length;
    }

    fn bubble_line(&self, text: String, max_line_length: usize) -> Line<'a> {
        let fill = " ".repeat(max_line_length.saturating_sub(text.len()));
        let formatted_line_length =
            text.len() + fill.len() + Bubble::style_config().bubble_padding;
        let outer_padding =
            " ".repeat(self.window_max_width.saturating_sub(formatted_line_length));

        let mut spans = vec![
            self.highlight_span("│ ".to_string()),
            Span::from(text),
            self.highlight_span(format!("{fill} │")),
        ];

        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(outer_padding));
            return Line::from(spans);
        }

        let mut line_spans = vec![Span::from(outer_padding)];
        line_spans.extend(spans);

        return Line::from(line_spans);
    }

    fn wrap_lines_in_bubble(&self, lines: Vec<Line<'a>>, max_line_length: usize) -> Vec<Line<'a>> {
        // Add 2 for the vertical bars.
        let inner_bar = "─".repeat(max_line_length + 2);
        let mut top_bar = format!("╭{inner_bar}╮");
        let bottom_bar = format!("╰{inner_bar}╯");
        let bar_bubble_padding = " ".repeat(
            self.window_max_width
                .saturating_sub(max_line_length + Bubble::style_config().bubble_padding),
        );

        let username = &self.message.author.to_string();
        let top_replace = "─".repeat(username.len());
        top_bar = top_bar.replace(
            format!("╭{top_replace}").as_str(),
            format!("╭{username}").as_str(),
        );

        if self.alignment == BubbleAlignment::Left {
            let mut res = vec![self.highlight_line(format!("{top_bar}{bar_bubble_padding}"))];
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{bar_bubble_padding}")));
            return res;
        }

        let mut res = vec![self.highlight_line(format!("{bar_bubble_padding}{top_bar}"))];
        res.extend(lines);
        res.push(self.highlight_line(format!("{bar_bubble_padding}{bottom_bar}")));
        return res;
    }

    fn highlight_span(&self, text: String) -> Span<'a> {
        if self.message.message_type() == MessageType::Error {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Red),
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }

    fn highlight_line(&self, text: String) -> Line<'a> {
        return Line::from(self.highlight_span(text));
    }
}
