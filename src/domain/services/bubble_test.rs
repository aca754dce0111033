use ratatui::style::Color;

use super::Bubble;
use super::BubbleAlignment;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::ChatReply;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Visuals;

fn render_lines(message: &Message, alignment: BubbleAlignment, window_max_width: usize) -> String {
    Config::set(ConfigKey::Username, "testuser");
    Config::set(ConfigKey::AssetBaseUrl, "http://localhost:8000");

    let lines = Bubble::new(message, alignment, window_max_width).as_lines();
    return lines
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| {
                    return span.content.to_string();
                })
                .collect::<Vec<String>>()
                .join("");
        })
        .collect::<Vec<String>>()
        .join("\n");
}

#[test]
fn it_renders_an_assistant_bubble() {
    let message = Message::new(Author::Assistant, "Hi there!");
    let rendered = render_lines(&message, BubbleAlignment::Left, 50);

    let pad = " ".repeat(33);
    let expected = format!("╭Archbot────╮{pad}\n│ Hi there! │{pad}\n╰───────────╯{pad}");
    assert_eq!(rendered, expected);
}

#[test]
fn it_wraps_long_lines() {
    let message = Message::new(Author::Assistant, "aaaa bbbb cccc");
    let rendered = render_lines(&message, BubbleAlignment::Left, 18);

    insta::assert_snapshot!(rendered, @r###"
    ╭Archbot───────╮
    │ aaaa bbbb    │
    │ cccc         │
    ╰──────────────╯
    "###);
}

#[test]
fn it_aligns_user_bubbles_right() {
    let message = Message::new(Author::User, "Hello");
    let rendered = render_lines(&message, BubbleAlignment::Right, 30);

    let pad = " ".repeat(14);
    let expected = format!("{pad}╭testuser──╮\n{pad}│ Hello    │\n{pad}╰──────────╯");
    assert_eq!(rendered, expected);
}

#[test]
fn it_renders_error_borders_in_red() {
    let message = Message::new_with_type(
        Author::Assistant,
        MessageType::Error,
        "Connection error: boom",
    );
    let lines = Bubble::new(&message, BubbleAlignment::Left, 50).as_lines();

    assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
    assert_eq!(lines[1].spans[0].style.fg, Some(Color::Red));
}

#[test]
fn it_renders_diagram_links() {
    let visuals = Visuals {
        architecture_url: Some("/img/a.png".to_string()),
        has_both_diagrams: true,
        ..Visuals::default()
    };
    let message = Message::from_reply(ChatReply::new("Done.".to_string(), visuals));
    let rendered = render_lines(&message, BubbleAlignment::Left, 100);

    assert!(rendered.contains("Architecture diagram:"));
    assert!(rendered.contains("http://localhost:8000/img/a.png"));
    assert!(rendered.contains("Process flowchart: URL not available"));
}

#[test]
fn it_renders_the_legacy_visualization_link() {
    let visuals = Visuals {
        visualization_url: Some("/img/v.png".to_string()),
        ..Visuals::default()
    };
    let message = Message::from_reply(ChatReply::new("Done.".to_string(), visuals));
    let rendered = render_lines(&message, BubbleAlignment::Left, 100);

    assert!(rendered.contains("Visualization:"));
    assert!(rendered.contains("http://localhost:8000/img/v.png"));
}
