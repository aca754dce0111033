pub fn requirement_fixture() -> &'static str {
    return "A retail customer wants to forecast daily demand across 400 stores using two years of point of sale history, with forecasts refreshed every night and surfaced in a dashboard their planners already use.";
}

pub fn reply_fixture() -> &'static str {
    return r#"{
  "answer": "A serverless forecasting pipeline fits this requirement.",
  "visualization_url": null,
  "architecture_url": "/static/diagrams/architecture-42.png",
  "flowchart_url": "/static/diagrams/flowchart-42.png",
  "has_architecture": true,
  "has_flowchart": true,
  "has_both_diagrams": true
}"#;
}
