use super::Control;

/// Render the control strip as the markup placed in the `#pagination`
/// container. Each button carries its click target in `data-page`.
pub fn render_html(controls: &[Control]) -> String {
    controls
        .iter()
        .map(|control| match *control {
            Control::Previous { target } => button("Previous", target, false),
            Control::Page { number, active } => button(&number.to_string(), number, active),
            Control::Ellipsis => r#"<span class="pagination-ellipsis">...</span>"#.to_string(),
            Control::Next { target } => button("Next", target, false),
        })
        .collect::<Vec<_>>()
        .join("")
}

fn button(label: &str, target: usize, active: bool) -> String {
    let class = if active {
        "pagination-btn active"
    } else {
        "pagination-btn"
    };
    format!(r#"<button class="{class}" data-page="{target}">{label}</button>"#)
}
