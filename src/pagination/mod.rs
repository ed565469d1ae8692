//! Client-side pagination of a fixed list of items.
//!
//! The current page is owned by [`Paginator`]; the page-number window is a
//! pure function of `(current, total)` so it can be checked without a
//! document to render into.

mod render;

pub use render::render_html;

use crate::config;
use serde::Serialize;
use std::ops::Range;

/// One slot of the page-number strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "page")]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// A rendered control. Buttons carry the page they switch to when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Control {
    Previous { target: usize },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize },
}

impl Control {
    /// The page a click on this control shows, if it is clickable.
    pub fn target(&self) -> Option<usize> {
        match *self {
            Control::Previous { target } | Control::Next { target } => Some(target),
            Control::Page { number, .. } => Some(number),
            Control::Ellipsis => None,
        }
    }
}

/// What `show_page` produces: which items are visible and the control strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub page: usize,
    pub total_pages: usize,
    pub visible: Range<usize>,
    pub controls: Vec<Control>,
}

#[derive(Clone, Debug)]
pub struct Paginator {
    item_count: usize,
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    /// A paginator positioned on page 1. A zero page size falls back to the
    /// default.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            config::DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Paginator {
            item_count,
            page_size,
            current_page: 1,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.page_size)
    }

    /// Render the page the paginator is on without moving it.
    pub fn view(&self) -> PageView {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(self.item_count);
        PageView {
            page: self.current_page,
            total_pages: self.total_pages(),
            visible: start.min(end)..end,
            controls: controls(self.current_page, self.total_pages()),
        }
    }

    /// Move to `page` and render it. Out-of-range pages are clamped to the
    /// first or last page.
    pub fn show_page(&mut self, page: usize) -> PageView {
        self.current_page = page.clamp(1, self.total_pages().max(1));
        self.view()
    }

    /// Follow a click on `control`. Ellipses are inert.
    pub fn click(&mut self, control: &Control) -> Option<PageView> {
        control.target().map(|page| self.show_page(page))
    }
}

/// Page numbers to show for `current` out of `total`: every page when there
/// are few, otherwise the first, the last and the neighbours of the current
/// page, with ellipses over the gaps.
pub fn compute_page_window(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= config::MAX_PAGES_WITHOUT_WINDOW {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = vec![PageSlot::Page(1)];
    if current > 3 {
        slots.push(PageSlot::Ellipsis);
    }

    let low = current.saturating_sub(1).max(2);
    let high = current.saturating_add(1).min(total - 1);
    slots.extend((low..=high).map(PageSlot::Page));

    if current.saturating_add(2) < total {
        slots.push(PageSlot::Ellipsis);
    }
    slots.push(PageSlot::Page(total));
    slots
}

/// The full control strip for `current` out of `total`. Empty when there is
/// at most one page.
pub fn controls(current: usize, total: usize) -> Vec<Control> {
    if total <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::new();
    if current > 1 {
        controls.push(Control::Previous {
            target: current - 1,
        });
    }
    controls.extend(
        compute_page_window(current, total)
            .into_iter()
            .map(|slot| match slot {
                PageSlot::Page(number) => Control::Page {
                    number,
                    active: number == current,
                },
                PageSlot::Ellipsis => Control::Ellipsis,
            }),
    );
    if current < total {
        controls.push(Control::Next {
            target: current + 1,
        });
    }
    controls
}

/// Read the container's `data-per-page` attribute the way `parseInt` does:
/// leading digits only, falling back to the default when there are none or
/// the value is zero.
pub fn page_size_from_attribute(value: Option<&str>) -> usize {
    value
        .map(str::trim_start)
        .map(|v| {
            v.chars()
                .take_while(char::is_ascii_digit)
                .collect::<String>()
        })
        .and_then(|digits| digits.parse::<usize>().ok())
        .filter(|&size| size > 0)
        .unwrap_or(config::DEFAULT_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageSlot::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(Paginator::new(25, 10).total_pages(), 3);
        assert_eq!(Paginator::new(20, 10).total_pages(), 2);
        assert_eq!(Paginator::new(0, 10).total_pages(), 0);
        assert_eq!(Paginator::new(1, 10).total_pages(), 1);
    }

    #[test]
    fn test_window_shows_all_pages_when_few() {
        assert_eq!(compute_page_window(1, 1), vec![Page(1)]);
        assert_eq!(
            compute_page_window(4, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_window_around_middle_page() {
        assert_eq!(
            compute_page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_near_the_edges() {
        assert_eq!(
            compute_page_window(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            compute_page_window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            compute_page_window(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            compute_page_window(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn test_window_never_repeats_a_page() {
        for total in 8..=20 {
            for current in 1..=total {
                let pages: Vec<usize> = compute_page_window(current, total)
                    .into_iter()
                    .filter_map(|slot| match slot {
                        Page(n) => Some(n),
                        Ellipsis => None,
                    })
                    .collect();
                assert!(
                    pages.windows(2).all(|w| w[0] < w[1]),
                    "current={current} total={total}: {pages:?}"
                );
                assert!(pages.contains(&current));
                assert_eq!(pages.first(), Some(&1));
                assert_eq!(pages.last(), Some(&total));
            }
        }
    }

    #[test]
    fn test_window_at_the_numeric_limit() {
        assert_eq!(
            compute_page_window(usize::MAX, 10),
            vec![Page(1), Ellipsis, Page(10)]
        );
        assert_eq!(
            compute_page_window(usize::MAX, usize::MAX),
            vec![Page(1), Ellipsis, Page(usize::MAX - 1), Page(usize::MAX)]
        );
    }

    #[test]
    fn test_last_page_of_a_huge_list() {
        let mut paginator = Paginator::new(usize::MAX, 2);
        let view = paginator.show_page(usize::MAX);
        assert_eq!(view.page, paginator.total_pages());
        assert_eq!(view.visible.end, usize::MAX);
        assert!(view.visible.start < view.visible.end);
    }

    #[test]
    fn test_show_second_of_three_pages() {
        let mut paginator = Paginator::new(25, 10);
        let view = paginator.show_page(2);

        assert_eq!(view.visible, 10..20);
        assert_eq!(
            view.controls,
            vec![
                Control::Previous { target: 1 },
                Control::Page { number: 1, active: false },
                Control::Page { number: 2, active: true },
                Control::Page { number: 3, active: false },
                Control::Next { target: 3 },
            ]
        );
    }

    #[test]
    fn test_last_page_is_partial() {
        let mut paginator = Paginator::new(25, 10);
        let view = paginator.show_page(3);
        assert_eq!(view.visible, 20..25);
        assert!(!view
            .controls
            .iter()
            .any(|c| matches!(c, Control::Next { .. })));
    }

    #[test]
    fn test_starts_on_first_page_without_previous() {
        let paginator = Paginator::new(25, 10);
        let view = paginator.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.visible, 0..10);
        assert!(matches!(view.controls.first(), Some(Control::Page { number: 1, active: true })));
    }

    #[test]
    fn test_single_page_has_no_controls() {
        let mut paginator = Paginator::new(4, 10);
        let view = paginator.show_page(1);
        assert_eq!(view.visible, 0..4);
        assert!(view.controls.is_empty());

        let empty = Paginator::new(0, 10).view();
        assert_eq!(empty.visible, 0..0);
        assert!(empty.controls.is_empty());
    }

    #[test]
    fn test_click_follows_control_target() {
        let mut paginator = Paginator::new(100, 10);
        let view = paginator.show_page(5);
        let next = *view.controls.last().unwrap();

        let view = paginator.click(&next).unwrap();
        assert_eq!(view.page, 6);
        assert_eq!(paginator.current_page(), 6);
        assert_eq!(paginator.click(&Control::Ellipsis), None);
        assert_eq!(paginator.current_page(), 6);
    }

    #[test]
    fn test_show_page_clamps_out_of_range() {
        let mut paginator = Paginator::new(25, 10);
        assert_eq!(paginator.show_page(0).page, 1);
        assert_eq!(paginator.show_page(9).page, 3);
    }

    #[test]
    fn test_page_size_from_attribute() {
        assert_eq!(page_size_from_attribute(Some("25")), 25);
        assert_eq!(page_size_from_attribute(Some(" 12px")), 12);
        assert_eq!(page_size_from_attribute(Some("0")), 10);
        assert_eq!(page_size_from_attribute(Some("abc")), 10);
        assert_eq!(page_size_from_attribute(Some("")), 10);
        assert_eq!(page_size_from_attribute(None), 10);
    }

    #[test]
    fn test_view_serializes_for_templates() {
        let mut paginator = Paginator::new(25, 10);
        let json = serde_json::to_value(paginator.show_page(3)).unwrap();
        assert_eq!(json["page"], 3);
        assert_eq!(json["visible"]["start"], 20);
        assert_eq!(json["controls"][0]["kind"], "previous");
        assert_eq!(json["controls"][0]["target"], 2);
    }
}
