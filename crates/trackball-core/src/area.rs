// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Active-area selection and resolution to a concrete rectangle.

use core::fmt;

use crate::geometry::Rect;
use crate::ports::LayoutPort;

/// Opaque handle for an element registered with the host's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Region that gestures are measured against.
///
/// With no active area, the scene element's rect is used.
pub enum ActiveArea {
    /// First element matching a selector string.
    Selector(String),
    /// A specific host element.
    Element(ElementId),
    /// A fixed rectangle.
    Rect(Rect),
    /// Host callback evaluated on every resolution.
    Callback(Box<dyn Fn() -> Rect>),
}

impl ActiveArea {
    /// Whether the rect may change while a drag is in flight and should be
    /// re-resolved per frame. Fixed rects are captured once at drag start.
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, Self::Rect(_))
    }
}

impl fmt::Debug for ActiveArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(s) => f.debug_tuple("Selector").field(s).finish(),
            Self::Element(id) => f.debug_tuple("Element").field(id).finish(),
            Self::Rect(r) => f.debug_tuple("Rect").field(r).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Resolves an active area to a rectangle.
///
/// Selectors and elements the layout cannot find fall back to the scene rect.
pub fn resolve_area<L: LayoutPort + ?Sized>(area: Option<&ActiveArea>, layout: &L) -> Rect {
    match area {
        None => layout.scene_rect(),
        Some(ActiveArea::Selector(selector)) => layout
            .query_selector(selector)
            .unwrap_or_else(|| layout.scene_rect()),
        Some(ActiveArea::Element(id)) => layout
            .element_rect(*id)
            .unwrap_or_else(|| layout.scene_rect()),
        Some(ActiveArea::Rect(rect)) => *rect,
        Some(ActiveArea::Callback(f)) => f(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    struct Layout;

    impl LayoutPort for Layout {
        fn scene_rect(&self) -> Rect {
            Rect::new(0.0, 0.0, 640.0, 480.0)
        }

        fn query_selector(&self, selector: &str) -> Option<Rect> {
            (selector == ".viewport").then(|| Rect::new(10.0, 10.0, 100.0, 100.0))
        }

        fn element_rect(&self, element: ElementId) -> Option<Rect> {
            (element == ElementId(7)).then(|| Rect::new(20.0, 20.0, 50.0, 50.0))
        }
    }

    #[test]
    fn every_variant_resolves() {
        let layout = Layout;
        assert_eq!(resolve_area(None, &layout), layout.scene_rect());
        assert_eq!(
            resolve_area(Some(&ActiveArea::Selector(".viewport".into())), &layout),
            Rect::new(10.0, 10.0, 100.0, 100.0)
        );
        assert_eq!(
            resolve_area(Some(&ActiveArea::Element(ElementId(7))), &layout),
            Rect::new(20.0, 20.0, 50.0, 50.0)
        );
        let fixed = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(resolve_area(Some(&ActiveArea::Rect(fixed)), &layout), fixed);
        let cb = ActiveArea::Callback(Box::new(|| Rect::new(5.0, 5.0, 5.0, 5.0)));
        assert_eq!(resolve_area(Some(&cb), &layout), Rect::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn missing_targets_fall_back_to_scene() {
        let layout = Layout;
        assert_eq!(
            resolve_area(Some(&ActiveArea::Selector("#nope".into())), &layout),
            layout.scene_rect()
        );
        assert_eq!(
            resolve_area(Some(&ActiveArea::Element(ElementId(1))), &layout),
            layout.scene_rect()
        );
    }

    #[test]
    fn only_fixed_rects_are_static() {
        assert!(!ActiveArea::Rect(Rect::default()).is_dynamic());
        assert!(ActiveArea::Selector(String::new()).is_dynamic());
        assert!(ActiveArea::Element(ElementId(0)).is_dynamic());
    }
}
