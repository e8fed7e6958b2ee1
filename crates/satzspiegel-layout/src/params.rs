// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The per-page layout parameter record: hard margins, detected rectangles,
// content size, and alignment policy. Pure value type — the store hands out
// clones, never aliases.

use serde::{Deserialize, Serialize};

use satzspiegel_core::{Alignment, HAlign, LayoutDefaults, Margins, Rect, Size, Unit, VAlign};

use crate::tree::Element;

/// Layout parameters for one page.
///
/// `page_rect` and `content_rect` are in page-local coordinates and stay
/// `None` until detection has run; `content_size_mm` is the content
/// rectangle transformed into physical units. Margins are always stored in
/// millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub hard_margins_mm: Margins,
    pub page_rect: Option<Rect>,
    pub content_rect: Option<Rect>,
    pub content_size_mm: Option<Size>,
    pub alignment: Alignment,
    pub auto_margins: bool,
}

impl Params {
    pub fn new(
        hard_margins_mm: Margins,
        page_rect: Option<Rect>,
        content_rect: Option<Rect>,
        content_size_mm: Option<Size>,
        alignment: Alignment,
        auto_margins: bool,
    ) -> Self {
        Self {
            hard_margins_mm,
            page_rect,
            content_rect,
            content_size_mm,
            alignment,
            auto_margins,
        }
    }

    /// Serialize to an element with the given tag name.
    ///
    /// Undefined rectangles and sizes are omitted entirely; the load path
    /// reads their absence back as `None`.
    pub fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.set_attribute("vAlign", valign_str(self.alignment.vertical));
        el.set_attribute("hAlign", halign_str(self.alignment.horizontal));
        el.set_attribute("autoMargins", if self.auto_margins { "1" } else { "0" });

        el.append_child(margins_to_element(&self.hard_margins_mm));
        if let Some(rect) = self.page_rect {
            el.append_child(rect_to_element("pageRect", rect));
        }
        if let Some(rect) = self.content_rect {
            el.append_child(rect_to_element("contentRect", rect));
        }
        if let Some(size) = self.content_size_mm {
            el.append_child(size_to_element("contentSizeMM", size));
        }
        el
    }

    /// Read a record back from its element form.
    ///
    /// Returns `None` when the mandatory margins child is missing or
    /// unparseable; optional children simply stay undefined. Unknown
    /// alignment values fall back to centered rather than rejecting the
    /// whole record.
    pub fn from_element(el: &Element) -> Option<Self> {
        let margins = margins_from_element(el.find_child("hardMarginsMM")?)?;
        let alignment = Alignment::new(
            el.attribute("vAlign").and_then(parse_valign).unwrap_or_default(),
            el.attribute("hAlign").and_then(parse_halign).unwrap_or_default(),
        );
        Some(Self {
            hard_margins_mm: margins,
            page_rect: el.find_child("pageRect").and_then(rect_from_element),
            content_rect: el.find_child("contentRect").and_then(rect_from_element),
            content_size_mm: el.find_child("contentSizeMM").and_then(size_from_element),
            alignment,
            auto_margins: el.attribute("autoMargins") == Some("1"),
        })
    }
}

/// Fallback record for a page that was never seeded: the stock layout
/// defaults with nothing detected yet.
///
/// Taken directly from `LayoutDefaults::default()`, whose margins are
/// already in millimetres, so the two cannot drift apart. A stage
/// configured with non-stock defaults seeds its pages through
/// `seed_page_defaults` before any field update can reach them.
impl Default for Params {
    fn default() -> Self {
        let defaults = LayoutDefaults::default();
        debug_assert_eq!(defaults.units, Unit::Millimetres);
        Self {
            hard_margins_mm: defaults.margins,
            page_rect: None,
            content_rect: None,
            content_size_mm: None,
            alignment: defaults.alignment,
            auto_margins: defaults.auto_margins,
        }
    }
}

fn valign_str(v: VAlign) -> &'static str {
    match v {
        VAlign::Top => "top",
        VAlign::Center => "center",
        VAlign::Bottom => "bottom",
    }
}

fn halign_str(h: HAlign) -> &'static str {
    match h {
        HAlign::Left => "left",
        HAlign::Center => "center",
        HAlign::Right => "right",
    }
}

fn parse_valign(s: &str) -> Option<VAlign> {
    match s {
        "top" => Some(VAlign::Top),
        "center" => Some(VAlign::Center),
        "bottom" => Some(VAlign::Bottom),
        _ => None,
    }
}

fn parse_halign(s: &str) -> Option<HAlign> {
    match s {
        "left" => Some(HAlign::Left),
        "center" => Some(HAlign::Center),
        "right" => Some(HAlign::Right),
        _ => None,
    }
}

fn margins_to_element(margins: &Margins) -> Element {
    let mut el = Element::new("hardMarginsMM");
    el.set_attribute("left", format!("{}", margins.left));
    el.set_attribute("top", format!("{}", margins.top));
    el.set_attribute("right", format!("{}", margins.right));
    el.set_attribute("bottom", format!("{}", margins.bottom));
    el
}

fn margins_from_element(el: &Element) -> Option<Margins> {
    Some(Margins::new(
        el.attribute_f64("left")?,
        el.attribute_f64("top")?,
        el.attribute_f64("right")?,
        el.attribute_f64("bottom")?,
    ))
}

fn rect_to_element(name: &str, rect: Rect) -> Element {
    let mut el = Element::new(name);
    el.set_attribute("x", format!("{}", rect.x));
    el.set_attribute("y", format!("{}", rect.y));
    el.set_attribute("width", format!("{}", rect.width));
    el.set_attribute("height", format!("{}", rect.height));
    el
}

fn rect_from_element(el: &Element) -> Option<Rect> {
    Some(Rect::new(
        el.attribute_f64("x")?,
        el.attribute_f64("y")?,
        el.attribute_f64("width")?,
        el.attribute_f64("height")?,
    ))
}

fn size_to_element(name: &str, size: Size) -> Element {
    let mut el = Element::new(name);
    el.set_attribute("width", format!("{}", size.width));
    el.set_attribute("height", format!("{}", size.height));
    el
}

fn size_from_element(el: &Element) -> Option<Size> {
    Some(Size::new(
        el.attribute_f64("width")?,
        el.attribute_f64("height")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_params() -> Params {
        Params::new(
            Margins::new(10.0, 10.0, 10.0, 20.0),
            Some(Rect::new(0.0, 0.0, 2480.0, 3508.0)),
            Some(Rect::new(120.0, 140.0, 2200.0, 3100.0)),
            Some(Size::new(186.3, 262.5)),
            Alignment::new(VAlign::Top, HAlign::Left),
            false,
        )
    }

    #[test]
    fn element_round_trip_full() {
        let params = full_params();
        let el = params.to_element("params");
        assert_eq!(Params::from_element(&el), Some(params));
    }

    #[test]
    fn element_round_trip_with_undefined_fields() {
        let params = Params::new(
            Margins::uniform(10.0),
            None,
            None,
            None,
            Alignment::default(),
            true,
        );
        let el = params.to_element("params");
        assert!(el.find_child("pageRect").is_none());
        assert!(el.find_child("contentRect").is_none());
        assert!(el.find_child("contentSizeMM").is_none());
        assert_eq!(Params::from_element(&el), Some(params));
    }

    #[test]
    fn missing_margins_rejects_the_record() {
        let mut el = full_params().to_element("params");
        el.children.retain(|c| c.name != "hardMarginsMM");
        assert_eq!(Params::from_element(&el), None);
    }

    #[test]
    fn fallback_record_mirrors_the_stock_defaults() {
        let params = Params::default();
        let defaults = LayoutDefaults::default();
        assert_eq!(params.hard_margins_mm, defaults.margins);
        assert_eq!(params.alignment, defaults.alignment);
        assert_eq!(params.auto_margins, defaults.auto_margins);
        assert!(params.page_rect.is_none());
        assert!(params.content_rect.is_none());
        assert!(params.content_size_mm.is_none());
    }

    #[test]
    fn unknown_alignment_falls_back_to_centered() {
        let mut el = full_params().to_element("params");
        el.set_attribute("vAlign", "middleish");
        let params = Params::from_element(&el).expect("record");
        assert_eq!(params.alignment.vertical, VAlign::Center);
        // The horizontal attribute was valid and must survive.
        assert_eq!(params.alignment.horizontal, HAlign::Left);
    }
}
