// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Whether `rect` contains `pt`, with all four edges included.
///
/// `kurbo::Rect::contains` excludes the right and bottom edges; snapshot
/// rectangles are closed on every side.
pub(crate) fn contains_point(rect: Rect, pt: Point) -> bool {
    rect.x0 <= pt.x && pt.x <= rect.x1 && rect.y0 <= pt.y && pt.y <= rect.y1
}

/// Whether `outer` fully contains `inner`, with shared edges counting as contained.
pub(crate) fn contains_rect(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}
