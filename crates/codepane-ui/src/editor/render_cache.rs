//! Per-widget state kept in egui temp memory between frames.
//!
//! The surface itself is rebuilt every frame from host inputs; only the line
//! memo and the mirrored scroll offset outlive a frame.

use std::sync::Arc;

use codepane_core::{Language, LineCache, LineSnapshot, ScrollOffset, ScrollPhase, ScrollSync};
use egui::{Context, Id};

#[derive(Debug, Clone, Default)]
pub(crate) struct SurfaceMemory {
    lines: LineCache,
    scroll: ScrollSync,
}

impl SurfaceMemory {
    fn load<R>(ctx: &Context, id: Id, f: impl FnOnce(&mut Self) -> R) -> R {
        ctx.data_mut(|d| f(d.get_temp_mut_or_default::<Self>(id)))
    }
}

/// Lines and tokens for `(value, language)`, recomputed only when either
/// differs from the previous call for this widget.
pub(crate) fn snapshot(ctx: &Context, id: Id, value: &str, language: Language) -> Arc<LineSnapshot> {
    SurfaceMemory::load(ctx, id, |m| m.lines.get(value, language))
}

/// Mirrors the input surface's scroll offset and returns the synchronizer
/// after the update.
pub(crate) fn observe_scroll(ctx: &Context, id: Id, offset: ScrollOffset) -> ScrollSync {
    SurfaceMemory::load(ctx, id, |m| {
        let before = m.scroll.phase();
        m.scroll.observe(offset);
        if before != m.scroll.phase() {
            tracing::trace!("Surface {id:?} scroll phase {:?} -> {:?}", before, m.scroll.phase());
        }
        m.scroll
    })
}

/// Cache counters, `(hits, misses)`.
#[cfg(test)]
pub(crate) fn cache_stats(ctx: &Context, id: Id) -> (u64, u64) {
    SurfaceMemory::load(ctx, id, |m| (m.lines.hits(), m.lines.misses()))
}

pub(crate) fn is_scrolling(scroll: &ScrollSync) -> bool {
    scroll.phase() == ScrollPhase::Scrolling
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_memoized_per_widget() {
        let ctx = Context::default();
        let id = Id::new("surface");
        let a = snapshot(&ctx, id, "a\nb", Language::PlainText);
        let b = snapshot(&ctx, id, "a\nb", Language::PlainText);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache_stats(&ctx, id), (1, 1));
    }

    #[test]
    fn test_snapshot_invalidated_by_language_change() {
        let ctx = Context::default();
        let id = Id::new("surface");
        let plain = snapshot(&ctx, id, "SELECT 1", Language::PlainText);
        let sql = snapshot(&ctx, id, "SELECT 1", Language::Sql);
        assert!(!Arc::ptr_eq(&plain, &sql));
        assert_eq!(sql.language, Language::Sql);
        assert_eq!(cache_stats(&ctx, id), (0, 2));
    }

    #[test]
    fn test_widgets_do_not_share_memory() {
        let ctx = Context::default();
        let a = snapshot(&ctx, Id::new("a"), "x", Language::Json);
        let b = snapshot(&ctx, Id::new("b"), "x", Language::Json);
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_observe_scroll_tracks_phase() {
        let ctx = Context::default();
        let id = Id::new("surface");
        let first = observe_scroll(&ctx, id, ScrollOffset::new(0.0, 0.0));
        assert!(!is_scrolling(&first));
        let moved = observe_scroll(&ctx, id, ScrollOffset::new(0.0, 40.0));
        assert!(is_scrolling(&moved));
        assert_eq!(moved.layers().gutter_y, 40.0);
        let settled = observe_scroll(&ctx, id, ScrollOffset::new(0.0, 40.0));
        assert!(!is_scrolling(&settled));
    }
}
