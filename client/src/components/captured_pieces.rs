//! Captured-pieces display.
//!
//! Pure presentation over [`pieces::render_captured`]: two labeled rows, a
//! `None` placeholder for an empty side, one glyph per captured piece in
//! capture order.

use leptos::prelude::*;
use pieces::{CapturedCollection, CapturedRow, GlyphCell, NONE_SENTINEL, RowContent, render_captured};

/// Both captured collections, Black's losses first under "Captured by White".
#[component]
pub fn CapturedPieces(
    #[prop(into)] captured_white: Signal<CapturedCollection>,
    #[prop(into)] captured_black: Signal<CapturedCollection>,
) -> impl IntoView {
    let rows = move || render_captured(captured_white.get().as_slice(), captured_black.get().as_slice());

    view! {
        <div class="captured-pieces">
            {move || rows().into_iter().map(|row| view! { <CapturedSection row/> }).collect_view()}
        </div>
    }
}

#[component]
fn CapturedSection(row: CapturedRow) -> impl IntoView {
    let body = match row.content {
        RowContent::Empty => view! { <span class="no-pieces">{NONE_SENTINEL}</span> }.into_any(),
        RowContent::Glyphs(cells) => cells
            .into_iter()
            .map(|cell: GlyphCell| {
                view! { <span class="captured-piece" data-index=cell.key.to_string()>{cell.glyph.to_string()}</span> }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="captured-section">
            <h4>{row.label}</h4>
            <div class="pieces-row">{body}</div>
        </div>
    }
}
