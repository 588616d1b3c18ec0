use crate::commands::BookDraft;
use crate::lookup::LookupHit;

/// Merge a lookup hit into a form draft. The contract is merge, not
/// overwrite: fields the user already filled in stay, with the exception of
/// the cover image, which a successful hit always refreshes (covers are the
/// one thing nobody wants to type by hand). The page count only fills in
/// when it is still unknown, and the series position is only adopted
/// together with the series name itself.
pub fn apply_hit(draft: &mut BookDraft, hit: &LookupHit) {
    if draft.author.is_empty() {
        if let Some(author) = &hit.author {
            draft.author = author.clone();
        }
    }

    if let Some(cover) = &hit.cover_url {
        draft.cover_url = cover.clone();
    }

    if draft.total_pages == 0 {
        if let Some(pages) = hit.total_pages {
            draft.total_pages = pages;
        }
    }

    if draft.series.is_empty() {
        if let Some(series) = &hit.series {
            draft.series = series.clone();
            if let Some(order) = hit.series_order {
                draft.series_order = order;
            }
        }
    }
}
