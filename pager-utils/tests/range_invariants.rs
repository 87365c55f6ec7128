use pager_utils::pagination::{
    ClampNotifier, PageToken, PaginationRequest, PaginationResult, compute_range,
};

fn sweep() -> impl Iterator<Item = PaginationRequest> {
    (-2..=25).flat_map(|total| {
        (-2..=28).flat_map(move |current| {
            (-1..=3).flat_map(move |siblings| {
                [None, Some(0), Some(4), Some(12)].into_iter().map(move |max_pages| {
                    PaginationRequest::new(current, total)
                        .sibling_count(siblings)
                        .max_pages(max_pages)
                })
            })
        })
    })
}

fn numbers(result: &PaginationResult) -> Vec<usize> {
    result.tokens.iter().filter_map(|token| token.page()).collect()
}

#[test]
fn numeric_tokens_strictly_ascend() {
    for request in sweep() {
        let result = compute_range(request);
        let pages = numbers(&result);
        assert!(
            pages.windows(2).all(|pair| pair[0] < pair[1]),
            "{request:?} -> {:?}",
            result.tokens
        );
    }
}

#[test]
fn ellipses_are_never_adjacent_and_never_at_the_edges() {
    for request in sweep() {
        let result = compute_range(request);
        assert!(
            result
                .tokens
                .windows(2)
                .all(|pair| pair != [PageToken::Ellipsis, PageToken::Ellipsis]),
            "{request:?} -> {:?}",
            result.tokens
        );
        assert_ne!(result.tokens.first(), Some(&PageToken::Ellipsis));
        assert_ne!(result.tokens.last(), Some(&PageToken::Ellipsis));
        assert!(result.tokens.iter().filter(|t| **t == PageToken::Ellipsis).count() <= 2);
    }
}

#[test]
fn anchors_and_current_are_always_visible() {
    for request in sweep() {
        let result = compute_range(request);
        if result.total == 0 {
            assert!(result.tokens.is_empty());
            continue;
        }

        let pages = numbers(&result);
        assert_eq!(pages.first(), Some(&1), "{request:?}");
        assert_eq!(pages.last(), Some(&result.total), "{request:?}");
        assert!(pages.contains(&result.current), "{request:?}");
        assert!((1..=result.total).contains(&result.current));
    }
}

#[test]
fn ellipses_only_hide_pages() {
    for request in sweep() {
        let result = compute_range(request);
        for (index, token) in result.tokens.iter().enumerate() {
            if *token != PageToken::Ellipsis {
                continue;
            }
            let before = result.tokens[index - 1].page().expect("numeric before gap");
            let after = result.tokens[index + 1].page().expect("numeric after gap");
            assert!(after > before + 1, "{request:?} -> {:?}", result.tokens);
        }
    }
}

#[test]
fn no_collapsing_when_slots_cover_total() {
    for request in sweep() {
        let result = compute_range(request);
        let slots = usize::try_from(request.sibling_count.max(0)).unwrap() * 2 + 5;
        if result.total <= slots {
            assert_eq!(numbers(&result), (1..=result.total).collect::<Vec<_>>());
            assert_eq!(result.tokens.len(), result.total);
        }
    }
}

#[test]
fn collapsed_controls_keep_a_constant_width() {
    for request in sweep() {
        let result = compute_range(request);
        let siblings = usize::try_from(request.sibling_count.max(0)).unwrap();
        if result.tokens.contains(&PageToken::Ellipsis) {
            assert_eq!(result.tokens.len(), siblings * 2 + 5, "{request:?}");
        }
    }
}

#[test]
fn correction_is_reported_exactly_when_clamped() {
    for request in sweep() {
        let result = compute_range(request);
        let clamped = result.total > 0 && request.current != result.current as i64;
        assert_eq!(result.corrected_current.is_some(), clamped, "{request:?}");

        let mut notifier = ClampNotifier::new();
        assert_eq!(notifier.observe(&result), result.corrected_current);
        assert_eq!(notifier.observe(&compute_range(request)), None);
    }
}
