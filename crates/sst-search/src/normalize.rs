//! Turns any list response into one canonical [`Page`].
//!
//! Server-paged bodies pass through untouched. Raw arrays are filtered by the
//! search term and sliced client-side; the requested page is clamped to the
//! last one that exists.

use sst_core::{Envelope, Page, PagedBody, Searchable};

use crate::highlight::contains_ignore_case;

/// Normalize a lookup response, filtering raw rows by their searchable fields.
#[must_use]
pub fn normalize<T: Searchable>(
    envelope: Envelope<T>,
    term: Option<&str>,
    page: u32,
    page_size: u32,
) -> Page<T> {
    normalize_by(envelope, term, page, page_size, T::search_fields)
}

/// Normalize with an explicit field projection. Pass `None` as `term` to page
/// a raw array without filtering it.
#[must_use]
pub fn normalize_by<T, F>(
    envelope: Envelope<T>,
    term: Option<&str>,
    page: u32,
    page_size: u32,
    fields: F,
) -> Page<T>
where
    F: Fn(&T) -> Vec<&str>,
{
    let page_size = page_size.max(1);
    match envelope {
        Envelope::Paged(body) => from_paged(body),
        Envelope::Raw(rows) => {
            let rows = match term.map(str::trim).filter(|t| !t.is_empty()) {
                Some(term) => rows
                    .into_iter()
                    .filter(|row| matches_term(&fields(row), term))
                    .collect(),
                None => rows,
            };
            paginate(rows, page, page_size)
        }
        Envelope::Empty => Page::empty(page_size),
    }
}

/// Whether any field contains `term`, ignoring case.
#[must_use]
pub fn matches_term(fields: &[&str], term: &str) -> bool {
    fields.iter().any(|field| contains_ignore_case(field, term))
}

fn from_paged<T>(body: PagedBody<T>) -> Page<T> {
    Page {
        content: body.content,
        number: body.number,
        size: body.size,
        total_pages: body.total_pages,
        total_elements: body.total_elements,
    }
}

fn paginate<T>(rows: Vec<T>, page: u32, page_size: u32) -> Page<T> {
    let total = rows.len();
    let size = page_size as usize;
    let total_pages = total.div_ceil(size);
    let number = page.min(u32::try_from(total_pages.saturating_sub(1)).unwrap_or(u32::MAX));
    let start = (number as usize).saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);

    Page {
        content: rows.into_iter().skip(start).take(end - start).collect(),
        number,
        size: page_size,
        total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        total_elements: total as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sst_core::{ResourceId, SearchItem};

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }

        fn to_search_item(&self) -> SearchItem {
            SearchItem {
                id: ResourceId::from(self.0),
                primary_label: self.1.to_string(),
                secondary_label: None,
                code: None,
            }
        }
    }

    fn numbers(n: u32) -> Vec<u32> {
        (0..n).collect()
    }

    fn no_fields(_: &u32) -> Vec<&str> {
        Vec::new()
    }

    #[test]
    fn paged_body_passes_through() {
        let body = PagedBody {
            content: vec![1_u32, 2, 3],
            number: 4,
            size: 3,
            total_pages: 9,
            total_elements: 27,
        };
        let page = normalize_by(Envelope::Paged(body), Some("ignored"), 0, 10, no_fields);
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.number, 4);
        assert_eq!(page.total_pages, 9);
        assert_eq!(page.total_elements, 27);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(9, 1)]
    #[case(10, 1)]
    #[case(11, 2)]
    #[case(25, 3)]
    fn raw_total_pages_is_ceiling(#[case] n: u32, #[case] expected: u32) {
        let page = normalize_by(Envelope::Raw(numbers(n)), None, 0, 10, no_fields);
        assert_eq!(page.total_pages, expected);
        assert_eq!(page.total_elements, u64::from(n));
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(10)]
    #[case(23)]
    #[case(40)]
    fn raw_pages_concatenate_to_input(#[case] n: u32) {
        let first = normalize_by(Envelope::Raw(numbers(n)), None, 0, 10, no_fields);
        let all: Vec<u32> = (0..first.total_pages)
            .flat_map(|p| normalize_by(Envelope::Raw(numbers(n)), None, p, 10, no_fields).content)
            .collect();
        assert_eq!(all, numbers(n));
    }

    #[test]
    fn raw_page_past_end_is_clamped() {
        let page = normalize_by(Envelope::Raw(numbers(23)), None, 9, 10, no_fields);
        assert_eq!(page.number, 2);
        assert_eq!(page.content, vec![20, 21, 22]);
        assert!(!page.has_next());
    }

    #[test]
    fn raw_filter_keeps_exactly_matching_rows() {
        let rows = vec![
            Row("1", "Cardiologia"),
            Row("2", "Ortopedia"),
            Row("CARD-3", "Clínica geral"),
            Row("4", "Dermatologia"),
        ];
        let term = "card";
        let page = normalize(Envelope::Raw(rows.clone()), Some(term), 0, 10);

        for row in &rows {
            let kept = page.content.contains(row);
            assert_eq!(kept, matches_term(&row.search_fields(), term), "{row:?}");
        }
        assert_eq!(page.total_elements, 2);
    }

    #[test]
    fn blank_term_does_not_filter() {
        let rows = vec![Row("1", "a"), Row("2", "b")];
        let page = normalize(Envelope::Raw(rows), Some("   "), 0, 10);
        assert_eq!(page.content.len(), 2);
    }

    #[test]
    fn empty_envelope_is_an_empty_page() {
        let page = normalize_by(Envelope::<u32>::Empty, None, 3, 10, no_fields);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.label(), "Página 1 de 1");
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let page = normalize_by(Envelope::Raw(numbers(3)), None, 1, 0, no_fields);
        assert_eq!(page.content, vec![1]);
        assert_eq!(page.total_pages, 3);
    }
}
