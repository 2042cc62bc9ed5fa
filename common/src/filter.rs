//! 絞り込み条件
//!
//! 検索語・国・アワード・レビュー状態の全条件をANDで判定する。

use crate::review::ReviewState;
use crate::types::{Record, StatusFilter};
use crate::view::ViewState;

/// レコードが現在の条件をすべて満たすか
pub fn matches(record: &Record, view: &ViewState, review: &ReviewState) -> bool {
    if !view.search.is_empty() {
        let text = record.search_text().to_lowercase();
        if !text.contains(&view.search.to_lowercase()) {
            return false;
        }
    }
    if !view.country.is_empty() && record.country != view.country {
        return false;
    }
    if !view.award.is_empty() && record.award != view.award {
        return false;
    }
    match view.status {
        StatusFilter::All => true,
        StatusFilter::Seen => review.contains(&record.id),
        StatusFilter::Unseen => !review.contains(&record.id),
    }
}

/// 条件を満たすレコードを元の順序のまま抽出
pub fn filter_records<'a>(
    records: &'a [Record],
    view: &ViewState,
    review: &ReviewState,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| matches(r, view, review))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, restaurant: &str, country: &str, award: &str) -> Record {
        Record {
            id: id.into(),
            restaurant: restaurant.into(),
            country: country.into(),
            award: award.into(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("1", "Enoteca Pinchiorri", "Italy", "Grand Award"),
            record("2", "Il Pagliaccio", "Italy", "Best of Award of Excellence"),
            record("3", "Taillevent", "France", "Grand Award"),
            Record {
                id: "4".into(),
                restaurant: "Canlis".into(),
                city: "Seattle".into(),
                sommelier: "Nelson Daquip".into(),
                country: "USA".into(),
                award: "Grand Award".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_empty_view_matches_everything() {
        let records = sample();
        let view = ViewState::default();
        let review = ReviewState::default();
        assert_eq!(filter_records(&records, &view, &review).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_over_people_and_city() {
        let records = sample();
        let review = ReviewState::default();
        let mut view = ViewState::default();

        view.search = "DAQUIP".into();
        let ids: Vec<_> = filter_records(&records, &view, &review).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["4"]);

        view.search = "seattle".into();
        assert_eq!(filter_records(&records, &view, &review).len(), 1);
    }

    #[test]
    fn test_search_ignores_country_and_award() {
        let records = sample();
        let review = ReviewState::default();
        let view = ViewState {
            search: "italy".into(),
            ..Default::default()
        };
        assert!(filter_records(&records, &view, &review).is_empty());
    }

    #[test]
    fn test_search_spans_field_boundary() {
        // 連結テキストに対する部分一致なのでフィールド境界をまたぐ
        let records = sample();
        let review = ReviewState::default();
        let view = ViewState {
            search: "canlis seattle".into(),
            ..Default::default()
        };
        assert_eq!(filter_records(&records, &view, &review).len(), 1);
    }

    #[test]
    fn test_country_and_award_combined() {
        let records = sample();
        let review = ReviewState::default();
        let view = ViewState {
            country: "Italy".into(),
            award: "Grand Award".into(),
            ..Default::default()
        };
        let result = filter_records(&records, &view, &review);
        assert_eq!(result.len(), 1);
        assert!(result.iter().all(|r| r.country == "Italy" && r.award == "Grand Award"));
    }

    #[test]
    fn test_country_is_exact_match() {
        let records = sample();
        let review = ReviewState::default();
        let view = ViewState {
            country: "ital".into(),
            ..Default::default()
        };
        assert!(filter_records(&records, &view, &review).is_empty());
    }

    #[test]
    fn test_status_filters() {
        let records = sample();
        let mut review = ReviewState::default();
        review.toggle("2");
        review.toggle("4");

        let mut view = ViewState {
            status: StatusFilter::Seen,
            ..Default::default()
        };
        let seen: Vec<_> = filter_records(&records, &view, &review).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(seen, vec!["2", "4"]);

        view.status = StatusFilter::Unseen;
        let unseen: Vec<_> = filter_records(&records, &view, &review).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(unseen, vec!["1", "3"]);
    }

    #[test]
    fn test_filter_preserves_original_order() {
        let records = sample();
        let review = ReviewState::default();
        let view = ViewState {
            award: "Grand Award".into(),
            ..Default::default()
        };
        let ids: Vec<_> = filter_records(&records, &view, &review).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }
}
