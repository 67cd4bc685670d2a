use std::cmp::Ordering;
use std::collections::HashMap;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use tracing::warn;

use crivet_core::Alert;

/// Locale-aware ordering for alert titles.
///
/// Titles are authored in Brazilian Portuguese, so accents and case are
/// compared with Portuguese collation rather than by code point.
struct TitleOrder(Option<Collator>);

impl TitleOrder {
    fn new() -> Self {
        match Collator::try_new(&locale!("pt").into(), CollatorOptions::new()) {
            Ok(collator) => Self(Some(collator)),
            Err(e) => {
                warn!(error = %e, "title collator unavailable, falling back to code point order");
                Self(None)
            }
        }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.0 {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

thread_local! {
    static TITLE_ORDER: TitleOrder = TitleOrder::new();
}

/// Compare two titles with the alert collation.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_ORDER.with(|order| order.compare(a, b))
}

/// Collapse alerts that share an id down to the highest-scoring instance.
///
/// On equal scores the alert seen first wins. The result keeps the order in
/// which each id first appeared.
pub fn dedup_by_id(raw: Vec<Alert>) -> Vec<Alert> {
    let mut position: HashMap<String, usize> = HashMap::with_capacity(raw.len());
    let mut best: Vec<Alert> = Vec::with_capacity(raw.len());

    for alert in raw {
        match position.get(&alert.id) {
            Some(&index) => {
                if alert.score > best[index].score {
                    best[index] = alert;
                }
            }
            None => {
                position.insert(alert.id.clone(), best.len());
                best.push(alert);
            }
        }
    }

    best
}

/// Sort alerts by score (highest first), then by title.
///
/// The sort is stable, so alerts whose titles collate equal keep their
/// relative order.
pub fn sort_alerts(alerts: &mut [Alert]) {
    TITLE_ORDER.with(|order| {
        alerts.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| order.compare(&a.title, &b.title))
        });
    });
}

/// Turn the raw alert multiset into the canonical ordered output.
pub fn rank(raw: Vec<Alert>) -> Vec<Alert> {
    let mut alerts = dedup_by_id(raw);
    sort_alerts(&mut alerts);
    alerts
}
