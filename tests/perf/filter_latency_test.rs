use std::time::Instant;

use crate::history::HistoryList;
use crate::search::filter;

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

#[test]
fn full_history_filter_p95_under_5ms() {
    let entries: Vec<String> = (0..200)
        .map(|i| format!("ssh deploy@host-{i:03}.internal -p 22{i:03}"))
        .collect();
    let history = HistoryList::from_entries(&entries, 200);
    assert_eq!(history.len(), 200);

    for _ in 0..30 {
        let _ = filter(&history, "DEPLOY host-19 internal");
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(80);
        for _ in 0..80 {
            let start = Instant::now();
            let matched = filter(&history, "DEPLOY host-19 internal");
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
            assert_eq!(matched.len(), 10);
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 5.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 5.0ms); batches={batch_p95:?}",
    );
}
