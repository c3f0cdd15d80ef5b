use neuroscan::ledger::{
    CompareSelection, ConditionFilter, HistoryStore, MemoryStore, SessionLedger, HISTORY_KEY,
};
use neuroscan::session::{AnalysisSession, Condition, RiskLevel};

fn session(condition: Condition, name: &str) -> AnalysisSession {
    let outcome_probability = match condition {
        Condition::Alzheimers => 0.87,
        Condition::Parkinsons => 0.82,
        Condition::BrainTumor => 0.94,
    };
    AnalysisSession::new(condition, name, outcome_probability, "mock prediction")
}

#[test]
fn append_puts_the_newest_session_first() {
    let mut ledger = SessionLedger::new();
    ledger.append(session(Condition::Alzheimers, "scan_001.nii"));
    let newest = session(Condition::BrainTumor, "scan_002.dcm");
    let newest_id = newest.id;
    ledger.append(newest);

    let all = ledger.filter(ConditionFilter::All);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, newest_id);
}

#[test]
fn filter_by_condition_preserves_ledger_order() {
    let mut ledger = SessionLedger::new();
    ledger.append(session(Condition::Alzheimers, "a.nii"));
    ledger.append(session(Condition::Parkinsons, "b.nii"));
    ledger.append(session(Condition::Alzheimers, "c.nii"));

    let filtered = ledger.filter(ConditionFilter::Only(Condition::Alzheimers));
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].source_name, "c.nii"); // newest first
    assert_eq!(filtered[1].source_name, "a.nii");

    assert!(ledger
        .filter(ConditionFilter::Only(Condition::BrainTumor))
        .is_empty());
}

#[test]
fn remove_is_a_silent_idempotent_no_op_for_unknown_ids() {
    let mut ledger = SessionLedger::new();
    let victim = session(Condition::Parkinsons, "gone.nii");
    let victim_id = victim.id;
    ledger.append(victim);
    ledger.append(session(Condition::Alzheimers, "kept.nii"));

    ledger.remove(victim_id);
    assert!(ledger
        .filter(ConditionFilter::All)
        .iter()
        .all(|s| s.id != victim_id));
    assert_eq!(ledger.len(), 1);

    // Second remove of the same id: nothing happens, nothing panics.
    ledger.remove(victim_id);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn clear_empties_the_ledger() {
    let mut ledger = SessionLedger::new();
    ledger.append(session(Condition::BrainTumor, "x.nii"));
    ledger.append(session(Condition::Alzheimers, "y.nii"));

    ledger.clear();
    assert!(ledger.is_empty());
    assert!(ledger.filter(ConditionFilter::All).is_empty());
}

#[test]
fn ledger_round_trips_through_the_store() {
    let mut store = MemoryStore::new();
    let mut ledger = SessionLedger::new();
    ledger.append(session(Condition::Alzheimers, "first.nii"));
    ledger.append(session(Condition::BrainTumor, "second.dcm"));
    let ids: Vec<_> = ledger.sessions().iter().map(|s| s.id).collect();

    assert!(ledger.is_dirty());
    ledger.save_to(&mut store);
    assert!(!ledger.is_dirty());

    let reloaded = SessionLedger::load(&store);
    let reloaded_ids: Vec<_> = reloaded.sessions().iter().map(|s| s.id).collect();
    assert_eq!(reloaded_ids, ids);
    assert_eq!(reloaded.sessions()[0].source_name, "second.dcm");
    assert_eq!(reloaded.sessions()[0].condition, Condition::BrainTumor);
}

#[test]
fn missing_stored_value_loads_as_empty() {
    let store = MemoryStore::new();
    let ledger = SessionLedger::load(&store);
    assert!(ledger.is_empty());
}

#[test]
fn malformed_stored_value_loads_as_empty() {
    let mut store = MemoryStore::new();
    store.write(HISTORY_KEY, "{not valid json]".to_owned());
    let ledger = SessionLedger::load(&store);
    assert!(ledger.is_empty());

    // A loaded-empty ledger is usable as normal afterwards.
    let mut ledger = ledger;
    ledger.append(session(Condition::Parkinsons, "fresh.nii"));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn risk_banding_matches_probability() {
    let mut high = session(Condition::BrainTumor, "h.nii");
    high.probability = 0.94;
    assert_eq!(high.risk(), RiskLevel::High);

    let mut moderate = session(Condition::Alzheimers, "m.nii");
    moderate.probability = 0.6;
    assert_eq!(moderate.risk(), RiskLevel::Moderate);

    let mut low = session(Condition::Parkinsons, "l.nii");
    low.probability = 0.3;
    assert_eq!(low.risk(), RiskLevel::Low);
}

#[test]
fn compare_selection_evicts_the_oldest_pick() {
    let (a, b, c) = (
        uuid::Uuid::new_v4(),
        uuid::Uuid::new_v4(),
        uuid::Uuid::new_v4(),
    );
    let mut selection = CompareSelection::new();
    selection.toggle(a);
    selection.toggle(b);
    assert_eq!(selection.pair(), Some((a, b)));

    // Third pick slides the window: A drops, B and C remain.
    selection.toggle(c);
    assert_eq!(selection.pair(), Some((b, c)));
    assert!(!selection.contains(a));
}

#[test]
fn compare_selection_toggles_off_a_selected_id() {
    let (a, b) = (uuid::Uuid::new_v4(), uuid::Uuid::new_v4());
    let mut selection = CompareSelection::new();
    selection.toggle(a);
    selection.toggle(b);
    selection.toggle(a);

    assert_eq!(selection.len(), 1);
    assert!(selection.contains(b));
    assert!(selection.pair().is_none());
}
