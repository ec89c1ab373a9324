use contact_triage::triage::domain::DEFAULT_RANGE_KM;
use contact_triage::triage::{
    ContactImporter, Identity, IngestError, Recommendation, RejectReason, TriageConfig,
    TriageEngine,
};

fn engine() -> TriageEngine {
    TriageEngine::new(TriageConfig::default())
}

fn ids(run: &contact_triage::triage::TriageRun) -> Vec<&str> {
    run.ranked
        .iter()
        .map(|row| row.contact.id.as_str())
        .collect()
}

#[test]
fn foe_outranks_friend_and_friend_is_ignored() {
    let input = "A,FOE,10,150,1000,5\nB,FRIEND,10,150,1000,5\n";

    let run = ContactImporter::from_text(input, &engine()).expect("run succeeds");

    assert_eq!(ids(&run), vec!["A", "B"]);
    assert!(run.ranked[0].score > run.ranked[1].score);
    assert_eq!(run.ranked[1].recommendation, Recommendation::IgnoreFriend);
}

#[test]
fn inbound_foe_inside_intercept_envelope_is_intercepted() {
    let run = ContactImporter::from_text("C,FOE,20,150,1000,5\n", &engine()).expect("run succeeds");

    let row = &run.ranked[0];
    assert!(row.score > 120.0, "score {} should exceed 120", row.score);
    assert_eq!(row.recommendation, Recommendation::Intercept);
}

#[test]
fn short_rows_are_dropped_without_affecting_the_rest() {
    let input = "A,FOE,10,150,1000,5\nshort,FOE,10\nD,U,30,50,2000,1\n";

    let run = ContactImporter::from_text(input, &engine()).expect("run succeeds");

    assert_eq!(ids(&run), vec!["A", "D"]);
    assert_eq!(run.rejected.len(), 1);
    assert_eq!(run.rejected[0].line, 2);
    assert_eq!(
        run.rejected[0].reason,
        RejectReason::TooFewFields { found: 3 }
    );
}

#[test]
fn unknown_identity_rows_are_dropped_not_defaulted() {
    let input = "A,FOE,10,150,1000,5\nX,XYZ,10,150,1000,5\n";

    let run = ContactImporter::from_text(input, &engine()).expect("run succeeds");

    assert_eq!(ids(&run), vec!["A"]);
    assert!(run
        .ranked
        .iter()
        .all(|row| row.contact.identity != Identity::Unknown));
    assert_eq!(
        run.rejected[0].reason,
        RejectReason::UnknownIdentity {
            token: "XYZ".to_string()
        }
    );
}

#[test]
fn unparseable_range_is_kept_with_the_sentinel_and_ranks_lowest() {
    let input = "near,FOE,10,150,1000,5\nbroken,FOE,abc,150,1000,5\nfar,FOE,400,150,1000,5\n";

    let run = ContactImporter::from_text(input, &engine()).expect("run succeeds");

    assert_eq!(ids(&run), vec!["near", "far", "broken"]);
    let broken = &run.ranked[2];
    assert_eq!(broken.contact.range_km, DEFAULT_RANGE_KM);
    assert!(run
        .ranked
        .iter()
        .all(|row| broken.breakdown.range <= row.breakdown.range));
}

#[test]
fn swapping_equal_score_rows_swaps_their_output_order() {
    let forward = "first,U,40,100,5000,2\nsecond,U,40,100,5000,2\n";
    let reversed = "second,U,40,100,5000,2\nfirst,U,40,100,5000,2\n";

    let forward = ContactImporter::from_text(forward, &engine()).expect("run succeeds");
    let reversed = ContactImporter::from_text(reversed, &engine()).expect("run succeeds");

    assert_eq!(ids(&forward), vec!["first", "second"]);
    assert_eq!(ids(&reversed), vec!["second", "first"]);
    assert_eq!(forward.ranked[0].rank, 1);
    assert_eq!(forward.ranked[1].rank, 2);
}

#[test]
fn blank_and_comment_only_input_is_an_empty_result() {
    let input = "\n   \n# nothing on the scope\n\t# still nothing\n";

    match ContactImporter::from_text(input, &engine()) {
        Err(IngestError::NoContacts { rejected }) => assert_eq!(rejected, 0),
        other => panic!("expected no contacts, got {other:?}"),
    }
}

#[test]
fn header_only_input_is_an_empty_result() {
    let input = "id,iff,range_km,closing_mps,altitude_m,rcs_m2\n";

    match ContactImporter::from_text(input, &engine()) {
        Err(IngestError::NoContacts { .. }) => {}
        other => panic!("expected no contacts, got {other:?}"),
    }
}

#[test]
fn missing_source_is_reported_as_unavailable() {
    let path = std::env::temp_dir().join("contact-triage-does-not-exist.csv");

    match ContactImporter::from_path(&path, &engine()) {
        Err(IngestError::SourceUnavailable { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected unavailable source, got {other:?}"),
    }
}

#[test]
fn bundled_sample_ranks_the_full_air_picture() {
    let data = include_bytes!("../sample_contacts.csv");

    let run = ContactImporter::from_reader(&data[..], &engine()).expect("sample imports");

    assert!(run.header_skipped);
    assert_eq!(
        ids(&run),
        vec![
            "TRK-204", "BANDIT7", "TRK-412", "TRK-600", "BOGEY01", "TRK-311", "VIPER11", "HAWK02",
            "TRK-518",
        ]
    );

    let recommendations: Vec<Recommendation> =
        run.ranked.iter().map(|row| row.recommendation).collect();
    assert_eq!(
        recommendations,
        vec![
            Recommendation::Intercept,
            Recommendation::Intercept,
            Recommendation::Monitor,
            Recommendation::Monitor,
            Recommendation::ElevatedMonitor,
            Recommendation::Monitor,
            Recommendation::IgnoreFriend,
            Recommendation::IgnoreFriend,
            Recommendation::Monitor,
        ]
    );

    let rejected_lines: Vec<usize> = run.rejected.iter().map(|row| row.line).collect();
    assert_eq!(rejected_lines, vec![14, 15]);
}

#[test]
fn quote_characters_do_not_group_fields() {
    let input = "A,FOE,10,150,1000,5\n\
B,\"FOE\",10,150,1000,5\n\
\"C,FOE,10,150,1000,5\n\
\"D,E\",FOE,10,150,1000,5\n";

    let run = ContactImporter::from_text(input, &engine()).expect("run succeeds");

    let mut accepted = ids(&run);
    accepted.sort_unstable();
    assert_eq!(accepted, vec!["\"C", "A"]);
    let rejected_lines: Vec<usize> = run.rejected.iter().map(|row| row.line).collect();
    assert_eq!(rejected_lines, vec![2, 4]);
    assert!(run.rejected.iter().all(|row| matches!(
        row.reason,
        RejectReason::UnknownIdentity { .. }
    )));
}
