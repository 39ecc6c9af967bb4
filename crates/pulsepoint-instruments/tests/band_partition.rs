//! Every instrument's band table must partition its score domain: each
//! integer total from 0 to the maximum matches exactly one band, with no
//! gaps and no overlaps. The same holds for any configured cluster tables.

use pulsepoint_instruments::all_instruments;
use pulsepoint_instruments::interpret::verify_bands;

#[test]
fn every_instrument_partitions_its_score_domain() {
    for instrument in all_instruments() {
        verify_bands(instrument.as_ref()).unwrap_or_else(|e| {
            panic!("band table for {} is not a partition: {e}", instrument.id())
        });
    }
}

#[test]
fn registry_ids_are_unique() {
    let instruments = all_instruments();
    let mut ids: Vec<&str> = instruments.iter().map(|i| i.id()).collect();
    ids.sort();
    let before = ids.len();
    ids.dedup();
    assert_eq!(before, ids.len());
}

#[test]
fn item_positions_are_dense_and_ordered() {
    for instrument in all_instruments() {
        for (expected, item) in instrument.items().iter().enumerate() {
            assert_eq!(
                item.position,
                expected,
                "{}: item positions must be 0-based and dense",
                instrument.id()
            );
        }
    }
}

#[test]
fn cluster_members_are_in_range_and_disjoint() {
    for instrument in all_instruments() {
        let item_count = instrument.items().len();
        let mut seen = vec![false; item_count];
        for cluster in instrument.clusters() {
            for &position in &cluster.items {
                assert!(
                    position < item_count,
                    "{}: cluster {} references item {position} out of range",
                    instrument.id(),
                    cluster.id
                );
                assert!(
                    !seen[position],
                    "{}: item {position} appears in more than one cluster",
                    instrument.id()
                );
                seen[position] = true;
            }
        }
    }
}

#[test]
fn max_scores_match_published_ranges() {
    let expected = [
        ("pcl5", 80),
        ("ace", 10),
        ("pc_ptsd5", 5),
        ("tsq", 10),
        ("btq", 10),
        ("ctsq", 10),
        ("lec5", 17),
        ("cd_risc10", 40),
        ("phq9", 27),
        ("gad7", 21),
        ("iesr", 88),
    ];
    for (id, max) in expected {
        let instrument = pulsepoint_instruments::get_instrument(id).unwrap();
        assert_eq!(instrument.max_score(), max, "{id}");
    }
}
