//! End-to-end solving through the public API.

use std::collections::BTreeSet;

use u_crossword::csp::{
    ac3, assignment_complete, consistent, enforce_node_consistency, DomainStore, SolverConfig,
    SolverRunner, SolverStatus,
};
use u_crossword::puzzle::{Crossword, Direction, Puzzle, Variable};

const STRUCTURE0: &str = include_str!("../data/structure0.txt");
const WORDS0: &str = include_str!("../data/words0.txt");

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_structure0_renders_known_fill() {
    init_logging();
    let crossword = Crossword::parse(STRUCTURE0, WORDS0).unwrap();

    let assignment = u_crossword::solve(&crossword).unwrap().expect("solvable");

    assert_eq!(
        crossword.render(&assignment),
        "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE\n"
    );
}

#[test]
fn test_crossing_pair_shares_letter() {
    init_logging();
    let crossword = Crossword::parse("___\n#_#\n#_#", "CAT\nDOG\nACE").unwrap();
    let a = Variable::new(0, 0, Direction::Across, 3);
    let b = Variable::new(0, 1, Direction::Down, 3);

    let result = SolverRunner::run(&crossword, &SolverConfig::default()).unwrap();
    let assignment = result.assignment.expect("solvable");

    let across = assignment.get(&a).unwrap();
    let down = assignment.get(&b).unwrap();
    assert_eq!(across.chars().nth(1), down.chars().next());
    assert!(
        (across, down) == ("ACE", "CAT") || (across, down) == ("CAT", "ACE"),
        "unexpected fill {across}/{down}"
    );
}

#[test]
fn test_missing_length_fails_before_search() {
    init_logging();
    let crossword = Crossword::parse(STRUCTURE0, "six\nten\nnine\nfive").unwrap();

    let result = SolverRunner::run(&crossword, &SolverConfig::default()).unwrap();

    assert_eq!(result.status, SolverStatus::Unsatisfiable);
    assert_eq!(result.stats.nodes, 0);
    assert!(u_crossword::solve(&crossword).unwrap().is_none());
}

#[test]
fn test_disconnected_slots_use_distinct_words() {
    init_logging();
    let crossword = Crossword::parse("____\n####\n____\n####\n____", "ABCD\nWXYZ\nMNOP").unwrap();
    let mut domains = DomainStore::new(crossword.variables(), crossword.vocabulary());
    enforce_node_consistency(&mut domains);
    let before = domains.clone();

    assert!(ac3(&crossword, &mut domains, None).unwrap());
    assert_eq!(domains, before, "AC-3 should not prune unconnected slots");

    let assignment = u_crossword::solve(&crossword).unwrap().expect("solvable");
    let placed: BTreeSet<&str> = assignment.iter().map(|(_, w)| w).collect();
    assert_eq!(placed.len(), 3);
    assert!(assignment_complete(&domains, &assignment));
}

#[test]
fn test_seeded_and_mac_configs_agree_on_solvability() {
    init_logging();
    let crossword = Crossword::parse(STRUCTURE0, WORDS0).unwrap();

    for config in [
        SolverConfig::default().with_seed(1),
        SolverConfig::default().with_seed(99),
        SolverConfig::default().with_maintain_arc_consistency(true),
    ] {
        let result = SolverRunner::run(&crossword, &config).unwrap();
        assert!(result.is_solution_found(), "{config:?} found nothing");
        assert!(consistent(&crossword, result.assignment.as_ref().unwrap()));
    }
}

#[test]
fn test_from_files() {
    init_logging();
    let data = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let words = data.join("words0.txt");

    let crossword = Crossword::from_files(data.join("structure0.txt"), &words).unwrap();
    assert_eq!(crossword.variables().len(), 4);
    assert_eq!(crossword.vocabulary().len(), 10);

    assert!(Crossword::from_files(data.join("missing.txt"), &words).is_err());
}
