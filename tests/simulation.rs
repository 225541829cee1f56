use page_table_sim::io::{parse_trace, Config};
use page_table_sim::report::simulate;
use page_table_sim::{Outcome, PagingError, ReplacementPolicy, SimError, VmManager};

fn run(config: &str, trace: &str, debug: bool) -> (String, page_table_sim::Stats) {
    let config = Config::parse(config).unwrap();
    let refs = parse_trace(trace).unwrap();
    let mut out = Vec::new();
    let stats = simulate(&config, &refs, debug, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), stats)
}

const TRACE: &str = "0805 R\n1010 W\n0812 W\n1800 R\n";

#[test]
fn test_fifo_report() {
    let (text, stats) = run("FIFO\n4\n3 5\n", TRACE, false);

    let expected = "\nLine: 0805 R 1 005 F  001805\n\
                    \nLine: 1010 W 2 010 F  002810\n\
                    \nLine: 0812 W 1 012    001812\n\
                    \nLine: 1800 R 3 000 F B 001800\n\
                    \nFinal Page Table:\n\
                    \ni V R M Frames\n\
                    - - - - ------\n\
                    0 0 0 0  0000 \n\
                    1 0 1 1  0003 \n\
                    2 1 1 1  0005 \n\
                    3 1 1 0  0003 \n\
                    4 0 0 0  0000 \n\
                    5 0 0 0  0000 \n\
                    6 0 0 0  0000 \n\
                    7 0 0 0  0000 \n\
                    \nCount of simulations Parameters: 4\n\
                    Count of Memory References: 4\n\
                    Count of Read Operations: 2\n\
                    Count of Write Operations: 2\n\
                    Count of Page Faults: 3\n\
                    Count of Write Backs: 1\n\n";
    assert_eq!(text, expected);

    assert_eq!(stats.references, 4);
    assert_eq!(stats.page_faults, 3);
    assert_eq!(stats.write_backs, 1);
}

#[test]
fn test_clock_report_second_chance() {
    // page 1 is re-referenced after page 2 loads, but the hand clears both
    // bits and comes back round to page 1
    let (text, stats) = run("CLOCK\n4\n3 5\n", TRACE, false);
    assert!(text.contains("Line: 1800 R 3 000 F B 001800\n"));
    assert_eq!(stats.write_backs, 1);
    assert!(text.contains("2 1 0 1  0005 \n"));
}

#[test]
fn test_debug_dumps_every_step() {
    let (text, _) = run("FIFO\n4\n3 5\n", TRACE, true);
    assert!(text.starts_with("\nInitial Page Table:\n\ni V R M Frames\n"));
    // initial + one per reference + final
    assert_eq!(text.matches("i V R M Frames").count(), 6);
}

#[test]
fn test_policy_from_config() {
    let config = Config::parse("clock\n8\n0 1 2 3\n").unwrap();
    assert_eq!(config.policy, ReplacementPolicy::Clock);
}

// pages 0, 1, 2, 3, 0, 4, 0, all reads
const SCENARIO: &str = "0000 R\n0800 R\n1000 R\n1800 R\n0000 R\n2000 R\n0000 R\n";

fn scenario(policy: &str) -> (Vec<page_table_sim::MemoryReference>, Vec<Outcome>) {
    let config = Config::parse(&format!("{}\n4\n0 1 2 3\n", policy)).unwrap();
    let refs = parse_trace(SCENARIO).unwrap();
    let mut vm = VmManager::from_config(&config);
    let outcomes = refs
        .iter()
        .map(|r| vm.resolve(r.address.page_index(), r.operation).unwrap())
        .collect();
    (refs, outcomes)
}

#[test]
fn test_fifo_four_pages_scenario() {
    let (refs, out) = scenario("FIFO");
    assert_eq!(refs[5].address.page, 4);

    let faults: Vec<bool> = out.iter().map(|o| o.faulted).collect();
    assert_eq!(faults, vec![true, true, true, true, false, true, true]);
    assert_eq!(out[5].victim, Some(0));
    assert_eq!(out[5].frame, 0);
    assert_eq!(out[6].victim, Some(1));
    assert_eq!(out[6].frame, 1);
}

#[test]
fn test_clock_four_pages_scenario() {
    let (_, out) = scenario("CLOCK");

    // every bit is set when page 4 arrives, so the hand wraps back to page 0
    assert_eq!(out[5].victim, Some(0));
    assert_eq!(out[5].frame, 0);
    // page 1 lost its bit on that sweep and goes next
    assert_eq!(out[6].victim, Some(1));
    assert_eq!(out[6].frame, 1);
    assert_eq!(out.iter().filter(|o| o.faulted).count(), 6);
}

#[test]
fn test_empty_frame_list_is_fatal() {
    let config = Config {
        policy: ReplacementPolicy::Clock,
        num_pages: 4,
        frames: Vec::new(),
    };
    let refs = parse_trace("0000 R\n").unwrap();
    let mut out = Vec::new();

    let err = simulate(&config, &refs, false, &mut out).unwrap_err();
    assert!(matches!(
        err,
        SimError::Paging {
            index: 0,
            source: PagingError::EmptyResidencyQueue,
        }
    ));
}
