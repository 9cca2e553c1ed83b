use std::time::Duration;

use pregame_common::config::Config;
use pregame_common::error::{ChangeStep, ConfigurationError, DiscoveryError, PregameError};
use pregame_common::events::RunEvent;
use pregame_common::network::oui::{Classification, Oui};
use pregame_common::operator::Replacement;
use pregame_core::orchestrator::{PregameService, RunOutcome};

use crate::support::{FakeRunner, NoVendors, RecordingSink, RecordingSleeper, ScriptedOperator, mac};

const BACKOFF: Duration = Duration::from_secs(2);

struct Harness {
    runner: FakeRunner,
    sleeper: RecordingSleeper,
    sink: RecordingSink,
    service: PregameService,
}

fn harness(runner: FakeRunner, config: Config) -> Harness {
    let sleeper = RecordingSleeper::default();
    let sink = RecordingSink::default();
    let service = PregameService::new(
        config,
        Box::new(runner.clone()),
        Box::new(sleeper.clone()),
        Box::new(sink.clone()),
        Box::new(NoVendors),
    );
    Harness {
        runner,
        sleeper,
        sink,
        service,
    }
}

fn default_config() -> Config {
    Config::builder().backoff(BACKOFF).build().unwrap()
}

fn single_good_prefix() -> Config {
    Config::builder()
        .good_ouis(vec!["9c:73:b1".parse::<Oui>().unwrap()])
        .backoff(BACKOFF)
        .build()
        .unwrap()
}

#[test]
fn good_address_is_left_alone() {
    let h = harness(FakeRunner::with_interface("wlan0", "64:1b:2f:aa:bb:cc"), default_config());
    let mut operator = ScriptedOperator::new("wlan0", vec![]);

    let outcome = h.service.run(&mut operator).unwrap();

    match outcome {
        RunOutcome::NoChangeNeeded { interface, current } => {
            assert_eq!(interface, "wlan0");
            assert_eq!(current.address, mac("64:1b:2f:aa:bb:cc"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(!operator.asked_for_replacement);
    assert!(h.runner.mutations().is_empty());
    assert!(h.sleeper.sleeps().is_empty());
    assert!(h.sink.events().contains(&RunEvent::Classified {
        interface: "wlan0".into(),
        address: mac("64:1b:2f:aa:bb:cc"),
        classification: Classification::Good,
        flagged: false,
        vendor: None,
    }));
}

#[test]
fn bad_address_is_replaced_with_a_generated_one() {
    let h = harness(FakeRunner::with_interface("wlan0", "00:c0:ca:11:22:33"), single_good_prefix());
    let mut operator = ScriptedOperator::new("wlan0", vec![Replacement::Generate]);

    let outcome = h.service.run(&mut operator).unwrap();

    let new = match outcome {
        RunOutcome::Changed { new, attempts, previous, .. } => {
            assert_eq!(attempts, 1);
            assert_eq!(previous.address, mac("00:c0:ca:11:22:33"));
            new.address
        }
        other => panic!("unexpected outcome: {other:?}"),
    };

    assert_eq!(new.oui().to_string(), "9c:73:b1");
    assert_eq!(h.runner.address_of("wlan0"), Some(new));
    assert!(h.runner.is_up("wlan0"));
    assert_eq!(
        h.runner.mutations(),
        ["down wlan0".to_string(), format!("set wlan0 {new}"), "up wlan0".to_string()]
    );
    assert!(h.sleeper.sleeps().is_empty());

    let events = h.sink.events();
    assert!(events.contains(&RunEvent::Classified {
        interface: "wlan0".into(),
        address: mac("00:c0:ca:11:22:33"),
        classification: Classification::Bad,
        flagged: true,
        vendor: None,
    }));
    assert!(events.contains(&RunEvent::ReplacementChosen {
        address: new,
        generated: true,
    }));
    assert!(events.contains(&RunEvent::AttemptSucceeded {
        interface: "wlan0".into(),
        address: new,
        attempt: 1,
    }));
}

#[test]
fn manual_replacement_is_applied_verbatim() {
    let h = harness(FakeRunner::with_interface("wlan1", "de:ad:be:ef:00:01"), default_config());
    let mut operator = ScriptedOperator::new("wlan1", vec![Replacement::Manual(mac("38:8a:06:01:02:03"))]);

    let outcome = h.service.run(&mut operator).unwrap();

    assert!(matches!(outcome, RunOutcome::Changed { attempts: 1, .. }));
    assert_eq!(h.runner.address_of("wlan1"), Some(mac("38:8a:06:01:02:03")));
    assert!(h.sink.events().contains(&RunEvent::ReplacementChosen {
        address: mac("38:8a:06:01:02:03"),
        generated: false,
    }));
}

#[test]
fn unknown_prefix_is_bad_but_not_flagged() {
    let h = harness(FakeRunner::with_interface("wlan0", "de:ad:be:ef:00:01"), default_config());
    let mut operator = ScriptedOperator::new("wlan0", vec![Replacement::Generate]);

    h.service.run(&mut operator).unwrap();

    assert_eq!(
        h.sink.count(|event| matches!(
            event,
            RunEvent::Classified {
                classification: Classification::Bad,
                flagged: false,
                ..
            }
        )),
        1
    );
}

#[test]
fn change_succeeds_on_second_attempt() {
    let runner = FakeRunner::with_interface("wlan0", "9c:ef:d5:00:00:01").failing_changes(1);
    let h = harness(runner, single_good_prefix());
    let mut operator = ScriptedOperator::new("wlan0", vec![Replacement::Generate]);

    let outcome = h.service.run(&mut operator).unwrap();

    assert!(matches!(outcome, RunOutcome::Changed { attempts: 2, .. }));
    assert_eq!(h.sleeper.sleeps(), [BACKOFF]);
    assert_eq!(h.sink.count(|event| matches!(event, RunEvent::AttemptFailed { .. })), 1);
    assert!(h.runner.is_up("wlan0"));
}

#[test]
fn gives_up_after_retry_limit() {
    let runner = FakeRunner::with_interface("wlan0", "00:c0:ca:11:22:33").failing_changes(10);
    let h = harness(runner, single_good_prefix());
    let mut operator = ScriptedOperator::new("wlan0", vec![Replacement::Generate]);

    let outcome = h.service.run(&mut operator).unwrap();

    match outcome {
        RunOutcome::ChangeFailed { interface, failure, .. } => {
            assert_eq!(interface, "wlan0");
            assert_eq!(failure.attempts.len(), 3);
            assert!(failure.attempts.iter().all(|attempt| !attempt.succeeded()));
            let numbers: Vec<u32> = failure.attempts.iter().map(|attempt| attempt.number).collect();
            assert_eq!(numbers, [1, 2, 3]);
            assert!(failure
                .attempts
                .iter()
                .all(|attempt| attempt.error.as_ref().is_some_and(|e| e.step == ChangeStep::SetAddress)));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert_eq!(h.runner.address_of("wlan0"), Some(mac("00:c0:ca:11:22:33")));
    assert_eq!(h.sleeper.sleeps(), [BACKOFF; 3]);
    assert_eq!(h.sink.count(|event| matches!(event, RunEvent::AttemptFailed { .. })), 3);
    assert!(h.sink.events().contains(&RunEvent::GaveUp {
        interface: "wlan0".into(),
        attempts: 3,
    }));
}

#[test]
fn retry_limit_is_configurable() {
    let runner = FakeRunner::with_interface("wlan0", "00:c0:ca:11:22:33").failing_changes(10);
    let config = Config::builder().retry_limit(1).backoff(BACKOFF).build().unwrap();
    let h = harness(runner, config);
    let mut operator = ScriptedOperator::new("wlan0", vec![Replacement::Generate]);

    let outcome = h.service.run(&mut operator).unwrap();

    assert!(matches!(outcome, RunOutcome::ChangeFailed { ref failure, .. } if failure.attempts.len() == 1));
    assert_eq!(h.sleeper.sleeps().len(), 1);
}

#[test]
fn missing_tools_stop_the_run() {
    let runner = FakeRunner::with_interface("wlan0", "00:c0:ca:11:22:33").missing(&["macchanger"]);
    let h = harness(runner, default_config());
    let mut operator = ScriptedOperator::new("wlan0", vec![Replacement::Generate]);

    let err = h.service.run(&mut operator).unwrap_err();

    assert!(matches!(
        err,
        PregameError::Configuration(ConfigurationError::MissingTools(ref tools)) if tools == &["macchanger".to_string()]
    ));
    assert!(h.runner.calls().is_empty());
    assert_eq!(h.sink.count(|event| matches!(event, RunEvent::Fatal { .. })), 1);
}

#[test]
fn no_wireless_interfaces_stop_the_run() {
    let h = harness(FakeRunner::default(), default_config());
    let mut operator = ScriptedOperator::new("wlan0", vec![]);

    let err = h.service.run(&mut operator).unwrap_err();

    assert!(matches!(err, PregameError::Discovery(DiscoveryError::NoInterfaces)));
    assert!(h.runner.mutations().is_empty());
}

#[test]
fn operator_failure_is_unexpected() {
    let h = harness(FakeRunner::with_interface("wlan0", "00:c0:ca:11:22:33"), default_config());
    let mut operator = ScriptedOperator::new("wlan0", vec![]);

    let err = h.service.run(&mut operator).unwrap_err();

    assert!(matches!(err, PregameError::Unexpected(_)));
    assert!(h.runner.mutations().is_empty());
}
