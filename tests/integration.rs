//! End-to-end driving of task trees the way a control loop does: one `step()`
//! per tick until the root task reports finished.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use talon_tasks::config::{OneShotConfig, SequentialConfig, TimerBoundedConfig};
use talon_tasks::platform::StdTime;
use talon_tasks::task::{LoopFn, OneShotTask, SequentialTask, Task, TaskError, TimerBoundedTask};
use talon_tasks::timer::Timer;
use talon_tasks::traits::MockTime;
use talon_tasks::{logging, sequence};

type Trace = Rc<RefCell<Vec<String>>>;

fn record(trace: &Trace, label: &str) -> impl FnMut() {
    let trace = trace.clone();
    let label = label.to_string();
    move || trace.borrow_mut().push(label.clone())
}

/// Drive `task` at a fixed tick until it finishes, returning the tick count.
fn drive<T: Task>(task: &mut T, tick: impl Fn(), max_ticks: usize) -> Result<usize, TaskError> {
    let mut ticks = 0;
    while !task.is_finished()? {
        assert!(ticks < max_ticks, "task did not finish within {max_ticks} ticks");
        task.step()?;
        tick();
        ticks += 1;
    }
    Ok(ticks)
}

#[test]
fn autonomous_routine_with_mock_clock() {
    logging::init_for_tests();

    let time = MockTime::new();
    let trace = Trace::default();

    let drive_phase = TimerBoundedTask::with_length(
        time.clone(),
        100_000,
        LoopFn::new(record(&trace, "drive:init"), record(&trace, "drive")),
    )
    .with_name("drive");

    let mut routine = sequence![
        OneShotTask::new(record(&trace, "lower_intake")).with_name("lower_intake"),
        drive_phase,
        OneShotTask::new(record(&trace, "raise_intake")).with_name("raise_intake"),
    ]
    .with_name("autonomous")
    .iterate_on_failed_step(true);

    // 50 Hz
    let ticks = drive(&mut routine, || time.advance(20_000), 100).unwrap();

    let trace = trace.borrow();
    assert_eq!(trace.first().map(String::as_str), Some("lower_intake"));
    assert_eq!(trace[1], "drive:init");
    assert_eq!(trace.last().map(String::as_str), Some("raise_intake"));

    // 100 ms at 20 ms per tick: updates 0 through 100 ms into the timer run
    let drives = trace.iter().filter(|entry| *entry == "drive").count();
    assert_eq!(drives, 6);
    assert_eq!(ticks, 9);
}

#[test]
fn nested_sequences_with_real_clock() {
    logging::init_for_tests();

    let time = StdTime::new();
    let trace = Trace::default();

    let approach: SequentialTask = sequence![
        OneShotTask::new(record(&trace, "align")),
        TimerBoundedTask::new(Timer::from_millis(time, 15), record(&trace, "creep")),
    ]
    .with_name("approach");

    let mut routine = SequentialTask::with_config(
        vec![
            Box::new(approach) as Box<dyn Task>,
            Box::new(OneShotTask::new(record(&trace, "score"))),
        ],
        SequentialConfig::new().iterate_on_failed_step(true),
    );

    let ticks = drive(&mut routine, || thread::sleep(Duration::from_millis(2)), 1_000).unwrap();
    assert!(ticks >= 4);

    let trace = trace.borrow();
    assert_eq!(trace.first().map(String::as_str), Some("align"));
    assert_eq!(trace.last().map(String::as_str), Some("score"));
    assert!(trace.iter().any(|entry| entry == "creep"));
}

#[test]
fn shared_timer_bounds_two_phases() {
    let time = MockTime::new();
    let shared = Rc::new(RefCell::new(Timer::from_millis(time.clone(), 60)));
    let trace = Trace::default();

    // Both phases run against one budget: the second inherits what is left
    let config = TimerBoundedConfig::new().call_initialize_on_step(false);
    let mut routine = sequence![
        TimerBoundedTask::with_shared_timer(shared.clone(), record(&trace, "spin_up"))
            .with_config(config),
        TimerBoundedTask::with_shared_timer(shared.clone(), record(&trace, "feed"))
            .with_config(config),
    ];

    let ticks = drive(&mut routine, || time.advance(20_000), 20).unwrap();

    // The shared run expired during the first phase, so the second never ran
    assert!(trace.borrow().iter().all(|entry| entry == "spin_up"));
    assert_eq!(trace.borrow().len(), 4);
    // One more tick for each phase to settle past its end
    assert_eq!(ticks, 6);
    assert!(shared.borrow().is_expired());
}

#[test]
fn force_call_replays_finished_one_shot() {
    let trace = Trace::default();
    let mut zero_encoders = OneShotTask::with_config(
        record(&trace, "zero"),
        OneShotConfig::new().allow_force_call(true),
    );

    assert_eq!(zero_encoders.step(), Ok(true));
    assert_eq!(zero_encoders.step(), Ok(false));
    assert!(zero_encoders.force_step());
    assert!(!zero_encoders.set_force_call_allowed(false));
    assert!(zero_encoders.force_step());

    assert_eq!(trace.borrow().len(), 3);
}

#[test]
fn missing_timer_fails_fast_through_the_tree() {
    let trace = Trace::default();
    let unbound =
        TimerBoundedTask::<StdTime, _>::without_timer(record(&trace, "never")).with_name("unbound");
    let mut routine = sequence![OneShotTask::new(record(&trace, "first")), sequence![unbound]];

    let result = drive(&mut routine, || {}, 10);
    assert_eq!(result, Err(TaskError::MissingTimer { task: "unbound" }));
    assert_eq!(*trace.borrow(), ["first"]);
}
