use {
    drive::{Actuator, DriveCommand, SharedActuator},
    std::{sync::Barrier, sync::Arc, thread},
};

#[derive(Default)]
struct Recorder {
    current: Option<DriveCommand>,
    history: Vec<DriveCommand>,
}

impl Actuator for Recorder {
    fn drive(&mut self, command: DriveCommand) {
        self.current = Some(command);
        self.history.push(command);
    }
}

#[test]
fn test_shared_actuator_forwards_commands() {
    let mut shared = SharedActuator::new(Recorder::default());
    shared.drive(DriveCommand::Forward);
    shared.drive(DriveCommand::Right);
    shared.with(|rec| {
        assert_eq!(rec.current, Some(DriveCommand::Right));
        assert_eq!(rec.history, vec![DriveCommand::Forward, DriveCommand::Right]);
    });
}

#[test]
fn test_clones_share_one_actuator() {
    let shared = SharedActuator::new(Recorder::default());
    let mut a = shared.clone();
    let mut b = shared.clone();
    a.drive(DriveCommand::Forward);
    b.drive(DriveCommand::Stop);
    assert_eq!(shared.with(|rec| rec.current), Some(DriveCommand::Stop));
}

#[test]
fn test_concurrent_writers_last_writer_wins() {
    let shared = SharedActuator::new(Recorder::default());
    let barrier = Arc::new(Barrier::new(3));

    let handles: Vec<_> = [DriveCommand::Forward, DriveCommand::Left, DriveCommand::Stop]
        .into_iter()
        .map(|command| {
            let mut actuator = shared.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..200 {
                    actuator.drive(command);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    shared.with(|rec| {
        assert_eq!(rec.history.len(), 600);
        // the physical state is exactly the most recent write, never a mix
        assert_eq!(rec.current, rec.history.last().copied());
    });
}
